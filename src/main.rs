mod config;
mod emit;
mod messages;
mod ucd;
mod unicode;

use std::path::PathBuf;

use quicli::prelude::*;
use structopt::StructOpt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

use config::{Config, Mode, Settings, TableFormat};
use emit::TableStyle;

#[derive(StructOpt)]
#[structopt(name = "missing_unicode_names", raw(about = "messages::ABOUT_MESSAGE"))]
struct Cli {
    /// TOML file providing defaults for every other option
    #[structopt(long = "config", short = "c", parse(from_os_str))]
    config: Option<PathBuf>,

    /// emit-table or emit-unresolved
    #[structopt(long = "mode", short = "m")]
    mode: Option<Mode>,

    /// Table syntax: dict or rust
    #[structopt(long = "format", short = "f")]
    format: Option<TableFormat>,

    /// Path to UnicodeData.txt
    #[structopt(long = "unicode-data", parse(from_os_str))]
    unicode_data: Option<PathBuf>,

    /// Path to NameAliases.txt
    #[structopt(long = "name-aliases", parse(from_os_str))]
    name_aliases: Option<PathBuf>,

    /// Name given to the emitted table
    #[structopt(long = "table-name")]
    table_name: Option<String>,

    /// Write to this file instead of stdout
    #[structopt(long = "output", short = "o", parse(from_os_str))]
    output: Option<PathBuf>,

    #[structopt(flatten)]
    verbosity: Verbosity,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let flags = Config {
            unicode_data: self.unicode_data.clone(),
            name_aliases: self.name_aliases.clone(),
            mode: self.mode,
            format: self.format,
            table_name: self.table_name.clone(),
            output: self.output.clone(),
        };

        let file = match self.config {
            Some(ref path) => Config::load(path)?,
            None => Config::default(),
        };

        Ok(Settings::from(flags.or(file)))
    }
}

fn run(settings: &Settings) -> Result<String> {
    info!(
        "mode {}, reading {} and {}",
        settings.mode,
        settings.unicode_data.display(),
        settings.name_aliases.display()
    );

    let unicode_data = read_file(&settings.unicode_data)?;
    let name_aliases = read_file(&settings.name_aliases)?;

    let generated = ucd::generate(unicode_data.as_bytes(), name_aliases.as_bytes(), settings.mode)
        .with_context(|_| {
            format!(
                "could not build table from {} and {}",
                settings.unicode_data.display(),
                settings.name_aliases.display()
            )
        })?;

    let style = TableStyle {
        format: settings.format,
        name: settings.table_name.clone(),
    };
    Ok(emit::render(&generated, &style))
}

fn main() -> CliResult {
    let args = Cli::from_args();
    args.verbosity.setup_env_logger("missing_unicode_names")?;

    let settings = args.settings()?;
    let text = run(&settings)?;

    match settings.output {
        Some(ref path) => {
            write_to_file(path, &text)?;
            info!("wrote {}", path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}
