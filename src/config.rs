use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use quicli::prelude::*;
use serde_derive::Deserialize;

use crate::Result;

use crate::messages::{DEFAULT_NAME_ALIASES, DEFAULT_TABLE_NAME, DEFAULT_UNICODE_DATA};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Print the resolved aliases as a constant table.
    EmitTable,
    /// Print the code points no alias was found for.
    EmitUnresolved,
}

impl Default for Mode {
    fn default() -> Mode {
        Mode::EmitTable
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> ::std::result::Result<Mode, String> {
        match s {
            "emit-table" => Ok(Mode::EmitTable),
            "emit-unresolved" => Ok(Mode::EmitUnresolved),
            _ => Err(format!("unknown mode {:?}, expected emit-table or emit-unresolved", s)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Mode::EmitTable => "emit-table",
            Mode::EmitUnresolved => "emit-unresolved",
        })
    }
}

/// Syntax of the generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableFormat {
    /// `NAME = { 0x00000: "NULL", }`
    Dict,
    /// `pub const NAME: &[(u32, &str)] = &[ (0x00000, "NULL"), ];`
    Rust,
}

impl Default for TableFormat {
    fn default() -> TableFormat {
        TableFormat::Dict
    }
}

impl FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> ::std::result::Result<TableFormat, String> {
        match s {
            "dict" => Ok(TableFormat::Dict),
            "rust" => Ok(TableFormat::Rust),
            _ => Err(format!("unknown format {:?}, expected dict or rust", s)),
        }
    }
}

/// Contents of the optional TOML config file. Every key may be left out.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub unicode_data: Option<PathBuf>,
    pub name_aliases: Option<PathBuf>,
    pub mode: Option<Mode>,
    pub format: Option<TableFormat>,
    pub table_name: Option<String>,
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn parse(text: &str) -> Result<Config> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Config> {
        let text = read_file(path)?;
        let config = Config::parse(&text)
            .with_context(|_| format!("could not parse config {}", path.display()))?;
        debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Fills every unset key from `fallback`.
    pub fn or(self, fallback: Config) -> Config {
        Config {
            unicode_data: self.unicode_data.or(fallback.unicode_data),
            name_aliases: self.name_aliases.or(fallback.name_aliases),
            mode: self.mode.or(fallback.mode),
            format: self.format.or(fallback.format),
            table_name: self.table_name.or(fallback.table_name),
            output: self.output.or(fallback.output),
        }
    }
}

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub unicode_data: PathBuf,
    pub name_aliases: PathBuf,
    pub mode: Mode,
    pub format: TableFormat,
    pub table_name: String,
    pub output: Option<PathBuf>,
}

impl From<Config> for Settings {
    fn from(config: Config) -> Settings {
        Settings {
            unicode_data: config
                .unicode_data
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UNICODE_DATA)),
            name_aliases: config
                .name_aliases
                .unwrap_or_else(|| PathBuf::from(DEFAULT_NAME_ALIASES)),
            mode: config.mode.unwrap_or_default(),
            format: config.format.unwrap_or_default(),
            table_name: config
                .table_name
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            output: config.output,
        }
    }
}
