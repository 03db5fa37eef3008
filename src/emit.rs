//! Rendering of a [`Generated`] result as text.

use std::fmt::Write;

use crate::config::TableFormat;
use crate::messages::NOT_FOUND_SUFFIX;
use crate::ucd::{Generated, ResolvedNames, Unresolved};
use crate::unicode::standard_name;

/// How an emitted table is spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    pub format: TableFormat,
    pub name: String,
}

pub fn render(generated: &Generated, style: &TableStyle) -> String {
    match generated {
        Generated::Table(names) => render_table(names, style),
        Generated::Unresolved(unresolved) => render_unresolved(unresolved),
    }
}

pub fn render_table(names: &ResolvedNames, style: &TableStyle) -> String {
    let mut out = String::new();

    match style.format {
        TableFormat::Dict => writeln!(out, "{} = {{", style.name).unwrap(),
        TableFormat::Rust => writeln!(out, "pub const {}: &[(u32, &str)] = &[", style.name).unwrap(),
    }

    for (code, alias) in names.iter() {
        match style.format {
            TableFormat::Dict => writeln!(out, "    0x{:05x}: \"{}\",", code, alias).unwrap(),
            TableFormat::Rust => writeln!(out, "    (0x{:05x}, {:?}),", code, alias).unwrap(),
        }
    }

    out.push_str(match style.format {
        TableFormat::Dict => "}\n",
        TableFormat::Rust => "];\n",
    });
    out
}

pub fn render_unresolved(unresolved: &Unresolved) -> String {
    let mut out = format!("{} {}\n", unresolved.count(), NOT_FOUND_SUFFIX);
    for &code in &unresolved.codes {
        writeln!(out, "{:X} {}", code, standard_name(code)).unwrap();
    }
    out
}
