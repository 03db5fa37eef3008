//! Parsing of `UnicodeData.txt` and `NameAliases.txt` and the
//! detect/resolve pipeline built on top of them.

use std::collections::{HashMap, HashSet};
use std::io::BufRead;

use quicli::prelude::*;

use crate::Result;

use crate::config::Mode;

/// Identifiers, verbatim from field 0 of `UnicodeData.txt`, whose name field
/// is not a standard name.
pub type MissingNames = HashSet<String>;

/// Aliases keyed by code point, in the order they were found.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolvedNames {
    entries: Vec<(u32, String)>,
    index: HashMap<u32, usize>,
}

impl ResolvedNames {
    pub fn new() -> ResolvedNames {
        ResolvedNames::default()
    }

    /// A code point seen again keeps its position and takes the new alias.
    pub fn insert(&mut self, code: u32, alias: String) {
        match self.index.get(&code) {
            Some(&i) => self.entries[i].1 = alias,
            None => {
                self.index.insert(code, self.entries.len());
                self.entries.push((code, alias));
            }
        }
    }

    pub fn get(&self, code: u32) -> Option<&str> {
        self.index.get(&code).map(|&i| self.entries[i].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries.iter().map(|(code, alias)| (*code, alias.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of folding the alias file over the missing set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub resolved: ResolvedNames,
    pub remaining: MissingNames,
}

/// Identifiers no alias was found for, sorted by code point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    pub codes: Vec<u32>,
}

impl Unresolved {
    pub fn count(&self) -> usize {
        self.codes.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    Table(ResolvedNames),
    Unresolved(Unresolved),
}

/// Full-string match against `[A-Z0-9 -]*`. The empty name matches.
pub fn is_standard_name(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == ' ' || c == '-')
}

fn parse_code(field: &str, line_no: usize) -> Result<u32> {
    u32::from_str_radix(field.trim(), 16)
        .map_err(|e| format_err!("line {}: invalid code point {:?}: {}", line_no, field, e))
}

fn name_field<'a>(fields: &[&'a str], line_no: usize, line: &str) -> Result<&'a str> {
    match fields.get(1) {
        Some(field) => Ok(*field),
        None => bail!("line {}: malformed record {:?}", line_no, line),
    }
}

/// Collects the identifiers whose name field is not a standard name.
pub fn missing_names<R: BufRead>(input: R) -> Result<MissingNames> {
    let mut missing = MissingNames::new();
    let mut records = 0;

    for (i, line) in input.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split(';').collect();
        let name = name_field(&fields, i + 1, &line)?;
        records += 1;

        if !is_standard_name(name) {
            trace!("{} has non-standard name {:?}", fields[0], name);
            missing.insert(fields[0].to_string());
        }
    }

    info!("{} of {} records have no standard name", missing.len(), records);
    Ok(missing)
}

/// Takes the first alias of every missing identifier, leaving the ones with
/// no alias in `remaining`.
pub fn resolve_aliases<R: BufRead>(missing: MissingNames, input: R) -> Result<Resolution> {
    let mut resolution = Resolution {
        resolved: ResolvedNames::new(),
        remaining: missing,
    };

    for (i, line) in input.lines().enumerate() {
        let line = line?;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(';').collect();
        if !resolution.remaining.contains(fields[0]) {
            debug!("skipping alias line {}: {} is not missing", i + 1, fields[0]);
            continue;
        }

        let alias = name_field(&fields, i + 1, &line)?;
        let code = parse_code(fields[0], i + 1)?;
        resolution.resolved.insert(code, alias.to_string());
        resolution.remaining.remove(fields[0]);
    }

    info!(
        "resolved {} names, {} still missing",
        resolution.resolved.len(),
        resolution.remaining.len()
    );
    Ok(resolution)
}

/// Runs detection then resolution over the two inputs and keeps the part
/// `mode` asks for.
pub fn generate<U, A>(unicode_data: U, name_aliases: A, mode: Mode) -> Result<Generated>
where
    U: BufRead,
    A: BufRead,
{
    let missing = missing_names(unicode_data)?;
    let resolution = resolve_aliases(missing, name_aliases)?;

    match mode {
        Mode::EmitTable => Ok(Generated::Table(resolution.resolved)),
        Mode::EmitUnresolved => {
            let mut codes = resolution
                .remaining
                .iter()
                .map(|id| {
                    u32::from_str_radix(id.trim(), 16)
                        .map_err(|e| format_err!("invalid code point {:?}: {}", id, e))
                })
                .collect::<Result<Vec<u32>>>()?;
            codes.sort_unstable();
            Ok(Generated::Unresolved(Unresolved { codes }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNICODE_DATA: &str = "\
0000;<control>;Cc;0;BN;;;;;N;NULL;;;;
0001;<control>;Cc;0;BN;;;;;N;START OF HEADING;;;;
0002;;Cc;0;BN;;;;;N;;;;;
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
00AD;SOFT HYPHEN;Cf;0;BN;;;;;N;;;;;
3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;
E000;<Private Use, First>;Co;0;L;;;;;N;;;;;
";

    const NAME_ALIASES: &str = "\
# NameAliases-15.0.0.txt
#
0000;NULL;control
0000;NUL;abbreviation

0001;START OF HEADING;control
0001;SOH;abbreviation
0041;SHOULD NOT APPEAR;correction
";

    fn missing(input: &str) -> MissingNames {
        missing_names(input.as_bytes()).unwrap()
    }

    #[test]
    fn standard_name_pattern() {
        assert!(is_standard_name("LATIN CAPITAL LETTER A"));
        assert!(is_standard_name("HANGUL JUNGSEONG O-E"));
        assert!(is_standard_name("DIGIT 0"));
        assert!(is_standard_name(""));
        assert!(!is_standard_name("<control>"));
        assert!(!is_standard_name("Latin"));
        assert!(!is_standard_name("A_B"));
        assert!(!is_standard_name("\u{C0}"));
    }

    #[test]
    fn detects_non_standard_names() {
        let missing = missing(UNICODE_DATA);
        let mut ids: Vec<&str> = missing.iter().map(String::as_str).collect();
        ids.sort();
        assert_eq!(ids, vec!["0000", "0001", "3400", "E000"]);
    }

    #[test]
    fn empty_name_is_not_missing() {
        assert!(missing("0002;;Cc;0;BN;;;;;N;;;;;\n").is_empty());
    }

    #[test]
    fn identifiers_are_kept_verbatim() {
        let missing = missing("00e9;<lower>;\n");
        assert!(missing.contains("00e9"));
        assert!(!missing.contains("00E9"));
    }

    #[test]
    fn crlf_line_endings() {
        let missing = missing("0041;LATIN CAPITAL LETTER A\r\n0000;<control>\r\n");
        assert_eq!(missing.len(), 1);
        assert!(missing.contains("0000"));
    }

    #[test]
    fn malformed_record_is_fatal() {
        let err = missing_names("0041;LATIN CAPITAL LETTER A\n0042\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn first_alias_wins() {
        let resolution = resolve_aliases(missing(UNICODE_DATA), NAME_ALIASES.as_bytes()).unwrap();
        let entries: Vec<(u32, &str)> = resolution.resolved.iter().collect();
        assert_eq!(entries, vec![(0x0, "NULL"), (0x1, "START OF HEADING")]);
    }

    #[test]
    fn resolved_identifiers_leave_the_remaining_set() {
        let resolution = resolve_aliases(missing(UNICODE_DATA), NAME_ALIASES.as_bytes()).unwrap();
        let mut remaining: Vec<&str> = resolution.remaining.iter().map(String::as_str).collect();
        remaining.sort();
        assert_eq!(remaining, vec!["3400", "E000"]);
    }

    #[test]
    fn aliases_for_standard_names_are_ignored() {
        let resolution = resolve_aliases(missing(UNICODE_DATA), NAME_ALIASES.as_bytes()).unwrap();
        assert_eq!(resolution.resolved.get(0x41), None);
    }

    #[test]
    fn alias_lookup_is_by_literal_identifier() {
        let resolution = resolve_aliases(missing("0000;<control>\n"), "0;NULL;control\n".as_bytes()).unwrap();
        assert!(resolution.resolved.is_empty());
        assert!(resolution.remaining.contains("0000"));
    }

    #[test]
    fn bad_hex_in_alias_file_is_fatal() {
        let err = resolve_aliases(missing("XYZ;<bad>\n"), "XYZ;ALIAS;control\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid code point"));
    }

    #[test]
    fn short_alias_line_is_fatal_only_when_missing() {
        let ok = resolve_aliases(missing("0000;<control>\n"), "0041\n0000;NULL\n".as_bytes()).unwrap();
        assert_eq!(ok.resolved.get(0), Some("NULL"));

        assert!(resolve_aliases(missing("0000;<control>\n"), "0000\n".as_bytes()).is_err());
    }

    #[test]
    fn equal_code_points_keep_first_position() {
        let mut names = ResolvedNames::new();
        names.insert(1, "ONE".to_string());
        names.insert(2, "TWO".to_string());
        names.insert(1, "UNO".to_string());
        let entries: Vec<(u32, &str)> = names.iter().collect();
        assert_eq!(entries, vec![(1, "UNO"), (2, "TWO")]);
    }

    #[test]
    fn scenario_single_control() {
        let generated = generate(
            "0041;LATIN CAPITAL LETTER A;Lu\n0000;<control>;Cc\n".as_bytes(),
            "0000;NULL;control;\n".as_bytes(),
            Mode::EmitTable,
        )
        .unwrap();

        let mut expected = ResolvedNames::new();
        expected.insert(0, "NULL".to_string());
        assert_eq!(generated, Generated::Table(expected));
    }

    #[test]
    fn scenario_duplicate_alias() {
        let generated = generate(
            "0001;<control>;Cc\n".as_bytes(),
            "0001;FIRST;control;\n0001;SECOND;control;\n".as_bytes(),
            Mode::EmitTable,
        )
        .unwrap();

        match generated {
            Generated::Table(names) => {
                assert_eq!(names.len(), 1);
                assert_eq!(names.get(1), Some("FIRST"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unresolved_are_sorted_numerically() {
        let generated = generate(
            "E000;<Private Use, First>\n3400;<CJK>\n00A0;<x>\n0000;<control>\n".as_bytes(),
            "0000;NULL;control\n".as_bytes(),
            Mode::EmitUnresolved,
        )
        .unwrap();

        assert_eq!(
            generated,
            Generated::Unresolved(Unresolved {
                codes: vec![0xA0, 0x3400, 0xE000],
            })
        );
    }

    #[test]
    fn every_key_was_missing_and_aliased() {
        let missing = missing(UNICODE_DATA);
        let generated = generate(UNICODE_DATA.as_bytes(), NAME_ALIASES.as_bytes(), Mode::EmitTable).unwrap();
        if let Generated::Table(names) = generated {
            for (code, _) in names.iter() {
                let id = format!("{:04X}", code);
                assert!(missing.contains(&id));
                assert!(NAME_ALIASES.lines().any(|l| l.starts_with(&format!("{};", id))));
            }
        } else {
            panic!("expected a table");
        }
    }
}
