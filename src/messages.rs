pub const ABOUT_MESSAGE: &str = "Builds the table of names for code points whose \
UnicodeData.txt name is missing or non-standard (<control>, ranges, ...), \
taking the first matching alias from NameAliases.txt.";

pub const DEFAULT_UNICODE_DATA: &str = "UnicodeData.txt";

pub const DEFAULT_NAME_ALIASES: &str = "NameAliases.txt";

pub const DEFAULT_TABLE_NAME: &str = "MISSING_UNICODE_NAMES";

pub const NOT_FOUND_SUFFIX: &str = "not found:";
