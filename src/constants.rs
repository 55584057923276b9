//! Default values and character classes used across the crate

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Default field delimiter
pub const DEFAULT_DELIMITER: &str = ",";

/// Default quote character
pub const DEFAULT_QUOTE_CHARACTER: &str = "\"";

/// Whether the first line is treated as a header row by default
pub const DEFAULT_CONTAINS_HEADER_ROW: bool = true;

/// Whether surrounding quotes are removed from returned fields by default
pub const DEFAULT_REMOVE_FIELD_QUOTES: bool = true;

// =============================================================================
// Quoting
// =============================================================================

/// Characters accepted as the configured quote character
pub const QUOTE_CHARACTERS: &[char] = &['"', '\''];

/// Name of the settings table read by [`CsvSettings::from_toml_str`](crate::config::CsvSettings::from_toml_str)
pub const SETTINGS_SECTION: &str = "csv_parser";

// =============================================================================
// Date and Time Formats
// =============================================================================

/// Date layouts tried in order when coercing into a date field
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Date-time layouts tried in order when coercing into a date-time field
pub const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

// =============================================================================
// Command Line
// =============================================================================

/// Malformed rows listed by the check command before the rest are summarized
pub const MAX_REPORTED_ROWS: usize = 10;
