//! Reader configuration and settings binding.
//!
//! [`CsvConfig`] is the immutable configuration every reader is built from.
//! [`CsvSettings`] mirrors the loosely-typed settings section an application
//! keeps in its own configuration files; it deserializes with serde and is
//! turned into a [`CsvConfig`] with [`CsvConfig::from_settings`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    DEFAULT_CONTAINS_HEADER_ROW, DEFAULT_DELIMITER, DEFAULT_QUOTE_CHARACTER,
    DEFAULT_REMOVE_FIELD_QUOTES, QUOTE_CHARACTERS, SETTINGS_SECTION,
};
use crate::{Error, Result};

/// What a full parse does when it finds malformed rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Record malformed rows and carry on
    IgnoreBadRows,
    /// Record malformed rows, then fail the parse with [`Error::BadData`]
    #[default]
    FailOnBadRows,
}

/// How a reader consumes its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadMode {
    /// One line per call, no upfront classification
    #[default]
    Streaming,
    /// Classify and index every row on first access
    FullParse,
}

/// Immutable reader configuration
///
/// Construction never fails; call [`CsvConfig::validate`] to check the quote
/// character and delimiter before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvConfig {
    contains_header_row: bool,
    delimiter: String,
    quote_character: String,
    remove_field_quotes: bool,
    error_policy: ErrorPolicy,
    read_mode: ReadMode,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            contains_header_row: DEFAULT_CONTAINS_HEADER_ROW,
            delimiter: DEFAULT_DELIMITER.to_string(),
            quote_character: DEFAULT_QUOTE_CHARACTER.to_string(),
            remove_field_quotes: DEFAULT_REMOVE_FIELD_QUOTES,
            error_policy: ErrorPolicy::default(),
            read_mode: ReadMode::default(),
        }
    }
}

impl CsvConfig {
    /// Create a configuration from explicit values
    pub fn new(
        contains_header_row: bool,
        delimiter: impl Into<String>,
        quote_character: impl Into<String>,
        remove_field_quotes: bool,
        error_policy: ErrorPolicy,
    ) -> Self {
        Self {
            contains_header_row,
            delimiter: delimiter.into(),
            quote_character: quote_character.into(),
            remove_field_quotes,
            error_policy,
            read_mode: ReadMode::default(),
        }
    }

    /// Create a configuration from an external settings section
    ///
    /// Values missing from the settings fall back to the defaults.
    pub fn from_settings(settings: &CsvSettings) -> Self {
        let defaults = Self::default();

        let config = Self {
            contains_header_row: settings
                .contains_header_row
                .unwrap_or(defaults.contains_header_row),
            delimiter: settings
                .delimiter
                .clone()
                .unwrap_or(defaults.delimiter),
            quote_character: settings
                .quote_character
                .clone()
                .unwrap_or(defaults.quote_character),
            remove_field_quotes: settings
                .remove_field_quotes
                .unwrap_or(defaults.remove_field_quotes),
            error_policy: settings.error_policy().unwrap_or(defaults.error_policy),
            read_mode: settings.read_mode.unwrap_or(defaults.read_mode),
        };

        debug!("Configuration built from settings: {:?}", config);
        config
    }

    /// Whether the first line is a header row
    pub fn contains_header_row(&self) -> bool {
        self.contains_header_row
    }

    /// Configured delimiter, exactly as given
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Configured quote character, exactly as given
    pub fn quote_character(&self) -> &str {
        &self.quote_character
    }

    /// Whether one outer quote pair is removed from returned fields
    pub fn remove_field_quotes(&self) -> bool {
        self.remove_field_quotes
    }

    /// Policy applied when a full parse finds malformed rows
    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    /// How the reader consumes its input
    pub fn read_mode(&self) -> ReadMode {
        self.read_mode
    }

    /// Delimiter as a character; the first character of the configured value
    pub fn delimiter_char(&self) -> char {
        self.delimiter.chars().next().unwrap_or(',')
    }

    /// Quote as a character; the first character of the configured value
    pub fn quote_char(&self) -> char {
        self.quote_character.chars().next().unwrap_or('"')
    }

    /// Set whether the first line is a header row
    pub fn with_header_row(mut self, contains_header_row: bool) -> Self {
        self.contains_header_row = contains_header_row;
        self
    }

    /// Set the delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the quote character
    pub fn with_quote_character(mut self, quote_character: impl Into<String>) -> Self {
        self.quote_character = quote_character.into();
        self
    }

    /// Set whether outer quotes are removed from fields
    pub fn with_remove_field_quotes(mut self, remove_field_quotes: bool) -> Self {
        self.remove_field_quotes = remove_field_quotes;
        self
    }

    /// Set the error policy
    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    /// Set the read mode
    pub fn with_read_mode(mut self, read_mode: ReadMode) -> Self {
        self.read_mode = read_mode;
        self
    }

    /// Check that the quote character and delimiter are usable
    pub fn validate(&self) -> Result<()> {
        let mut quote = self.quote_character.chars();
        match (quote.next(), quote.next()) {
            (Some(c), None) if QUOTE_CHARACTERS.contains(&c) => {}
            _ => {
                return Err(Error::invalid_configuration(format!(
                    "Invalid quote character '{}' (expected one of {:?})",
                    self.quote_character, QUOTE_CHARACTERS
                )));
            }
        }

        let mut delimiter = self.delimiter.chars();
        match (delimiter.next(), delimiter.next()) {
            (Some(c), None) if c == self.quote_char() => Err(Error::invalid_configuration(
                format!("Delimiter '{}' cannot be the quote character", c),
            )),
            (Some(_), None) => Ok(()),
            _ => Err(Error::invalid_configuration(format!(
                "Delimiter must be a single character, got '{}'",
                self.delimiter
            ))),
        }
    }
}

/// Settings section as stored in application configuration files
///
/// Every value is optional; see [`CsvConfig::from_settings`]. Both snake_case
/// and camelCase keys are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvSettings {
    #[serde(alias = "containsHeaderRow")]
    pub contains_header_row: Option<bool>,

    pub delimiter: Option<String>,

    #[serde(alias = "quoteCharacter")]
    pub quote_character: Option<String>,

    #[serde(alias = "removeFieldQuotes")]
    pub remove_field_quotes: Option<bool>,

    #[serde(alias = "ignoreBadData")]
    pub ignore_bad_data: Option<bool>,

    #[serde(alias = "throwErrorOnBadData")]
    pub throw_error_on_bad_data: Option<bool>,

    #[serde(alias = "readMode")]
    pub read_mode: Option<ReadMode>,
}

/// Top-level settings document holding the `[csv_parser]` table
#[derive(Debug, Deserialize)]
struct SettingsDocument {
    #[serde(alias = "CsvParser", alias = "csvParser")]
    csv_parser: Option<CsvSettings>,
}

impl CsvSettings {
    /// Parse settings from a TOML document containing a `[csv_parser]` table
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let document: SettingsDocument = toml::from_str(content)?;

        document.csv_parser.ok_or_else(|| {
            Error::settings(format!(
                "Settings document has no [{}] table",
                SETTINGS_SECTION
            ))
        })
    }

    /// Resolve the error policy: the throw flag wins, then the ignore flag
    pub fn error_policy(&self) -> Option<ErrorPolicy> {
        match (self.throw_error_on_bad_data, self.ignore_bad_data) {
            (Some(true), _) => Some(ErrorPolicy::FailOnBadRows),
            (Some(false), _) => Some(ErrorPolicy::IgnoreBadRows),
            (None, Some(true)) => Some(ErrorPolicy::IgnoreBadRows),
            (None, Some(false)) => Some(ErrorPolicy::FailOnBadRows),
            (None, None) => None,
        }
    }
}
