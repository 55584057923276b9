//! Quote-aware field tokenizer
//!
//! Turns one raw line into its ordered field values. Tokenizing runs in three
//! steps:
//! - [`sanitize::collapse_escaped_quotes`] de-escapes doubled quotes
//! - [`scanner::FieldScanner`] locates the quoted fields
//! - [`sanitize::strip_outer_quotes`] removes one outer quote pair per field
//!   when the configuration asks for it
//!
//! Every field is expected to be quoted. Unquoted text is not a field, so an
//! unquoted line produces no values and is classified as malformed by a full
//! parse.

pub mod sanitize;
pub mod scanner;

#[cfg(test)]
mod tests;

pub use sanitize::{collapse_escaped_quotes, strip_outer_quotes};
pub use scanner::{FieldScanner, FieldSpan};

use crate::config::CsvConfig;

/// Splits lines into field values according to a [`CsvConfig`]
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    scanner: FieldScanner,
    quote: char,
    delimiter: char,
    remove_field_quotes: bool,
}

impl Tokenizer {
    /// Create a tokenizer for the given configuration
    pub fn new(config: &CsvConfig) -> Self {
        let quote = config.quote_char();
        let delimiter = config.delimiter_char();

        Self {
            scanner: FieldScanner::new(quote, delimiter),
            quote,
            delimiter,
            remove_field_quotes: config.remove_field_quotes(),
        }
    }

    /// Split a line into its field values
    pub fn tokenize(&self, line: &str) -> Vec<String> {
        let sanitized = collapse_escaped_quotes(line, self.quote, self.delimiter);

        self.scanner
            .scan(&sanitized)
            .iter()
            .map(|span| self.finish_field(span.slice(&sanitized)))
            .collect()
    }

    /// Whether a line consists of quoted fields separated by single delimiters
    pub fn is_well_formed(&self, line: &str) -> bool {
        let sanitized = collapse_escaped_quotes(line, self.quote, self.delimiter);
        self.scanner.is_well_formed(&sanitized)
    }

    fn finish_field(&self, field: &str) -> String {
        if self.remove_field_quotes && self.scanner.contains_field(field) {
            strip_outer_quotes(field, self.quote).to_string()
        } else {
            field.to_string()
        }
    }
}
