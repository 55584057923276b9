//! Error handling for CSV reading and record binding.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side
//! is the single [`Error`] enum below. Coercion helpers use the narrower
//! [`ConversionError`](crate::binding::ConversionError), which the binder lifts
//! into [`Error::FormatConversion`] once the destination field is known.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::binding::ConversionError;

/// Result type alias for csv_atlas operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for reading, classifying and binding CSV rows
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation on the underlying stream failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration failed validation
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Settings document could not be read
    #[error("Failed to load settings: {message}")]
    Settings { message: String },

    /// Sequential access to parsed rows was requested before a full parse
    #[error("The input cannot be read because it has not been parsed")]
    NotYetParsed,

    /// A full parse found malformed rows and the error policy demands failure
    #[error("{} bad data row(s) were found while parsing the input", rows.len())]
    BadData { rows: BTreeMap<usize, String> },

    /// A record declares a header name that the header row does not contain
    #[error("Header '{header}' bound to field '{field}' was not found in the header row")]
    MissingHeaderBinding { header: String, field: String },

    /// A field value could not be converted into its declared type
    #[error("Cannot convert value for field '{field}': {source}")]
    FormatConversion {
        field: String,
        #[source]
        source: ConversionError,
    },

    /// A row has no value at the column a binding points to
    #[error("Row has {available} field(s) but field '{field}' is bound to column {index}")]
    FieldOutOfRange {
        field: String,
        index: usize,
        available: usize,
    },

    /// A record was asked to assign a field it does not declare
    #[error("Record has no field named '{field}'")]
    UnknownField { field: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration validation error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create a settings loading error
    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings {
            message: message.into(),
        }
    }

    /// Create a bad data error from the malformed-row map
    pub fn bad_data(rows: BTreeMap<usize, String>) -> Self {
        Self::BadData { rows }
    }

    /// Create a missing header binding error
    pub fn missing_header_binding(header: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingHeaderBinding {
            header: header.into(),
            field: field.into(),
        }
    }

    /// Create a format conversion error for a destination field
    pub fn format_conversion(field: impl Into<String>, source: ConversionError) -> Self {
        Self::FormatConversion {
            field: field.into(),
            source,
        }
    }

    /// Create a field out of range error
    pub fn field_out_of_range(field: impl Into<String>, index: usize, available: usize) -> Self {
        Self::FieldOutOfRange {
            field: field.into(),
            index,
            available,
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Malformed rows carried by a [`Error::BadData`] error
    pub fn bad_rows(&self) -> Option<&BTreeMap<usize, String>> {
        match self {
            Self::BadData { rows } => Some(rows),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "Reading from the input stream failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Settings {
            message: error.to_string(),
        }
    }
}
