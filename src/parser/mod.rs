//! Line reading, header registry and row classification
//!
//! ## Architecture
//!
//! - [`line_source`] - Trimmed line reading with end-of-input handling
//! - [`headers`] - Build-once header registry
//! - [`classifier`] - Full-parse partition into valid and malformed rows
//! - [`stats`] - Counts gathered by a full parse
//! - [`csv_parser`] - Orchestration of headers, streaming and full parsing
//!
//! ## Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use csv_atlas::config::{CsvConfig, ErrorPolicy};
//! use csv_atlas::parser::CsvParser;
//!
//! # fn example() -> csv_atlas::Result<()> {
//! let input = "\"id\",\"name\"\n\"1\",\"cup\"\n1,bad\n";
//! let config = CsvConfig::default().with_error_policy(ErrorPolicy::IgnoreBadRows);
//! let mut parser = CsvParser::new(config, Cursor::new(input));
//!
//! let rows = parser.parse()?;
//! assert_eq!(rows.valid_rows().len(), 1);
//! assert_eq!(rows.error_rows().len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod classifier;
pub mod csv_parser;
pub mod headers;
pub mod line_source;
pub mod stats;

#[cfg(test)]
mod tests;

pub use classifier::ParsedRows;
pub use csv_parser::CsvParser;
pub use headers::Headers;
pub use line_source::LineSource;
pub use stats::ParseStats;
