//! Readers over an already-open stream
//!
//! - [`CsvReader`] hands out raw lines and string values
//! - [`RecordReader`] binds each row onto a [`CsvRecord`](crate::binding::CsvRecord)
//!
//! ## Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use csv_atlas::config::CsvConfig;
//! use csv_atlas::csv_record;
//! use csv_atlas::reader::RecordReader;
//!
//! #[derive(Debug, Default)]
//! struct MeasureUnit {
//!     measure_unit_id: i32,
//!     name: String,
//! }
//!
//! csv_record!(MeasureUnit {
//!     measure_unit_id => name("id"),
//!     name => name("name"),
//! });
//!
//! # fn example() -> csv_atlas::Result<()> {
//! let input = "\"id\",\"name\"\n\"1000\",\"cup\"\n\"1001\",\"tablespoon\"\n";
//! let mut reader = RecordReader::<MeasureUnit, _>::new(CsvConfig::default(), Cursor::new(input));
//!
//! let units = reader.records()?;
//! assert_eq!(units.len(), 2);
//! assert_eq!(units[1].name, "tablespoon");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod csv_reader;
pub mod record_reader;

#[cfg(test)]
mod tests;

pub use csv_reader::CsvReader;
pub use record_reader::RecordReader;
