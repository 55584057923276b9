//! csv_atlas
//!
//! A line-oriented reader for quoted CSV text that binds rows onto
//! statically-typed records.
//!
//! This library provides tools for:
//! - Quote-aware field tokenizing that tolerates delimiters inside quoted
//!   content and de-escapes doubled quotes
//! - Streaming reads, or a full parse that classifies every row as valid or
//!   malformed and allows random access by row index
//! - A build-once header registry
//! - Declarative header to field bindings with typed coercion
//!
//! ## Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use csv_atlas::{CsvConfig, RecordReader, csv_record};
//!
//! #[derive(Debug, Default)]
//! struct FoodName {
//!     fdc_id: i32,
//!     description: String,
//!     food_category_id: Option<i32>,
//! }
//!
//! csv_record!(FoodName {
//!     fdc_id => name("fdc_id"),
//!     description => name("description"),
//!     food_category_id => name("food_category_id"),
//! });
//!
//! # fn example() -> csv_atlas::Result<()> {
//! let input = "\"fdc_id\",\"description\",\"food_category_id\"\n\
//!              \"1105904\",\"WESSON Vegetable Oil 1 GAL\",\"\"\n";
//!
//! let mut reader = RecordReader::<FoodName, _>::new(CsvConfig::default(), Cursor::new(input));
//! let food = reader.next_record()?.unwrap();
//!
//! assert_eq!(food.fdc_id, 1105904);
//! assert_eq!(food.description, "WESSON Vegetable Oil 1 GAL");
//! assert_eq!(food.food_category_id, None);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod binding;
pub mod config;
pub mod constants;
pub mod error;
pub mod parser;
pub mod reader;
pub mod tokenizer;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use binding::{CsvRecord, FieldKind, HeaderKey, PropertyAtlas, Value};
pub use config::{CsvConfig, CsvSettings, ErrorPolicy, ReadMode};
pub use error::{Error, Result};
pub use parser::{Headers, ParseStats};
pub use reader::{CsvReader, RecordReader};
pub use tokenizer::Tokenizer;
