//! Tests for the field tokenizer
//!
//! Shared line fixtures live here; each submodule covers one stage.

use crate::config::CsvConfig;
use crate::tokenizer::Tokenizer;

mod scanner_tests;

/// A food row with an empty quoted field and commas inside content
pub const FOOD_LINE: &str =
    r#""1105904","branded_food","WESSON Vegetable Oil 1 GAL","","2020-11-13""#;

/// A food row whose description carries escaped quotes
pub const ESCAPED_LINE: &str =
    r#""1105905","branded_food","RAVIOLI, CHEESE ""DELICATO""","","2020-11-13""#;

/// Tokenizer with default settings and the given quote stripping
pub fn tokenizer(remove_field_quotes: bool) -> Tokenizer {
    Tokenizer::new(&CsvConfig::default().with_remove_field_quotes(remove_field_quotes))
}
