//! Tests for line reading, headers and row classification
//!
//! Fixture files are shared with the integration tests under `tests/data`.

use std::io::Cursor;

use crate::config::{CsvConfig, ErrorPolicy, ReadMode};
use crate::parser::CsvParser;

mod headers_tests;

/// 122 measure units with a header row; row 118 is unit 1118
pub const MEASURE_UNIT_CSV: &str = include_str!("../../../tests/data/measure_unit.csv");

/// Food rows where rows 2 and 6 are malformed
pub const MIXED_DATA_CSV: &str = include_str!("../../../tests/data/mixed_data.csv");

/// Config for full parsing with the given error policy
pub fn full_parse_config(error_policy: ErrorPolicy) -> CsvConfig {
    CsvConfig::default()
        .with_read_mode(ReadMode::FullParse)
        .with_error_policy(error_policy)
}

/// Parser over in-memory content
pub fn parser(content: &str, config: CsvConfig) -> CsvParser<Cursor<&str>> {
    CsvParser::new(config, Cursor::new(content))
}
