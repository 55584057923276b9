//! Tests for the untyped and typed readers

use chrono::NaiveDate;
use std::io::Cursor;

use crate::config::CsvConfig;
use crate::csv_record;
use crate::reader::{CsvReader, RecordReader};


pub const MEASURE_UNIT_CSV: &str = include_str!("../../../tests/data/measure_unit.csv");
pub const MEASURE_UNIT_NO_HEADER_CSV: &str =
    include_str!("../../../tests/data/measure_unit_no_header.csv");
pub const FOOD_CSV: &str = include_str!("../../../tests/data/food.csv");
pub const MIXED_DATA_CSV: &str = include_str!("../../../tests/data/mixed_data.csv");

#[derive(Debug, Default, Clone, PartialEq)]
pub struct MeasureUnit {
    pub measure_unit_id: i32,
    pub name: String,
}

csv_record!(MeasureUnit {
    measure_unit_id => name("id"),
    name => name("name"),
});

#[derive(Debug, Default, Clone, PartialEq)]
pub struct IndexedUnit {
    pub id: u32,
    pub name: String,
}

csv_record!(IndexedUnit {
    id => index(0),
    name => index(1),
});

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FoodName {
    pub fdc_id: i32,
    pub data_type: String,
    pub description: String,
    pub food_category_id: Option<i32>,
    pub publication_date: NaiveDate,
}

csv_record!(FoodName {
    fdc_id => name("fdc_id"),
    data_type => name("data_type"),
    description => name("description"),
    food_category_id => name("food_category_id"),
    publication_date => name("publication_date"),
});

pub fn csv_reader(content: &str, config: CsvConfig) -> CsvReader<Cursor<&str>> {
    CsvReader::new(config, Cursor::new(content))
}

pub fn record_reader<T: crate::binding::CsvRecord>(
    content: &str,
    config: CsvConfig,
) -> RecordReader<T, Cursor<&str>> {
    RecordReader::new(config, Cursor::new(content))
}
