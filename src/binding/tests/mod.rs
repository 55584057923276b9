//! Tests for typed record binding
//!
//! The example schemas below are shared by the submodules.

use chrono::NaiveDate;

use crate::csv_record;
use crate::parser::Headers;

mod record_tests;

/// Measure unit bound by header name; `abbreviation` has no binding
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MeasureUnit {
    pub measure_unit_id: i32,
    pub name: String,
    pub abbreviation: String,
}

csv_record!(MeasureUnit {
    measure_unit_id => name("id"),
    name => name("name"),
});

/// Food row bound by header name
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

/// Food row bound by column position
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FoodIndex {
    pub fdc_id: i32,
    pub data_type: String,
    pub description: String,
    pub food_category_id: Option<i32>,
    pub publication_date: NaiveDate,
}

csv_record!(FoodIndex {
    fdc_id => index(0),
    data_type => index(1),
    description => index(2),
    food_category_id => index(3),
    publication_date => index(4),
});

/// Headers of the measure unit fixture
pub fn measure_unit_headers() -> Headers {
    headers(&["id", "name"])
}

/// Headers of the food fixture
pub fn food_headers() -> Headers {
    headers(&[
        "fdc_id",
        "data_type",
        "description",
        "food_category_id",
        "publication_date",
    ])
}

pub fn headers(names: &[&str]) -> Headers {
    Headers::from_names(names.iter().map(|n| n.to_string()).collect())
}

/// Tokenized values of a food row
pub fn food_values(category: &str) -> Vec<String> {
    [
        "1105904",
        "branded_food",
        "WESSON Vegetable Oil 1 GAL",
        category,
        "2020-11-13",
    ]
    .iter()
    .map(|v| v.to_string())
    .collect()
}
