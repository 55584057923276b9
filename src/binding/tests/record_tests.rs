//! Tests for record schemas and the declaration macro

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{FoodIndex, MeasureUnit, headers};
use crate::binding::{
    Binding, CsvRecord, FieldKind, HeaderKey, PropertyAtlas, Value, bind_record, take_value,
};
use crate::{Error, Result};

#[test]
fn test_macro_declares_bindings_in_order() {
    let bindings = MeasureUnit::bindings();

    assert_eq!(
        bindings,
        vec![
            Binding::by_name("measure_unit_id", "id", FieldKind::I32),
            Binding::by_name("name", "name", FieldKind::String),
        ]
    );
}

#[test]
fn test_macro_index_bindings() {
    let bindings = FoodIndex::bindings();

    assert_eq!(bindings.len(), 5);
    assert_eq!(bindings[3].source, HeaderKey::Index(3));
    assert_eq!(bindings[3].kind, FieldKind::NullableI32);
    assert_eq!(bindings[4].kind, FieldKind::Date);
}

#[test]
fn test_assign_known_field() {
    let mut unit = MeasureUnit::default();

    unit.assign("measure_unit_id", Value::I32(1001)).unwrap();
    unit.assign("name", Value::String("tablespoon".to_string()))
        .unwrap();

    assert_eq!(unit.measure_unit_id, 1001);
    assert_eq!(unit.name, "tablespoon");
}

#[test]
fn test_assign_unknown_field() {
    let mut unit = MeasureUnit::default();

    let error = unit.assign("abbreviation", Value::String("tbsp".to_string()));

    assert!(matches!(error, Err(Error::UnknownField { field }) if field == "abbreviation"));
}

#[test]
fn test_assign_mismatched_kind() {
    let mut unit = MeasureUnit::default();

    let error = unit
        .assign("measure_unit_id", Value::String("1000".to_string()))
        .unwrap_err();

    match error {
        Error::FormatConversion { field, source } => {
            assert_eq!(field, "measure_unit_id");
            assert_eq!(source.kind, FieldKind::I32);
            assert_eq!(source.value, "1000");
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Hand-written schema covering the remaining kinds
#[derive(Debug, Default)]
struct Nutrient {
    active: bool,
    rank: u8,
    amount: Decimal,
    unit: char,
    measured_at: chrono::NaiveDateTime,
    density: f64,
    derivation_id: Option<i64>,
}

impl CsvRecord for Nutrient {
    fn bindings() -> Vec<Binding> {
        vec![
            Binding::by_name("active", "active", FieldKind::Bool),
            Binding::by_name("rank", "rank", FieldKind::U8),
            Binding::by_name("amount", "amount", FieldKind::Decimal),
            Binding::by_name("unit", "unit", FieldKind::Char),
            Binding::by_name("measured_at", "measured_at", FieldKind::DateTime),
            Binding::by_index("density", 5, FieldKind::F64),
            Binding::by_index("derivation_id", 6, FieldKind::NullableI64),
        ]
    }

    fn assign(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "active" => self.active = take_value(field, value)?,
            "rank" => self.rank = take_value(field, value)?,
            "amount" => self.amount = take_value(field, value)?,
            "unit" => self.unit = take_value(field, value)?,
            "measured_at" => self.measured_at = take_value(field, value)?,
            "density" => self.density = take_value(field, value)?,
            "derivation_id" => self.derivation_id = take_value(field, value)?,
            other => return Err(Error::unknown_field(other)),
        }
        Ok(())
    }
}

#[test]
fn test_hand_written_record() {
    let headers = headers(&["active", "rank", "amount", "unit", "measured_at"]);
    let atlas = PropertyAtlas::for_record::<Nutrient>(&headers).unwrap();

    let values = ["TRUE", "3", "0.125", "g", "2019-04-01 12:00:00", "1.03", ""];
    let nutrient: Nutrient = bind_record(&values, &atlas).unwrap();

    assert!(nutrient.active);
    assert_eq!(nutrient.rank, 3);
    assert_eq!(nutrient.amount, Decimal::new(125, 3));
    assert_eq!(nutrient.unit, 'g');
    assert_eq!(
        nutrient.measured_at,
        NaiveDate::from_ymd_opt(2019, 4, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    );
    assert_eq!(nutrient.density, 1.03);
    assert_eq!(nutrient.derivation_id, None);
}
