//! String to typed value coercion
//!
//! One parser per [`FieldKind`]. Numeric, boolean and temporal parsers trim
//! surrounding whitespace first; string and char fields are taken as-is.
//! Nullable integers never fail: empty or unparsable input becomes `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

use super::value::{FieldKind, Value};
use crate::constants::{DATE_FORMATS, DATE_TIME_FORMATS};

/// A raw field that could not be converted into its target kind
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{value}' is not a valid {kind}: {reason}")]
pub struct ConversionError {
    pub kind: FieldKind,
    pub value: String,
    pub reason: String,
}

impl ConversionError {
    /// Create a conversion error for a raw value
    pub fn new(kind: FieldKind, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Coerce a raw field into a value of the given kind
pub fn coerce(raw: &str, kind: FieldKind) -> Result<Value, ConversionError> {
    match kind {
        FieldKind::Bool => parse_bool(raw).map(Value::Bool),
        FieldKind::I8 => parse_number(raw, kind).map(Value::I8),
        FieldKind::I16 => parse_number(raw, kind).map(Value::I16),
        FieldKind::I32 => parse_number(raw, kind).map(Value::I32),
        FieldKind::I64 => parse_number(raw, kind).map(Value::I64),
        FieldKind::U8 => parse_number(raw, kind).map(Value::U8),
        FieldKind::U16 => parse_number(raw, kind).map(Value::U16),
        FieldKind::U32 => parse_number(raw, kind).map(Value::U32),
        FieldKind::U64 => parse_number(raw, kind).map(Value::U64),
        FieldKind::NullableI32 => Ok(Value::NullableI32(parse_nullable(raw))),
        FieldKind::NullableI64 => Ok(Value::NullableI64(parse_nullable(raw))),
        FieldKind::F32 => parse_number(raw, kind).map(Value::F32),
        FieldKind::F64 => parse_number(raw, kind).map(Value::F64),
        FieldKind::Decimal => parse_decimal(raw).map(Value::Decimal),
        FieldKind::Char => parse_char(raw).map(Value::Char),
        FieldKind::Date => parse_date(raw).map(Value::Date),
        FieldKind::DateTime => parse_date_time(raw).map(Value::DateTime),
        FieldKind::String => Ok(Value::String(raw.to_string())),
    }
}

/// Parse `true`/`false` in any letter case
pub fn parse_bool(raw: &str) -> Result<bool, ConversionError> {
    let value = raw.trim();

    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConversionError::new(
            FieldKind::Bool,
            raw,
            "expected 'true' or 'false'",
        ))
    }
}

/// Parse any numeric type through its `FromStr` implementation
pub fn parse_number<T>(raw: &str, kind: FieldKind) -> Result<T, ConversionError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConversionError::new(kind, raw, e.to_string()))
}

/// Parse an integer, treating empty or unparsable input as absent
pub fn parse_nullable<T: FromStr>(raw: &str) -> Option<T> {
    let value = raw.trim();

    if value.is_empty() {
        None
    } else {
        value.parse::<T>().ok()
    }
}

/// Parse a decimal in plain or scientific notation
pub fn parse_decimal(raw: &str) -> Result<Decimal, ConversionError> {
    let value = raw.trim();

    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|e| ConversionError::new(FieldKind::Decimal, raw, e.to_string()))
}

/// Parse a single character
pub fn parse_char(raw: &str) -> Result<char, ConversionError> {
    let mut chars = raw.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConversionError::new(
            FieldKind::Char,
            raw,
            "expected exactly one character",
        )),
    }
}

/// Parse a calendar date, accepting a date-time and dropping its time
pub fn parse_date(raw: &str) -> Result<NaiveDate, ConversionError> {
    let value = raw.trim();

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| parse_date_time_formats(value).map(|dt| dt.date()))
        .ok_or_else(|| {
            ConversionError::new(FieldKind::Date, raw, "unrecognized date format")
        })
}

/// Parse a date-time; RFC 3339 offsets are normalized to UTC and a bare
/// date becomes midnight
pub fn parse_date_time(raw: &str) -> Result<NaiveDateTime, ConversionError> {
    let value = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_utc());
    }

    parse_date_time_formats(value)
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| {
            ConversionError::new(FieldKind::DateTime, raw, "unrecognized date-time format")
        })
}

fn parse_date_time_formats(value: &str) -> Option<NaiveDateTime> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}
