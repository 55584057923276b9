//! Target kinds and coerced field values
//!
//! [`FieldKind`] is the closed set of types a CSV field can be bound to.
//! Coercion turns a raw string into a [`Value`] of the requested kind, and
//! [`FromValue`] moves that value into the destination field's Rust type.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::fmt;

use crate::binding::ConversionError;
use crate::{Error, Result};

/// Destination type of a bound field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    /// 32-bit integer that is absent when the source is empty or unparsable
    NullableI32,
    /// 64-bit integer that is absent when the source is empty or unparsable
    NullableI64,
    F32,
    F64,
    Decimal,
    Char,
    Date,
    DateTime,
    String,
}

impl FieldKind {
    /// Short type name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::NullableI32 => "optional i32",
            Self::NullableI64 => "optional i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Decimal => "decimal",
            Self::Char => "char",
            Self::Date => "date",
            Self::DateTime => "date-time",
            Self::String => "string",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field value after coercion
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    NullableI32(Option<i32>),
    NullableI64(Option<i64>),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Char(char),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    String(String),
}

impl Value {
    /// Kind this value was coerced into
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Bool(_) => FieldKind::Bool,
            Self::I8(_) => FieldKind::I8,
            Self::I16(_) => FieldKind::I16,
            Self::I32(_) => FieldKind::I32,
            Self::I64(_) => FieldKind::I64,
            Self::U8(_) => FieldKind::U8,
            Self::U16(_) => FieldKind::U16,
            Self::U32(_) => FieldKind::U32,
            Self::U64(_) => FieldKind::U64,
            Self::NullableI32(_) => FieldKind::NullableI32,
            Self::NullableI64(_) => FieldKind::NullableI64,
            Self::F32(_) => FieldKind::F32,
            Self::F64(_) => FieldKind::F64,
            Self::Decimal(_) => FieldKind::Decimal,
            Self::Char(_) => FieldKind::Char,
            Self::Date(_) => FieldKind::Date,
            Self::DateTime(_) => FieldKind::DateTime,
            Self::String(_) => FieldKind::String,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::I8(v) => write!(f, "{}", v),
            Self::I16(v) => write!(f, "{}", v),
            Self::I32(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::U8(v) => write!(f, "{}", v),
            Self::U16(v) => write!(f, "{}", v),
            Self::U32(v) => write!(f, "{}", v),
            Self::U64(v) => write!(f, "{}", v),
            Self::NullableI32(Some(v)) => write!(f, "{}", v),
            Self::NullableI64(Some(v)) => write!(f, "{}", v),
            Self::NullableI32(None) | Self::NullableI64(None) => Ok(()),
            Self::F32(v) => write!(f, "{}", v),
            Self::F64(v) => write!(f, "{}", v),
            Self::Decimal(v) => write!(f, "{}", v),
            Self::Char(v) => write!(f, "{}", v),
            Self::Date(v) => write!(f, "{}", v),
            Self::DateTime(v) => write!(f, "{}", v),
            Self::String(v) => f.write_str(v),
        }
    }
}

/// Rust types a [`Value`] can be moved into
///
/// `KIND` tells the binder which coercion to run for a field of this type.
pub trait FromValue: Sized {
    const KIND: FieldKind;

    /// Take the payload out of a value of the matching kind, handing the
    /// value back when the kind differs
    fn from_value(value: Value) -> std::result::Result<Self, Value>;
}

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromValue for $ty {
                const KIND: FieldKind = FieldKind::$variant;

                fn from_value(value: Value) -> std::result::Result<Self, Value> {
                    match value {
                        Value::$variant(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

impl_from_value! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    Option<i32> => NullableI32,
    Option<i64> => NullableI64,
    f32 => F32,
    f64 => F64,
    Decimal => Decimal,
    char => Char,
    NaiveDate => Date,
    NaiveDateTime => DateTime,
    String => String,
}

/// Kind of the field a projection points at
///
/// Lets declarative schemas infer a binding's kind from the field's type.
pub fn kind_of<R, T: FromValue>(_field: impl Fn(&R) -> &T) -> FieldKind {
    T::KIND
}

/// Move a coerced value into a field of type `T`
pub fn take_value<T: FromValue>(field: &str, value: Value) -> Result<T> {
    T::from_value(value).map_err(|value| {
        Error::format_conversion(
            field,
            ConversionError::new(
                T::KIND,
                value.to_string(),
                format!("a {} value cannot be assigned to this field", value.kind()),
            ),
        )
    })
}
