//! Typed record binding
//!
//! Turns tokenized rows into caller-defined records:
//! - [`value`] - Target kinds, coerced values and the [`FromValue`] trait
//! - [`coercion`] - One string parser per target kind
//! - [`record`] - The [`CsvRecord`] schema trait and `csv_record!` macro
//! - [`atlas`] - Bindings resolved against the header registry
//! - [`binder`] - Row to record assignment
//!
//! ## Usage
//!
//! ```rust
//! use csv_atlas::binding::{PropertyAtlas, bind_record};
//! use csv_atlas::csv_record;
//! use csv_atlas::parser::Headers;
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
//! let headers = Headers::from_names(vec!["id".to_string(), "name".to_string()]);
//! let atlas = PropertyAtlas::for_record::<MeasureUnit>(&headers)?;
//!
//! let unit: MeasureUnit = bind_record(&["1000", "cup"], &atlas)?;
//! assert_eq!(unit.measure_unit_id, 1000);
//! assert_eq!(unit.name, "cup");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod atlas;
pub mod binder;
pub mod coercion;
pub mod record;
pub mod value;

#[cfg(test)]
mod tests;

pub use atlas::{Binding, HeaderKey, PropertyAtlas, PropertyMap};
pub use binder::bind_record;
pub use coercion::{ConversionError, coerce};
pub use record::CsvRecord;
pub use value::{FieldKind, FromValue, Value, kind_of, take_value};
