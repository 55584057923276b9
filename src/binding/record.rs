//! Record schemas
//!
//! A record type declares which headers feed which of its fields and knows
//! how to store a coerced value into a field. Implement [`CsvRecord`] by hand
//! or generate it with [`csv_record!`](crate::csv_record).

use super::atlas::Binding;
use super::value::Value;
use crate::Result;

/// A type that CSV rows can be bound onto
///
/// Fields without a binding keep their `Default` value.
pub trait CsvRecord: Default {
    /// Declared header to field bindings
    fn bindings() -> Vec<Binding>;

    /// Store a coerced value into the named field
    fn assign(&mut self, field: &str, value: Value) -> Result<()>;
}

/// Implement [`CsvRecord`] for a struct from field to header declarations
///
/// Each entry binds a field either to a header name or to a column index.
/// The field's kind is inferred from its Rust type, which must implement
/// [`FromValue`](crate::binding::FromValue).
///
/// ```rust
/// use csv_atlas::csv_record;
///
/// #[derive(Debug, Default)]
/// struct MeasureUnit {
///     measure_unit_id: i32,
///     name: String,
///     abbreviation: String,
/// }
///
/// csv_record!(MeasureUnit {
///     measure_unit_id => name("id"),
///     name => index(1),
/// });
/// ```
#[macro_export]
macro_rules! csv_record {
    (@source name $header:expr) => {
        $crate::binding::HeaderKey::Name(::std::string::String::from($header))
    };
    (@source index $index:expr) => {
        $crate::binding::HeaderKey::Index($index)
    };
    ($record:ident { $($field:ident => $source:ident($key:expr)),* $(,)? }) => {
        impl $crate::binding::CsvRecord for $record {
            fn bindings() -> ::std::vec::Vec<$crate::binding::Binding> {
                ::std::vec![
                    $(
                        $crate::binding::Binding::new(
                            ::std::stringify!($field),
                            $crate::csv_record!(@source $source $key),
                            $crate::binding::kind_of(|record: &$record| &record.$field),
                        ),
                    )*
                ]
            }

            fn assign(
                &mut self,
                field: &str,
                value: $crate::binding::Value,
            ) -> $crate::Result<()> {
                match field {
                    $(
                        ::std::stringify!($field) => {
                            self.$field = $crate::binding::take_value(field, value)?;
                        }
                    )*
                    other => return ::std::result::Result::Err($crate::Error::unknown_field(other)),
                }
                ::std::result::Result::Ok(())
            }
        }
    };
}
