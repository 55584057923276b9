//! Binding one tokenized row onto a record

use super::atlas::PropertyAtlas;
use super::coercion::coerce;
use super::record::CsvRecord;
use crate::{Error, Result};

/// Build a record of type `T` from one row's field values
///
/// Every atlas entry reads the value at its header index, coerces it into
/// the entry's kind and assigns it to the entry's field.
pub fn bind_record<T: CsvRecord, S: AsRef<str>>(values: &[S], atlas: &PropertyAtlas) -> Result<T> {
    let mut record = T::default();

    for map in atlas.iter() {
        let raw = values
            .get(map.header_index)
            .ok_or_else(|| Error::field_out_of_range(map.field, map.header_index, values.len()))?;

        let value =
            coerce(raw.as_ref(), map.kind).map_err(|e| Error::format_conversion(map.field, e))?;

        record.assign(map.field, value)?;
    }

    Ok(record)
}
