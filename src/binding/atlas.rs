//! Header to field mapping for typed records
//!
//! A [`PropertyAtlas`] resolves every declared [`Binding`] of a record schema
//! against the header registry once, so binding a row is a walk over fixed
//! column positions.

use std::collections::HashMap;
use std::slice;
use tracing::debug;

use super::record::CsvRecord;
use super::value::FieldKind;
use crate::parser::Headers;
use crate::{Error, Result};

/// Identity of the header a field reads from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HeaderKey {
    /// Column whose header has this name
    Name(String),
    /// Column at this zero-based position
    Index(usize),
}

/// A declared field binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Destination field name
    pub field: &'static str,

    /// Header the value comes from
    pub source: HeaderKey,

    /// Kind the raw value is coerced into
    pub kind: FieldKind,
}

impl Binding {
    pub fn new(field: &'static str, source: HeaderKey, kind: FieldKind) -> Self {
        Self {
            field,
            source,
            kind,
        }
    }

    /// Bind `field` to the column headed `header`
    pub fn by_name(field: &'static str, header: impl Into<String>, kind: FieldKind) -> Self {
        Self::new(field, HeaderKey::Name(header.into()), kind)
    }

    /// Bind `field` to the column at `index`
    pub fn by_index(field: &'static str, index: usize, kind: FieldKind) -> Self {
        Self::new(field, HeaderKey::Index(index), kind)
    }
}

/// A binding resolved against the header registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMap {
    pub header_index: usize,
    /// Empty when the column has no header
    pub header_name: String,
    pub field: &'static str,
    pub kind: FieldKind,
}

/// Resolved bindings of one record schema
#[derive(Debug, Clone, Default)]
pub struct PropertyAtlas {
    maps: Vec<PropertyMap>,
    by_name: HashMap<String, usize>,
    by_index: HashMap<usize, usize>,
}

impl PropertyAtlas {
    /// Resolve `bindings` against `headers`
    ///
    /// Name bindings must match a header; index bindings are taken as given
    /// and checked against each row when it is bound.
    pub fn build(bindings: &[Binding], headers: &Headers) -> Result<Self> {
        let mut atlas = Self::default();

        for binding in bindings {
            let (header_index, header_name) = match &binding.source {
                HeaderKey::Name(name) => {
                    let index = headers
                        .position(name)
                        .ok_or_else(|| Error::missing_header_binding(name.as_str(), binding.field))?;
                    (index, name.clone())
                }
                HeaderKey::Index(index) => (
                    *index,
                    headers.get(*index).unwrap_or_default().to_string(),
                ),
            };

            atlas.insert(PropertyMap {
                header_index,
                header_name,
                field: binding.field,
                kind: binding.kind,
            });
        }

        debug!(
            "Built property atlas with {} binding(s) over {} header column(s)",
            atlas.len(),
            headers.len()
        );
        Ok(atlas)
    }

    /// Resolve the bindings declared by record type `T`
    pub fn for_record<T: CsvRecord>(headers: &Headers) -> Result<Self> {
        Self::build(&T::bindings(), headers)
    }

    fn insert(&mut self, map: PropertyMap) {
        let position = self.maps.len();

        if !map.header_name.is_empty() {
            self.by_name.entry(map.header_name.clone()).or_insert(position);
        }
        self.by_index.entry(map.header_index).or_insert(position);
        self.maps.push(map);
    }

    /// Entry bound to the header with this name
    pub fn by_name(&self, name: &str) -> Option<&PropertyMap> {
        self.by_name.get(name).map(|&position| &self.maps[position])
    }

    /// Entry bound to the column at this position
    pub fn by_index(&self, index: usize) -> Option<&PropertyMap> {
        self.by_index.get(&index).map(|&position| &self.maps[position])
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Entries in declaration order
    pub fn iter(&self) -> slice::Iter<'_, PropertyMap> {
        self.maps.iter()
    }
}
