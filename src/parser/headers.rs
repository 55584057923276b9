//! Header registry built from the first line of input
//!
//! The registry is a build-once value: it is created from a tokenized header
//! line and offers no way to add, remove or rename columns afterwards.

use std::collections::HashMap;
use std::slice;

/// Ordered, fixed-length header names with name to position lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    names: Box<[String]>,
    positions: HashMap<String, usize>,
}

impl Headers {
    /// Build the registry from tokenized header values
    ///
    /// When a name repeats, lookups resolve to its first position.
    pub fn from_names(names: Vec<String>) -> Self {
        let mut positions = HashMap::with_capacity(names.len());

        for (index, name) in names.iter().enumerate() {
            positions.entry(name.clone()).or_insert(index);
        }

        Self {
            names: names.into_boxed_slice(),
            positions,
        }
    }

    /// Registry without columns, used when no header row is configured
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of header columns
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no header columns were found
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Header name at a position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Position of a header name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Whether a header name exists
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Header names in column order
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Iterate over header names in column order
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.names.iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
