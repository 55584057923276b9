//! Full-parse row classification
//!
//! Every remaining line is read once and filed as valid or malformed under a
//! single sequential index, so the two partitions never share an index and
//! together cover `0..row_count` without gaps.

use std::collections::BTreeMap;
use std::io::BufRead;
use tracing::warn;

use super::line_source::LineSource;
use super::stats::ParseStats;
use crate::Result;
use crate::tokenizer::Tokenizer;

/// Rows of a fully parsed input, partitioned by well-formedness
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRows {
    valid: BTreeMap<usize, String>,
    errors: BTreeMap<usize, String>,
}

impl ParsedRows {
    /// Read every remaining line from `source` and classify it
    pub fn classify<R: BufRead>(source: &mut LineSource<R>, tokenizer: &Tokenizer) -> Result<Self> {
        let mut rows = Self::default();
        let mut index = 0;

        while let Some(line) = source.next_line()? {
            let well_formed = tokenizer.is_well_formed(&line);
            if !well_formed {
                warn!("Row {} is malformed: {}", index, line);
            }

            rows.insert(index, line, well_formed);
            index += 1;
        }

        Ok(rows)
    }

    /// File a row under `index`
    pub fn insert(&mut self, index: usize, line: String, well_formed: bool) {
        if well_formed {
            self.valid.insert(index, line);
        } else {
            self.errors.insert(index, line);
        }
    }

    /// Row at `index`, valid or not
    pub fn get(&self, index: usize) -> Option<&str> {
        self.valid
            .get(&index)
            .or_else(|| self.errors.get(&index))
            .map(String::as_str)
    }

    /// Whether the row at `index` was classified as valid
    pub fn is_valid(&self, index: usize) -> Option<bool> {
        if self.valid.contains_key(&index) {
            Some(true)
        } else if self.errors.contains_key(&index) {
            Some(false)
        } else {
            None
        }
    }

    /// First valid row at or after `index`
    pub fn next_valid(&self, index: usize) -> Option<(usize, &str)> {
        self.valid
            .range(index..)
            .next()
            .map(|(&i, line)| (i, line.as_str()))
    }

    /// Well-formed rows keyed by index
    pub fn valid_rows(&self) -> &BTreeMap<usize, String> {
        &self.valid
    }

    /// Malformed rows keyed by index
    pub fn error_rows(&self) -> &BTreeMap<usize, String> {
        &self.errors
    }

    /// Total number of classified rows
    pub fn row_count(&self) -> usize {
        self.valid.len() + self.errors.len()
    }

    /// Summary counts for this classification
    pub fn stats(&self) -> ParseStats {
        ParseStats::new(self.valid.len(), self.errors.len())
    }
}
