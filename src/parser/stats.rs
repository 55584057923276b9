//! Row classification statistics

use serde::{Deserialize, Serialize};

/// Counts gathered by a full parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Number of data rows read
    pub total_rows: usize,

    /// Rows that tokenized cleanly
    pub valid_rows: usize,

    /// Rows classified as malformed
    pub error_rows: usize,
}

impl ParseStats {
    /// Statistics for a parse with the given valid and malformed row counts
    pub fn new(valid_rows: usize, error_rows: usize) -> Self {
        Self {
            total_rows: valid_rows + error_rows,
            valid_rows,
            error_rows,
        }
    }

    /// Share of valid rows as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.valid_rows as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Whether every row was well-formed
    pub fn is_clean(&self) -> bool {
        self.error_rows == 0
    }
}
