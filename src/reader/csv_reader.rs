//! Untyped reader returning raw lines and field values

use std::collections::BTreeMap;
use std::io::BufRead;

use crate::config::{CsvConfig, ReadMode};
use crate::parser::{CsvParser, Headers, ParseStats, ParsedRows};
use crate::Result;

/// Reads rows as raw lines or tokenized string values
///
/// In [`ReadMode::Streaming`] every call reads one more line from the
/// stream. In [`ReadMode::FullParse`] the first call classifies the whole
/// input and later calls walk the valid rows in index order. When that
/// first parse fails with [`Error::BadData`](crate::Error::BadData), the
/// classification is kept and the next call continues with the valid rows.
#[derive(Debug)]
pub struct CsvReader<R> {
    parser: CsvParser<R>,
}

impl<R: BufRead> CsvReader<R> {
    /// Create a reader that takes ownership of `reader`
    pub fn new(config: CsvConfig, reader: R) -> Self {
        Self {
            parser: CsvParser::new(config, reader),
        }
    }

    /// Create a reader with the default configuration
    pub fn with_defaults(reader: R) -> Self {
        Self::new(CsvConfig::default(), reader)
    }

    /// Configuration this reader was built with
    pub fn config(&self) -> &CsvConfig {
        self.parser.config()
    }

    /// Header registry, reading the header line on first use
    pub fn headers(&mut self) -> Result<&Headers> {
        self.parser.headers()
    }

    /// Next raw data line, or `None` at end of input
    pub fn next_line(&mut self) -> Result<Option<String>> {
        match self.parser.config().read_mode() {
            ReadMode::Streaming => self.parser.next_line(),
            ReadMode::FullParse => {
                if !self.parser.is_parsed() {
                    self.parser.parse()?;
                }
                self.parser.next_parsed_line()
            }
        }
    }

    /// Next row split into field values, or `None` at end of input
    pub fn next_values(&mut self) -> Result<Option<Vec<String>>> {
        Ok(self
            .next_line()?
            .map(|line| self.parser.tokenizer().tokenize(&line)))
    }

    /// Classify every remaining row
    ///
    /// Available in either read mode; see [`CsvParser::parse`].
    pub fn parse(&mut self) -> Result<&ParsedRows> {
        self.parser.parse()
    }

    /// Row at `index` of a full parse
    pub fn row(&self, index: usize) -> Option<&str> {
        self.parser.row(index)
    }

    /// Field values of the row at `index` of a full parse
    pub fn row_values(&self, index: usize) -> Option<Vec<String>> {
        self.parser
            .row(index)
            .map(|line| self.parser.tokenizer().tokenize(line))
    }

    /// Well-formed rows of a full parse
    pub fn valid_rows(&self) -> Option<&BTreeMap<usize, String>> {
        self.parser.valid_rows()
    }

    /// Malformed rows of a full parse
    pub fn error_rows(&self) -> Option<&BTreeMap<usize, String>> {
        self.parser.error_rows()
    }

    /// Statistics of a full parse
    pub fn stats(&self) -> Option<ParseStats> {
        self.parser.stats()
    }

    /// Index of the most recently returned row
    pub fn current_index(&self) -> Option<usize> {
        self.parser.current_index()
    }

    /// Give back the underlying stream
    pub fn into_inner(self) -> R {
        self.parser.into_inner()
    }
}
