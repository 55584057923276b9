//! Core CSV parser implementation
//!
//! Owns the stream, the header registry and, after a full parse, the row
//! classification. Streaming and full-parse access share one cursor: each
//! line is read from the stream at most once.

use std::collections::BTreeMap;
use std::io::BufRead;
use tracing::{debug, info, warn};

use super::classifier::ParsedRows;
use super::headers::Headers;
use super::line_source::LineSource;
use super::stats::ParseStats;
use crate::config::{CsvConfig, ErrorPolicy};
use crate::tokenizer::Tokenizer;
use crate::{Error, Result};

/// Line-oriented CSV parser over a buffered stream
#[derive(Debug)]
pub struct CsvParser<R> {
    config: CsvConfig,
    tokenizer: Tokenizer,
    source: LineSource<R>,
    headers: Option<Headers>,
    parsed: Option<ParsedRows>,
    next_index: usize,
    current: Option<(usize, String)>,
}

impl<R: BufRead> CsvParser<R> {
    /// Create a parser that takes ownership of `reader`
    ///
    /// Nothing is read until headers or rows are first requested.
    pub fn new(config: CsvConfig, reader: R) -> Self {
        let tokenizer = Tokenizer::new(&config);

        Self {
            config,
            tokenizer,
            source: LineSource::new(reader),
            headers: None,
            parsed: None,
            next_index: 0,
            current: None,
        }
    }

    /// Configuration this parser was built with
    pub fn config(&self) -> &CsvConfig {
        &self.config
    }

    /// Tokenizer matching the configured dialect
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Header registry, reading the header line on first use
    ///
    /// Without a configured header row the registry is empty and no line is
    /// consumed. Once built, the registry never changes.
    pub fn headers(&mut self) -> Result<&Headers> {
        let headers = match self.headers.take() {
            Some(headers) => headers,
            None => self.read_headers()?,
        };

        Ok(self.headers.insert(headers))
    }

    /// Header registry if it has already been read
    pub fn headers_if_read(&self) -> Option<&Headers> {
        self.headers.as_ref()
    }

    fn read_headers(&mut self) -> Result<Headers> {
        if !self.config.contains_header_row() {
            debug!("No header row configured");
            return Ok(Headers::empty());
        }

        let headers = match self.source.next_line()? {
            Some(line) => Headers::from_names(self.tokenizer.tokenize(&line)),
            None => {
                warn!("Input ended before a header row was found");
                Headers::empty()
            }
        };

        debug!("Read {} header column(s)", headers.len());
        Ok(headers)
    }

    /// Next data line from the stream, or `None` at end of input
    ///
    /// Rows are not validated here. After a full parse the stream is
    /// exhausted and this returns `None`.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        self.headers()?;

        match self.source.next_line()? {
            Some(line) => {
                let index = self.next_index;
                self.next_index += 1;
                self.current = Some((index, line.clone()));
                Ok(Some(line))
            }
            None => {
                self.current = None;
                Ok(None)
            }
        }
    }

    /// Classify every remaining row of the input
    ///
    /// The first call reads the rest of the stream; later calls reuse the
    /// classification. Under [`ErrorPolicy::FailOnBadRows`] any malformed row
    /// makes this return [`Error::BadData`], but the classification is kept
    /// and stays reachable through [`CsvParser::parsed_rows`].
    pub fn parse(&mut self) -> Result<&ParsedRows> {
        if self.parsed.is_none() {
            self.headers()?;

            info!("Parsing remaining input");
            let rows = ParsedRows::classify(&mut self.source, &self.tokenizer)?;
            let stats = rows.stats();
            info!(
                "Parsed {} rows: {} valid, {} malformed ({:.1}% valid)",
                stats.total_rows,
                stats.valid_rows,
                stats.error_rows,
                stats.success_rate()
            );

            self.parsed = Some(rows);
            self.next_index = 0;
            self.current = None;
        }

        let Some(rows) = self.parsed.as_ref() else {
            return Err(Error::NotYetParsed);
        };

        if self.config.error_policy() == ErrorPolicy::FailOnBadRows
            && !rows.error_rows().is_empty()
        {
            warn!(
                "Found {} malformed row(s), failing parse",
                rows.error_rows().len()
            );
            return Err(Error::bad_data(rows.error_rows().clone()));
        }

        Ok(rows)
    }

    /// Whether a full parse has run
    pub fn is_parsed(&self) -> bool {
        self.parsed.is_some()
    }

    /// Next valid row of a full parse, in index order
    ///
    /// Malformed rows are skipped; they stay reachable by index through
    /// [`CsvParser::row`].
    pub fn next_parsed_line(&mut self) -> Result<Option<String>> {
        let Some(rows) = self.parsed.as_ref() else {
            return Err(Error::NotYetParsed);
        };

        match rows.next_valid(self.next_index) {
            Some((index, line)) => {
                let line = line.to_string();
                self.next_index = index + 1;
                self.current = Some((index, line.clone()));
                Ok(Some(line))
            }
            None => {
                self.next_index = rows.row_count();
                self.current = None;
                Ok(None)
            }
        }
    }

    /// Row at `index` of a full parse, valid or malformed
    pub fn row(&self, index: usize) -> Option<&str> {
        self.parsed.as_ref().and_then(|rows| rows.get(index))
    }

    /// Classification of a full parse, if one has run
    pub fn parsed_rows(&self) -> Option<&ParsedRows> {
        self.parsed.as_ref()
    }

    /// Valid rows of a full parse
    pub fn valid_rows(&self) -> Option<&BTreeMap<usize, String>> {
        self.parsed.as_ref().map(ParsedRows::valid_rows)
    }

    /// Malformed rows of a full parse
    pub fn error_rows(&self) -> Option<&BTreeMap<usize, String>> {
        self.parsed.as_ref().map(ParsedRows::error_rows)
    }

    /// Statistics of a full parse
    pub fn stats(&self) -> Option<ParseStats> {
        self.parsed.as_ref().map(ParsedRows::stats)
    }

    /// Most recently returned line
    pub fn current_line(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, line)| line.as_str())
    }

    /// Index of the most recently returned line
    pub fn current_index(&self) -> Option<usize> {
        self.current.as_ref().map(|(index, _)| *index)
    }

    /// Give back the underlying stream
    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }
}
