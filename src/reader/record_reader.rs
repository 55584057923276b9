//! Typed reader binding rows onto records

use std::io::BufRead;
use std::marker::PhantomData;
use tracing::debug;

use super::csv_reader::CsvReader;
use crate::binding::{CsvRecord, PropertyAtlas, bind_record};
use crate::config::CsvConfig;
use crate::parser::Headers;
use crate::Result;

/// Reads rows as records of type `T`
///
/// The property atlas is resolved once, against the header registry, when
/// the first record is requested.
#[derive(Debug)]
pub struct RecordReader<T, R> {
    reader: CsvReader<R>,
    atlas: Option<PropertyAtlas>,
    _record: PhantomData<fn() -> T>,
}

impl<T: CsvRecord, R: BufRead> RecordReader<T, R> {
    /// Create a typed reader that takes ownership of `reader`
    pub fn new(config: CsvConfig, reader: R) -> Self {
        Self::from_reader(CsvReader::new(config, reader))
    }

    /// Wrap an untyped reader
    pub fn from_reader(reader: CsvReader<R>) -> Self {
        Self {
            reader,
            atlas: None,
            _record: PhantomData,
        }
    }

    /// Header registry, reading the header line on first use
    pub fn headers(&mut self) -> Result<&Headers> {
        self.reader.headers()
    }

    /// Property atlas for `T`, built on first use
    pub fn atlas(&mut self) -> Result<&PropertyAtlas> {
        let atlas = match self.atlas.take() {
            Some(atlas) => atlas,
            None => {
                let atlas = PropertyAtlas::for_record::<T>(self.reader.headers()?)?;
                debug!(
                    "Resolved {} binding(s) for {}",
                    atlas.len(),
                    std::any::type_name::<T>()
                );
                atlas
            }
        };

        Ok(&*self.atlas.insert(atlas))
    }

    /// Next record, or `None` at end of input
    ///
    /// A row that yields no fields, such as an unquoted line read in
    /// streaming mode, also ends the sequence.
    pub fn next_record(&mut self) -> Result<Option<T>> {
        let Some(values) = self.reader.next_values()? else {
            return Ok(None);
        };

        if values.is_empty() {
            debug!("Row without fields ends the record sequence");
            return Ok(None);
        }

        let atlas = self.atlas()?;
        bind_record(&values, atlas).map(Some)
    }

    /// Every remaining record, in input order
    pub fn records(&mut self) -> Result<Vec<T>> {
        let mut records = Vec::new();

        while let Some(record) = self.next_record()? {
            records.push(record);
        }

        debug!("Read {} record(s)", records.len());
        Ok(records)
    }

    /// Underlying untyped reader
    pub fn reader(&self) -> &CsvReader<R> {
        &self.reader
    }

    /// Give back the untyped reader
    pub fn into_inner(self) -> CsvReader<R> {
        self.reader
    }
}

impl<T: CsvRecord, R: BufRead> Iterator for RecordReader<T, R> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
