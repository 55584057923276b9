//! Line-at-a-time reading from the underlying stream

use std::io::BufRead;

use crate::{Error, Result};

/// Reads trimmed lines from a buffered stream
///
/// The sequence ends at end of input or at the first empty line; once ended
/// it stays ended. Lines holding only whitespace are not empty and come back
/// as `""`.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    buffer: String,
    lines_read: usize,
    finished: bool,
}

impl<R: BufRead> LineSource<R> {
    /// Wrap an already-open stream
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            lines_read: 0,
            finished: false,
        }
    }

    /// Read the next line, trimmed
    pub fn next_line(&mut self) -> Result<Option<String>> {
        if self.finished {
            return Ok(None);
        }

        self.buffer.clear();
        let bytes = self.reader.read_line(&mut self.buffer).map_err(|e| {
            Error::io(format!("Failed to read line {}", self.lines_read + 1), e)
        })?;

        let line = self
            .buffer
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(&self.buffer);

        if bytes == 0 || line.is_empty() {
            self.finished = true;
            return Ok(None);
        }

        self.lines_read += 1;
        Ok(Some(line.trim().to_string()))
    }

    /// Number of lines handed out so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Whether the end of the sequence has been reached
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Give back the underlying stream
    pub fn into_inner(self) -> R {
        self.reader
    }
}
