//! Quote-anchored field scanning
//!
//! A field is a run of quote characters, some content, and a closing run of
//! quote characters. Fields are anchored on their quotes rather than on
//! delimiter positions, which is why a delimiter inside quoted content needs
//! no special handling. The character before an opening run and the character
//! after a closing run must be a boundary: start or end of line, the
//! configured delimiter, or anything that is not a word character, whitespace
//! or quote.

/// Byte range of one field within a scanned line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpan {
    /// Byte offset of the opening quote
    pub start: usize,
    /// Byte offset just past the closing quote
    pub end: usize,
}

impl FieldSpan {
    /// The field text, quotes included
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }
}

/// Scanner locating quoted fields in a single line
#[derive(Debug, Clone, Copy)]
pub struct FieldScanner {
    quote: char,
    delimiter: char,
}

impl FieldScanner {
    /// Create a scanner for the given quote and delimiter characters
    pub fn new(quote: char, delimiter: char) -> Self {
        Self { quote, delimiter }
    }

    /// Find every field in `line`, left to right
    pub fn scan(&self, line: &str) -> Vec<FieldSpan> {
        let chars: Vec<(usize, char)> = line.char_indices().collect();
        let closes = self.closing_quotes(&chars);
        let byte_offset = |index: usize| chars.get(index).map_or(line.len(), |&(offset, _)| offset);

        let mut spans = Vec::new();
        let mut cursor = 0;

        while let Some((open, close)) = self.next_field(&chars, &closes, cursor) {
            spans.push(FieldSpan {
                start: byte_offset(open),
                end: byte_offset(close),
            });
            cursor = close;
        }

        spans
    }

    /// Whether `text` contains at least one field
    pub fn contains_field(&self, text: &str) -> bool {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let closes = self.closing_quotes(&chars);
        self.next_field(&chars, &closes, 0).is_some()
    }

    /// Check that `line` is nothing but fields separated by single delimiters
    pub fn is_well_formed(&self, line: &str) -> bool {
        let spans = self.scan(line);

        let (Some(first), Some(last)) = (spans.first(), spans.last()) else {
            return false;
        };

        if first.start != 0 || last.end != line.len() {
            return false;
        }

        spans.windows(2).all(|pair| {
            let mut gap = line[pair[0].end..pair[1].start].chars();
            gap.next() == Some(self.delimiter) && gap.next().is_none()
        })
    }

    /// Locate the next field at or after char index `from`, as char indices
    fn next_field(
        &self,
        chars: &[(usize, char)],
        closes: &[Option<usize>],
        from: usize,
    ) -> Option<(usize, usize)> {
        (from..chars.len()).find_map(|open| {
            let before = open.checked_sub(1).map(|i| chars[i].1);
            if chars[open].1 == self.quote && self.is_boundary(before) {
                self.closing_after(chars, closes, open).map(|close| (open, close))
            } else {
                None
            }
        })
    }

    /// Find where a field opening at `open` closes
    ///
    /// The opening run is tried at full length first and then shortened one
    /// quote at a time; for each length the earliest acceptable closing quote
    /// wins. A full opening run of two or more quotes directly followed by the
    /// delimiter is never extended across that delimiter, so `""` between two
    /// delimiters is an empty field.
    fn closing_after(
        &self,
        chars: &[(usize, char)],
        closes: &[Option<usize>],
        open: usize,
    ) -> Option<usize> {
        let run_len = chars[open..]
            .iter()
            .take_while(|&&(_, c)| c == self.quote)
            .count();

        for opening in (1..=run_len).rev() {
            let content_start = open + opening;
            let starts_with_delimiter =
                chars.get(content_start).map(|&(_, c)| c) == Some(self.delimiter);

            if opening > 1 && starts_with_delimiter {
                continue;
            }

            if let Some(at) = closes[content_start] {
                return Some(at + 1);
            }
        }

        None
    }

    /// For every char index, the first quote at or after it that can close
    /// a field
    ///
    /// Built in one right-to-left pass so each closing lookup is constant
    /// time. The table has one extra trailing entry for the end of line.
    fn closing_quotes(&self, chars: &[(usize, char)]) -> Vec<Option<usize>> {
        let mut closes = vec![None; chars.len() + 1];

        for at in (0..chars.len()).rev() {
            let after = chars.get(at + 1).map(|&(_, c)| c);
            closes[at] = if chars[at].1 == self.quote && self.is_boundary(after) {
                Some(at)
            } else {
                closes[at + 1]
            };
        }

        closes
    }

    fn is_boundary(&self, c: Option<char>) -> bool {
        match c {
            None => true,
            Some(c) if c == self.delimiter => true,
            Some(c) => {
                !(c.is_alphanumeric()
                    || c == '_'
                    || c.is_whitespace()
                    || c == self.quote
                    || c == '"')
            }
        }
    }
}
