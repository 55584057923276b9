//! Quote sanitizing applied before and after field scanning
//!
//! Two transformations surround the scanner: doubled quotes used as escapes
//! are collapsed before a line is scanned, and a single outer quote pair is
//! removed from each extracted field when quote stripping is enabled.

use std::borrow::Cow;

/// Collapse runs of two or more quote characters
///
/// A run not followed by the delimiter becomes a single quote. A run followed
/// by the delimiter becomes exactly two quotes: one escaped literal and the
/// quote that closes the field. An empty `""` field at the end of the line is
/// kept as is. Lines without doubled quotes are returned unchanged without
/// allocating.
pub fn collapse_escaped_quotes(line: &str, quote: char, delimiter: char) -> Cow<'_, str> {
    let mut doubled = String::with_capacity(2 * quote.len_utf8());
    doubled.push(quote);
    doubled.push(quote);

    if !line.contains(doubled.as_str()) {
        return Cow::Borrowed(line);
    }

    let mut collapsed = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c != quote {
            collapsed.push(c);
            continue;
        }

        let opens_field = collapsed.is_empty() || collapsed.ends_with(delimiter);

        let mut run = 1;
        while chars.peek() == Some(&quote) {
            chars.next();
            run += 1;
        }

        let keeps_closing_quote = match chars.peek() {
            Some(&next) => next == delimiter,
            None => opens_field && run == 2,
        };

        collapsed.push(quote);
        if run > 1 && keeps_closing_quote {
            collapsed.push(quote);
        }
    }

    Cow::Owned(collapsed)
}

/// Remove exactly one leading and one trailing quote character
///
/// Inner quotes are left alone, so `"say "hi""` becomes `say "hi"`.
pub fn strip_outer_quotes(field: &str, quote: char) -> &str {
    let field = field.strip_prefix(quote).unwrap_or(field);
    field.strip_suffix(quote).unwrap_or(field)
}
