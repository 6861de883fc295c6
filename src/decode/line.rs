//! Line classification for environment file text.

use crate::error::{EnvError, Result};
use tracing::trace;

/// One classified input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    /// A line whose first non-whitespace character is `#`.
    Comment(&'a str),
    /// A `KEY=VALUE` line, split at the first `=`, both sides trimmed.
    Pair { key: &'a str, value: &'a str },
}

/// A key/value line together with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
    pub line: usize,
}

/// Classify a single raw line. `number` is the 1-based line number reported
/// when the line has no `=`.
pub fn parse_line(raw: &str, number: usize) -> Result<Line<'_>> {
    let line = raw.trim();

    if line.is_empty() {
        trace!(line = number, "blank line");
        return Ok(Line::Blank);
    }

    if let Some(comment) = line.strip_prefix('#') {
        trace!(line = number, "comment line");
        return Ok(Line::Comment(comment));
    }

    let (key, value) = line
        .split_once('=')
        .ok_or(EnvError::LineParsing { line: number })?;

    trace!(line = number, key = key.trim(), "key/value line");
    Ok(Line::Pair {
        key: key.trim(),
        value: value.trim(),
    })
}

/// Iterate over the classified lines of `text`, numbered from 1.
///
/// The iterator yields the first parse error and keeps going; callers that
/// stop at the first error get the decoder's behavior.
pub fn lines(text: &str) -> impl Iterator<Item = Result<(usize, Line<'_>)>> {
    text.lines().enumerate().map(|(index, raw)| {
        let number = index + 1;
        parse_line(raw, number).map(|line| (number, line))
    })
}

/// Classify a single raw line of bytes.
///
/// Blank and comment lines are recognized before any UTF-8 check, so comment
/// text may hold arbitrary bytes; the comment is reported up to its first
/// invalid byte. Any other line must be UTF-8 or fails with
/// [`EnvError::Utf8`].
pub fn parse_line_bytes(raw: &[u8], number: usize) -> Result<Line<'_>> {
    let trimmed = raw.trim_ascii();

    if trimmed.is_empty() {
        trace!(line = number, "blank line");
        return Ok(Line::Blank);
    }

    if let Some(body) = trimmed.strip_prefix(b"#") {
        trace!(line = number, "comment line");
        let text = match std::str::from_utf8(body) {
            Ok(text) => text,
            Err(e) => std::str::from_utf8(&body[..e.valid_up_to()]).unwrap_or_default(),
        };
        return Ok(Line::Comment(text));
    }

    let text = std::str::from_utf8(raw).map_err(|_| EnvError::Utf8 { line: number })?;
    parse_line(text, number)
}

/// Iterate over the classified lines of `data`, numbered from 1.
///
/// Lines are split on `\n`; a trailing `\r` is removed by trimming.
pub fn lines_bytes(data: &[u8]) -> impl Iterator<Item = Result<(usize, Line<'_>)>> {
    data.split(|&b| b == b'\n').enumerate().map(|(index, raw)| {
        let number = index + 1;
        parse_line_bytes(raw, number).map(|line| (number, line))
    })
}

/// Parse `text` into its key/value entries, in file order.
///
/// Blank and comment lines are dropped. Fails on the first line without `=`.
pub fn parse(text: &str) -> Result<Vec<Entry>> {
    collect_entries(lines(text))
}

/// Parse `data` into its key/value entries, in file order.
///
/// Like [`parse`], but only key/value lines need to be UTF-8.
pub fn parse_bytes(data: &[u8]) -> Result<Vec<Entry>> {
    collect_entries(lines_bytes(data))
}

fn collect_entries<'a>(
    items: impl Iterator<Item = Result<(usize, Line<'a>)>>,
) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for item in items {
        if let (number, Line::Pair { key, value }) = item? {
            entries.push(Entry {
                key: key.to_string(),
                value: value.to_string(),
                line: number,
            });
        }
    }
    Ok(entries)
}
