//! Decoding environment file text into records.
//!
//! Input is processed line by line:
//! - surrounding whitespace is trimmed
//! - blank lines and lines starting with `#` are skipped
//! - every other line is split at its first `=`; a line without one aborts
//!   decoding with [`EnvError::LineParsing`]
//! - the trimmed key is compared, case-sensitively, against the resolved key
//!   of every non-skipped field; each matching field receives the trimmed value
//!
//! Keys without a matching field are ignored. Fields whose key never appears
//! keep their current value.

mod line;


pub use line::{
    Entry, Line, lines, lines_bytes, parse, parse_bytes, parse_line, parse_line_bytes,
};

use crate::document::{Document, RecordView, ShapeMut};
use crate::error::{EnvError, Result};
use crate::record::{FieldMut, Record};
use tracing::debug;

/// Decode `text` into the record reachable through `target`, in place.
///
/// Fails with [`EnvError::UnsupportedType`] when `target` is not a present
/// record.
pub fn from_str_into<D: Document + ?Sized>(text: &str, target: &mut D) -> Result<()> {
    match target.shape_mut() {
        ShapeMut::Record(record) => decode_lines(lines(text), record),
        ShapeMut::Unsupported(kind) => Err(EnvError::unsupported(kind)),
    }
}

/// Decode `data` into `target`, in place.
///
/// Blank and comment lines may contain any bytes. Key/value lines must be
/// UTF-8 or decoding fails with [`EnvError::Utf8`] naming the line.
pub fn from_slice_into<D: Document + ?Sized>(data: &[u8], target: &mut D) -> Result<()> {
    match target.shape_mut() {
        ShapeMut::Record(record) => decode_lines(lines_bytes(data), record),
        ShapeMut::Unsupported(kind) => Err(EnvError::unsupported(kind)),
    }
}

/// Decode `text` into a new record starting from its default value.
pub fn from_str<R: Record + Default>(text: &str) -> Result<R> {
    let mut record = R::default();
    decode_lines(lines(text), &mut record)?;
    Ok(record)
}

/// Decode `data` into a new record starting from its default value.
pub fn from_slice<R: Record + Default>(data: &[u8]) -> Result<R> {
    let mut record = R::default();
    decode_lines(lines_bytes(data), &mut record)?;
    Ok(record)
}

fn decode_lines<'a>(
    items: impl Iterator<Item = Result<(usize, Line<'a>)>>,
    record: &mut dyn RecordView,
) -> Result<()> {
    for item in items {
        if let (_, Line::Pair { key, value }) = item? {
            record.assign(key, value)?;
        }
    }
    Ok(())
}

/// Assign `value` to every field of `record` whose resolved key is `key`.
pub(crate) fn assign<R: Record>(record: &mut R, key: &str, value: &str) -> Result<()> {
    let mut matched = false;

    for field in R::fields() {
        let config = field.resolve();
        if !config.matches(key) {
            continue;
        }
        matched = true;

        match (field.get_mut)(&mut *record) {
            FieldMut::Str(slot) => {
                if config.omit_empty && value.is_empty() {
                    debug!(field = field.name, key, "leaving empty value unassigned");
                    continue;
                }
                *slot = value.to_string();
            }
            FieldMut::Other(kind) => return Err(EnvError::unsupported(kind)),
        }
    }

    if !matched {
        debug!(key, "no field for key");
    }
    Ok(())
}
