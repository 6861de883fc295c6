//! Encoding records into environment file text.
//!
//! Fields are written in declaration order, one `KEY=value` line each. Values
//! are copied verbatim: no quoting, escaping or trimming.

use crate::document::{Document, Shape};
use crate::error::{EnvError, Result};
use crate::record::{FieldRef, Record};
use std::io::Write;
use tracing::debug;

/// Encode `doc` into ordered `(key, value)` pairs.
///
/// An absent document yields no pairs. A document that is not a record, or a
/// record with a non-skipped field that is not a `String`, fails with
/// [`EnvError::UnsupportedType`].
pub fn to_pairs<D: Document + ?Sized>(doc: &D) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    match doc.shape() {
        Shape::Absent => {}
        Shape::Record(record) => record.encode_fields(&mut pairs)?,
        Shape::Unsupported(kind) => return Err(EnvError::unsupported(kind)),
    }
    Ok(pairs)
}

/// Encode `doc` as environment file bytes.
pub fn to_vec<D: Document + ?Sized>(doc: &D) -> Result<Vec<u8>> {
    Ok(to_string(doc)?.into_bytes())
}

/// Encode `doc` as an environment file string.
pub fn to_string<D: Document + ?Sized>(doc: &D) -> Result<String> {
    let mut out = String::new();
    for (key, value) in to_pairs(doc)? {
        out.push_str(&key);
        out.push('=');
        out.push_str(&value);
        out.push('\n');
    }
    Ok(out)
}

/// Encode `doc` and write it to `writer`.
///
/// Nothing is written unless the whole document encodes successfully.
pub fn to_writer<W: Write, D: Document + ?Sized>(mut writer: W, doc: &D) -> Result<()> {
    let bytes = to_vec(doc)?;
    writer
        .write_all(&bytes)
        .map_err(|e| EnvError::io("<writer>", e))
}

/// Walk a record's fields and append the pairs it encodes to.
pub(crate) fn encode_record<R: Record>(
    record: &R,
    pairs: &mut Vec<(String, String)>,
) -> Result<()> {
    for field in R::fields() {
        let config = field.resolve();
        if config.skip {
            debug!(field = field.name, "skipping field");
            continue;
        }

        let value = match (field.get)(record) {
            FieldRef::Str(value) => value,
            FieldRef::Other(kind) => return Err(EnvError::unsupported(kind)),
        };

        if config.omit_empty && value.is_empty() {
            debug!(field = field.name, key = %config.key_name, "omitting empty value");
            continue;
        }

        pairs.push((config.key_name, value.to_string()));
    }
    Ok(())
}
