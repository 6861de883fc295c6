//! Reading and writing environment files on disk.
//!
//! The codec itself works on in-memory text. These helpers add the file I/O
//! around it and map failures to [`EnvError::Io`].

pub mod atomic;

pub use atomic::atomic_write;

use crate::decode;
use crate::document::Document;
use crate::encode;
use crate::error::{EnvError, Result};
use crate::record::Record;
use std::path::Path;

/// Decode the file at `path` into `target`, in place.
///
/// # Arguments
///
/// * `path` - Path to the environment file
/// * `target` - Record to update; fields whose key is absent keep their value
///
/// # Returns
///
/// * `Ok(())` - Every key/value line was applied
/// * `Err(EnvError::Io)` - The file could not be read
/// * `Err(EnvError::LineParsing)` / `Err(EnvError::Utf8)` - A malformed line
/// * `Err(EnvError::UnsupportedType)` - `target` is not a present record, or a
///   matched field is not a `String`
pub fn read_into<P: AsRef<Path>, D: Document + ?Sized>(path: P, target: &mut D) -> Result<()> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| EnvError::io(path, e))?;
    decode::from_slice_into(&data, target)
}

/// Decode the file at `path` into a new record.
pub fn read<P: AsRef<Path>, R: Record + Default>(path: P) -> Result<R> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| EnvError::io(path, e))?;
    decode::from_slice(&data)
}

/// Read and parse the file at `path` into its key/value entries.
///
/// Comment lines may contain any bytes; a key/value line that is not UTF-8
/// fails with [`EnvError::Utf8`].
pub fn read_entries<P: AsRef<Path>>(path: P) -> Result<Vec<decode::Entry>> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| EnvError::io(path, e))?;
    decode::parse_bytes(&data)
}

/// Encode `doc` and atomically replace the file at `path` with it.
///
/// The file is left untouched if encoding fails.
///
/// # Example
///
/// ```no_run
/// #[derive(Default)]
/// struct Database {
///     host: String,
/// }
///
/// envfile::record!(Database { host: "DB_HOST" });
///
/// let db = Database { host: "localhost".to_string() };
/// envfile::fs::write("db.env", &db)?;
/// # Ok::<(), envfile::EnvError>(())
/// ```
pub fn write<P: AsRef<Path>, D: Document + ?Sized>(path: P, doc: &D) -> Result<()> {
    let bytes = encode::to_vec(doc)?;
    atomic_write(path, &bytes)
}
