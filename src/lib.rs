//! envfile: encode and decode records as `KEY=value` environment files.
//!
//! A record describes, per field, which key it maps to:
//!
//! - no configuration: the field name upper-cased (`database_url` becomes
//!   `DATABASE_URL`)
//! - `"NAME"`: an explicit key
//! - `"-"`: the field is never written or read
//! - `",omitempty"` / `"NAME,omitempty"`: empty values are not written, and
//!   empty values in the input do not overwrite the field
//!
//! Only `String` fields can be stored. Other field types are allowed in a
//! record as long as they are skipped; otherwise encoding (or decoding a line
//! that targets them) fails with [`EnvError::UnsupportedType`].
//!
//! ```
//! #[derive(Debug, Default)]
//! struct Settings {
//!     foo: String,
//!     database: String,
//!     empty: String,
//!     ignored: String,
//! }
//!
//! envfile::record!(Settings {
//!     foo,
//!     database: "DB",
//!     empty: ",omitempty",
//!     ignored: "-",
//! });
//!
//! let data = "FOO=bar\nDB=test\n# Comments and empty lines are ignored\nEMPTY=\n\nIGNORED=valuenotread\n";
//! let settings: Settings = envfile::from_str(data)?;
//!
//! assert_eq!(settings.foo, "bar");
//! assert_eq!(settings.database, "test");
//! assert_eq!(settings.empty, "");
//! assert_eq!(settings.ignored, "");
//! assert_eq!(envfile::to_string(&settings)?, "FOO=bar\nDB=test\n");
//! # Ok::<(), envfile::EnvError>(())
//! ```

pub mod decode;
pub mod document;
pub mod encode;
pub mod error;
pub mod exit_codes;
pub mod field;
pub mod fs;
pub mod kind;
pub mod record;

pub use decode::{
    Entry, Line, from_slice, from_slice_into, from_str, from_str_into, lines, lines_bytes, parse,
    parse_bytes, parse_line, parse_line_bytes,
};
pub use document::{Document, RecordView, Shape, ShapeMut};
pub use encode::{to_pairs, to_string, to_vec, to_writer};
pub use error::{EnvError, Result};
pub use field::{FieldConfig, resolve};
pub use kind::Kind;
pub use record::{Field, FieldMut, FieldRef, FieldValue, Record, duplicate_keys};
