//! Top-level values accepted by the encoder and decoder.
//!
//! Only registered records can be written or read. Everything else is
//! classified here so the codec can report it as an unsupported kind instead
//! of rejecting it at compile time, and so an absent value encodes to an
//! empty document.

use crate::decode;
use crate::encode;
use crate::error::Result;
use crate::kind::Kind;
use crate::record::Record;

/// Object-safe view of a [`Record`], used once the top-level value has been
/// classified.
pub trait RecordView {
    /// Append `(key, value)` pairs for every eligible field.
    fn encode_fields(&self, pairs: &mut Vec<(String, String)>) -> Result<()>;

    /// Assign `value` to every field whose resolved key equals `key`.
    fn assign(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<R: Record> RecordView for R {
    fn encode_fields(&self, pairs: &mut Vec<(String, String)>) -> Result<()> {
        encode::encode_record(self, pairs)
    }

    fn assign(&mut self, key: &str, value: &str) -> Result<()> {
        decode::assign(self, key, value)
    }
}

/// Classification of a value passed to the encoder.
pub enum Shape<'a> {
    /// No value at all. Encodes to an empty document.
    Absent,
    Record(&'a dyn RecordView),
    Unsupported(Kind),
}

/// Classification of a decode target.
pub enum ShapeMut<'a> {
    Record(&'a mut dyn RecordView),
    /// Anything that is not a present record, including absent targets.
    Unsupported(Kind),
}

/// A value that can be handed to [`to_vec`](crate::to_vec) or
/// [`from_str_into`](crate::from_str_into).
pub trait Document {
    fn shape(&self) -> Shape<'_>;
    fn shape_mut(&mut self) -> ShapeMut<'_>;
}

impl<T: Document> Document for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(inner) => inner.shape(),
            None => Shape::Absent,
        }
    }

    fn shape_mut(&mut self) -> ShapeMut<'_> {
        match self {
            Some(inner) => inner.shape_mut(),
            None => ShapeMut::Unsupported(Kind::Option),
        }
    }
}

impl Document for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Absent
    }

    fn shape_mut(&mut self) -> ShapeMut<'_> {
        ShapeMut::Unsupported(Kind::Unit)
    }
}

impl<T> Document for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Unsupported(Kind::Sequence)
    }

    fn shape_mut(&mut self) -> ShapeMut<'_> {
        ShapeMut::Unsupported(Kind::Sequence)
    }
}

macro_rules! unsupported_document {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Document for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Unsupported(Kind::$kind)
                }

                fn shape_mut(&mut self) -> ShapeMut<'_> {
                    ShapeMut::Unsupported(Kind::$kind)
                }
            }
        )*
    };
}

unsupported_document! {
    String => String,
    str => String,
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}
