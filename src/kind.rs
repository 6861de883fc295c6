//! Value kinds observed by the codec.
//!
//! Only strings can be stored in an environment file. Every other kind is
//! reported back to the caller inside [`EnvError::UnsupportedType`].
//!
//! [`EnvError::UnsupportedType`]: crate::error::EnvError::UnsupportedType

use std::fmt;

/// The kind of a value handed to the encoder or decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    String,
    /// A record registered with [`record!`](crate::record).
    Struct,
    Sequence,
    Map,
    Option,
    Unit,
}

impl Kind {
    /// Lowercase name used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Char => "char",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::I128 => "i128",
            Kind::Isize => "isize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::U128 => "u128",
            Kind::Usize => "usize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::String => "string",
            Kind::Struct => "struct",
            Kind::Sequence => "sequence",
            Kind::Map => "map",
            Kind::Option => "option",
            Kind::Unit => "unit",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
