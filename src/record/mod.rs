//! Record registration.
//!
//! A record is a struct whose fields are described once, in declaration
//! order, by a static list of [`Field`] descriptors. The descriptors carry
//! the field name, its raw configuration string and accessors that expose
//! the field as a string or report its [`Kind`].
//!
//! Descriptors are normally generated with the [`record!`](crate::record)
//! macro:
//!
//! ```
//! #[derive(Debug, Default)]
//! struct Settings {
//!     name: String,
//!     database: String,
//!     empty: String,
//!     ignored: String,
//! }
//!
//! envfile::record!(Settings {
//!     name,
//!     database: "DB",
//!     empty: ",omitempty",
//!     ignored: "-",
//! });
//!
//! let settings = Settings {
//!     name: "foo".to_string(),
//!     database: "test".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(envfile::to_string(&settings)?, "NAME=foo\nDB=test\n");
//! # Ok::<(), envfile::EnvError>(())
//! ```

use crate::field::{self, FieldConfig};
use crate::kind::Kind;
use std::collections::{BTreeMap, HashMap};

#[cfg(test)]
mod tests;

/// Read access to a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef<'a> {
    Str(&'a str),
    Other(Kind),
}

/// Write access to a single field.
#[derive(Debug, PartialEq, Eq)]
pub enum FieldMut<'a> {
    Str(&'a mut String),
    Other(Kind),
}

/// Classifies a field type for the codec.
///
/// `String` is the only type exposed as text. The other implementations
/// exist so records can hold them and have them reported by kind.
pub trait FieldValue {
    fn field_ref(&self) -> FieldRef<'_>;
    fn field_mut(&mut self) -> FieldMut<'_>;
}

impl FieldValue for String {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Str(self)
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Str(self)
    }
}

macro_rules! unsupported_field {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn field_ref(&self) -> FieldRef<'_> {
                    FieldRef::Other(Kind::$kind)
                }

                fn field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::Other(Kind::$kind)
                }
            }
        )*
    };
}

unsupported_field! {
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
    () => Unit,
}

impl<T> FieldValue for Vec<T> {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Other(Kind::Sequence)
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Other(Kind::Sequence)
    }
}

impl<T> FieldValue for Option<T> {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Other(Kind::Option)
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Other(Kind::Option)
    }
}

impl<K, V, S> FieldValue for HashMap<K, V, S> {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Other(Kind::Map)
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Other(Kind::Map)
    }
}

impl<K, V> FieldValue for BTreeMap<K, V> {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Other(Kind::Map)
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Other(Kind::Map)
    }
}

/// Descriptor for one field of a record of type `R`.
pub struct Field<R> {
    /// Declared field name.
    pub name: &'static str,
    /// Raw configuration string, `""` when the field has none.
    pub config: &'static str,
    pub get: for<'a> fn(&'a R) -> FieldRef<'a>,
    pub get_mut: for<'a> fn(&'a mut R) -> FieldMut<'a>,
}

impl<R> Field<R> {
    /// Resolve this field's key name and options.
    pub fn resolve(&self) -> FieldConfig {
        field::resolve(self.name, self.config)
    }
}

impl<R> std::fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// A struct-like type whose fields can be walked in declaration order.
///
/// Descriptors live in a `static`, so records are `'static` types. Generic
/// code can walk any record:
///
/// ```
/// use envfile::{Record, resolve};
///
/// fn keys<R: Record>() -> Vec<String> {
///     R::fields()
///         .iter()
///         .map(|field| resolve(field.name, field.config))
///         .filter(|config| !config.skip)
///         .map(|config| config.key_name)
///         .collect()
/// }
///
/// #[derive(Default)]
/// struct Service {
///     name: String,
///     port: u16,
///     url: String,
/// }
///
/// envfile::record!(Service { name, port: "-", url: "SERVICE_URL" });
///
/// assert_eq!(keys::<Service>(), vec!["NAME", "SERVICE_URL"]);
/// ```
pub trait Record: Sized + 'static {
    fn fields() -> &'static [Field<Self>];
}

/// Key names claimed by more than one non-skipped field of `R`.
///
/// Decoding assigns a matching line to every such field; callers that want
/// unambiguous records can assert this list is empty.
pub fn duplicate_keys<R: Record>() -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut duplicates = Vec::new();

    for field in R::fields() {
        let config = field.resolve();
        if config.skip {
            continue;
        }
        if seen.contains(&config.key_name) {
            if !duplicates.contains(&config.key_name) {
                duplicates.push(config.key_name);
            }
        } else {
            seen.push(config.key_name);
        }
    }

    duplicates
}

/// Register a struct as a [`Record`] and a top-level
/// [`Document`](crate::Document).
///
/// Each field is listed in declaration order, optionally followed by its
/// configuration string (`key[,flag]*`, see [`resolve`](crate::resolve)).
/// The struct also becomes usable as a field of another record, where it is
/// reported as [`Kind::Struct`].
#[macro_export]
macro_rules! record {
    ($ty:ty { $($field:ident $(: $config:literal)?),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn fields() -> &'static [$crate::Field<Self>] {
                static FIELDS: &[$crate::Field<$ty>] = &[
                    $(
                        $crate::Field {
                            name: stringify!($field),
                            config: $crate::__field_config!($($config)?),
                            get: |record: &$ty| $crate::FieldValue::field_ref(&record.$field),
                            get_mut: |record: &mut $ty| {
                                $crate::FieldValue::field_mut(&mut record.$field)
                            },
                        },
                    )*
                ];
                FIELDS
            }
        }

        impl $crate::Document for $ty {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Record(self)
            }

            fn shape_mut(&mut self) -> $crate::ShapeMut<'_> {
                $crate::ShapeMut::Record(self)
            }
        }

        impl $crate::FieldValue for $ty {
            fn field_ref(&self) -> $crate::FieldRef<'_> {
                $crate::FieldRef::Other($crate::Kind::Struct)
            }

            fn field_mut(&mut self) -> $crate::FieldMut<'_> {
                $crate::FieldMut::Other($crate::Kind::Struct)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_config {
    () => {
        ""
    };
    ($config:literal) => {
        $config
    };
}
