//! Error types for envfile.
//!
//! Uses thiserror for derive macros. Every variant is terminal for the call
//! that produced it; nothing is retried internally.

use crate::exit_codes;
use crate::kind::Kind;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for encode and decode operations.
#[derive(Error, Debug)]
pub enum EnvError {
    /// The value, the decode target, or one of its fields has a kind that
    /// cannot be stored as text.
    #[error("unsupported type {kind}")]
    UnsupportedType { kind: Kind },

    /// A non-blank, non-comment line has no `=` separator. Lines are 1-based.
    #[error("error parsing line {line}")]
    LineParsing { line: usize },

    /// The input bytes are not valid UTF-8 starting on this 1-based line.
    #[error("invalid UTF-8 on line {line}")]
    Utf8 { line: usize },

    /// Reading or writing an environment file failed.
    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// User provided invalid arguments to the CLI.
    #[error("{0}")]
    Usage(String),
}

impl EnvError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            EnvError::UnsupportedType { .. } => exit_codes::UNSUPPORTED_TYPE,
            EnvError::LineParsing { .. } | EnvError::Utf8 { .. } => exit_codes::PARSE_FAILURE,
            EnvError::Io { .. } => exit_codes::IO_FAILURE,
            EnvError::Usage(_) => exit_codes::USER_ERROR,
        }
    }

    pub(crate) fn unsupported(kind: Kind) -> Self {
        EnvError::UnsupportedType { kind }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EnvError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for envfile operations.
pub type Result<T> = std::result::Result<T, EnvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = EnvError::UnsupportedType { kind: Kind::I64 };
        assert_eq!(err.to_string(), "unsupported type i64");

        let err = EnvError::LineParsing { line: 5 };
        assert_eq!(err.to_string(), "error parsing line 5");

        let err = EnvError::Utf8 { line: 3 };
        assert_eq!(err.to_string(), "invalid UTF-8 on line 3");
    }

    #[test]
    fn io_error_names_the_path() {
        let err = EnvError::io(
            "/tmp/app.env",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("/tmp/app.env"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn errors_map_to_exit_codes() {
        assert_eq!(
            EnvError::UnsupportedType { kind: Kind::Bool }.exit_code(),
            exit_codes::UNSUPPORTED_TYPE
        );
        assert_eq!(
            EnvError::LineParsing { line: 1 }.exit_code(),
            exit_codes::PARSE_FAILURE
        );
        assert_eq!(EnvError::Utf8 { line: 1 }.exit_code(), exit_codes::PARSE_FAILURE);
        assert_eq!(
            EnvError::Usage("bad".to_string()).exit_code(),
            exit_codes::USER_ERROR
        );
    }
}
