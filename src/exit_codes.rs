//! Exit code constants for the envfile CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing key)
//! - 2: Parse failure (malformed line, invalid UTF-8)
//! - 3: Unsupported type
//! - 4: I/O failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a key that is not in the file.
pub const USER_ERROR: i32 = 1;

/// Parse failure: a line without `=` or input that is not UTF-8.
pub const PARSE_FAILURE: i32 = 2;

/// A value or field whose type cannot be stored in an environment file.
pub const UNSUPPORTED_TYPE: i32 = 3;

/// Reading or writing a file failed.
pub const IO_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, PARSE_FAILURE, UNSUPPORTED_TYPE, IO_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_have_fixed_values() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(PARSE_FAILURE, 2);
        assert_eq!(UNSUPPORTED_TYPE, 3);
        assert_eq!(IO_FAILURE, 4);
    }
}
