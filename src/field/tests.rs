//! Tests for field configuration resolution.

use super::{FieldConfig, resolve};

#[test]
fn test_absent_config_uses_uppercased_field_name() {
    let config = resolve("database_url", "");

    assert_eq!(config.key_name, "DATABASE_URL");
    assert!(!config.skip);
    assert!(!config.omit_empty);
}

#[test]
fn test_explicit_key_is_used_verbatim() {
    let config = resolve("database", "db_Url");

    assert_eq!(config.key_name, "db_Url");
    assert!(!config.skip);
}

#[test]
fn test_dash_skips_field() {
    let config = resolve("secret", "-");

    assert!(config.skip);
    assert!(config.key_name.is_empty());
}

#[test]
fn test_dash_with_flags_still_skips() {
    let config = resolve("secret", "-,omitempty");

    assert!(config.skip);
    assert!(config.omit_empty);
}

#[test]
fn test_leading_comma_keeps_default_name() {
    let config = resolve("empty", ",omitempty");

    assert_eq!(config.key_name, "EMPTY");
    assert!(config.omit_empty);
}

#[test]
fn test_explicit_key_with_omitempty() {
    let config = resolve("thing", "TEST_THING,omitempty");

    assert_eq!(
        config,
        FieldConfig {
            key_name: "TEST_THING".to_string(),
            skip: false,
            omit_empty: true,
        }
    );
}

#[test]
fn test_unknown_flags_are_ignored() {
    let config = resolve("port", "PORT,required,omitempty,deprecated");

    assert_eq!(config.key_name, "PORT");
    assert!(config.omit_empty);
    assert!(!config.skip);
}

#[test]
fn test_flags_are_case_sensitive() {
    let config = resolve("port", "PORT,OmitEmpty");

    assert!(!config.omit_empty);
}

#[test]
fn test_key_name_is_not_validated() {
    let config = resolve("weird", "has space=and equals");

    assert_eq!(config.key_name, "has space=and equals");
}

#[test]
fn test_matches_ignores_skipped_fields() {
    let skipped = resolve("secret", "-");
    assert!(!skipped.matches("SECRET"));
    assert!(!skipped.matches(""));

    let named = resolve("secret", "");
    assert!(named.matches("SECRET"));
    assert!(!named.matches("secret"));
}
