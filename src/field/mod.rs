//! Field configuration resolution.
//!
//! Every record field carries a configuration string with the grammar
//! `key[,flag]*`:
//!
//! - `""` or a leading comma: the key defaults to the field name upper-cased
//! - `"-"`: the field is skipped by both encode and decode
//! - anything else: used verbatim as the key
//!
//! The only recognized flag is `omitempty`. Unknown flags are ignored so new
//! options can be added without breaking existing records.

#[cfg(test)]
mod tests;

/// Flag that omits empty values on encode and leaves the field untouched on
/// decode when the value is empty.
pub const OMIT_EMPTY: &str = "omitempty";

/// Configuration token that excludes a field entirely.
pub const SKIP: &str = "-";

/// Resolved settings for one record field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldConfig {
    /// Key used in the text format. Empty when `skip` is set.
    pub key_name: String,
    pub skip: bool,
    pub omit_empty: bool,
}

impl FieldConfig {
    /// Returns true if this field is written and read under `key`.
    pub fn matches(&self, key: &str) -> bool {
        !self.skip && self.key_name == key
    }
}

/// Resolve a field's key name and options from its raw configuration string.
///
/// This never fails: a malformed configuration degrades to the defaults.
/// Key names are not validated.
pub fn resolve(field_name: &str, raw: &str) -> FieldConfig {
    let (key, flags) = raw.split_once(',').unwrap_or((raw, ""));

    let mut config = FieldConfig::default();
    for flag in flags.split(',') {
        if flag == OMIT_EMPTY {
            config.omit_empty = true;
        }
    }

    match key {
        SKIP => config.skip = true,
        "" => config.key_name = field_name.to_uppercase(),
        name => config.key_name = name.to_string(),
    }

    config
}
