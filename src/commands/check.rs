//! Implementation of the `envfile check` command.

use crate::cli::CheckArgs;
use envfile::error::Result;
use envfile::{Entry, fs};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Keys that are valid POSIX shell variable names.
static PORTABLE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid key regex"));

/// Execute the `envfile check` command.
///
/// A parse error is returned as-is so the process exits with the parse
/// failure code and the offending line number.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let entries = fs::read_entries(&args.file)?;

    if args.strict_keys {
        for warning in key_warnings(&entries) {
            eprintln!("Warning: {}", warning);
        }
    }

    println!(
        "{}: {} entr{}",
        args.file.display(),
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" }
    );
    Ok(())
}

/// Warnings for keys that are not portable or are defined more than once.
pub(crate) fn key_warnings(entries: &[Entry]) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        if !PORTABLE_KEY.is_match(&entry.key) {
            warnings.push(format!(
                "line {}: key '{}' is not a portable variable name",
                entry.line, entry.key
            ));
        }

        if let Some(first) = first_seen.get(entry.key.as_str()) {
            warnings.push(format!(
                "line {}: key '{}' already defined on line {}",
                entry.line, entry.key, first
            ));
        } else {
            first_seen.insert(&entry.key, entry.line);
        }
    }

    warnings
}
