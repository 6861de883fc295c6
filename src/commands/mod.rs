//! Command implementations for envfile.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod export;

use crate::cli::{Command, FileArgs, GetArgs};
use envfile::error::{EnvError, Result};
use envfile::{Entry, fs};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check::cmd_check(args),
        Command::Get(args) => cmd_get(args),
        Command::Keys(args) => cmd_keys(args),
        Command::Export(args) => export::cmd_export(args),
    }
}

fn cmd_get(args: GetArgs) -> Result<()> {
    let entries = fs::read_entries(&args.file)?;

    let value = lookup(&entries, &args.key).ok_or_else(|| {
        EnvError::Usage(format!(
            "key '{}' not found in '{}'",
            args.key,
            args.file.display()
        ))
    })?;

    println!("{}", value);
    Ok(())
}

fn cmd_keys(args: FileArgs) -> Result<()> {
    for entry in fs::read_entries(&args.file)? {
        println!("{}", entry.key);
    }
    Ok(())
}

/// Value of the last entry with `key`, matching the decoder's overwrite order.
fn lookup<'a>(entries: &'a [Entry], key: &str) -> Option<&'a str> {
    entries
        .iter()
        .rev()
        .find(|entry| entry.key == key)
        .map(|entry| entry.value.as_str())
}
