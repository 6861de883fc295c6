//! CLI argument parsing for envfile.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// envfile: inspect and convert `KEY=value` environment files.
///
/// Blank lines and lines starting with `#` are ignored. Every other line
/// must contain `=`; the value is everything after the first one.
#[derive(Parser, Debug)]
#[command(name = "envfile")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for envfile.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that a file parses.
    ///
    /// Prints the number of entries. With `--strict-keys`, also warns about
    /// keys that are not portable shell variable names and about keys that
    /// appear more than once.
    Check(CheckArgs),

    /// Print the value of one key.
    ///
    /// When a key appears several times the last occurrence wins.
    Get(GetArgs),

    /// Print the keys of a file in file order.
    Keys(FileArgs),

    /// Print the file as a JSON object or YAML mapping.
    Export(ExportArgs),
}

/// Arguments shared by commands that only need a file.
#[derive(Parser, Debug)]
pub struct FileArgs {
    /// Path to the environment file.
    pub file: PathBuf,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the environment file.
    pub file: PathBuf,

    /// Warn about non-portable and repeated keys.
    #[arg(long)]
    pub strict_keys: bool,
}

/// Arguments for the `get` command.
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Path to the environment file.
    pub file: PathBuf,

    /// Key to look up (case-sensitive).
    pub key: String,
}

/// Output format for `export`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

/// Arguments for the `export` command.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Path to the environment file.
    pub file: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_with_strict_keys() {
        let cli = Cli::try_parse_from(["envfile", "check", ".env", "--strict-keys"]).unwrap();
        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.file, PathBuf::from(".env"));
                assert!(args.strict_keys);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_get() {
        let cli = Cli::try_parse_from(["envfile", "get", "app.env", "DB_HOST"]).unwrap();
        match cli.command {
            Command::Get(args) => assert_eq!(args.key, "DB_HOST"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_export_defaults_to_json() {
        let cli = Cli::try_parse_from(["envfile", "export", "app.env"]).unwrap();
        match cli.command {
            Command::Export(args) => assert_eq!(args.format, ExportFormat::Json),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_export_yaml_and_global_verbose() {
        let cli =
            Cli::try_parse_from(["envfile", "export", "app.env", "--format", "yaml", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Export(args) => assert_eq!(args.format, ExportFormat::Yaml),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_argument_is_rejected() {
        assert!(Cli::try_parse_from(["envfile", "keys"]).is_err());
    }
}
