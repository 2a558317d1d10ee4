//! CLI module for keytour
//!
//! This module provides the command-line interface for the keyword tour.
//!
//! ## Commands
//!
//! - `run` (default) - Run the demonstrations in order
//! - `list` - Print the keyword catalogue
//! - `describe <TYPE>` - Print the registered shape of a type
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use keytour_core::lang::keywords::{self, KeywordId};

use crate::config::TourConfig;
use crate::version::KEYTOUR_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// A guided tour of C# keywords, expressed in Rust
#[derive(Parser, Debug)]
#[command(name = "keytour")]
#[command(version = KEYTOUR_VERSION)]
#[command(about = "A guided tour of C# keywords, expressed in Rust", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the demonstrations (default)
    Run(RunArgs),

    /// Print the keyword catalogue
    List,

    /// Print the registered attributes and operations of a type
    Describe {
        /// Type name, bare (`Dog3`) or module-qualified (`keytour::demos::inheritance::Dog3`)
        #[arg(value_name = "TYPE")]
        name: String,
        /// Print the descriptor as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Only run demonstrations covering this keyword (repeatable)
    #[arg(long = "only", value_name = "KEYWORD", value_parser = parse_keyword)]
    pub only: Vec<KeywordId>,
    /// Do not print a banner before each demonstration
    #[arg(long)]
    pub no_headers: bool,
    /// Directory for scratch files written by the demonstrations
    #[arg(long, value_name = "DIR")]
    pub scratch_dir: Option<PathBuf>,
}

impl RunArgs {
    /// Build the tour configuration these flags describe.
    pub fn to_config(&self) -> TourConfig {
        let mut config = TourConfig::new()
            .with_headers(!self.no_headers)
            .with_only(self.only.iter().copied());
        if let Some(dir) = &self.scratch_dir {
            config = config.with_scratch_dir(dir);
        }
        config
    }
}

fn parse_keyword(s: &str) -> Result<KeywordId, String> {
    keywords::from_str(s).ok_or_else(|| format!("unknown keyword `{s}` (see `keytour list`)"))
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Run(args)) => commands::run_tour(&args.to_config()),
        Some(Command::List) => commands::list_keywords(),
        Some(Command::Describe { name, json }) => commands::describe(&name, json),
        None => commands::run_tour(&TourConfig::default()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::try_parse_from(["keytour"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_run_flags() {
        let cli = Cli::try_parse_from([
            "keytour",
            "run",
            "--only",
            "sealed",
            "--only",
            "reflection",
            "--no-headers",
            "--scratch-dir",
            "/tmp/keytour",
        ])
        .unwrap();
        let Some(Command::Run(args)) = cli.command else {
            panic!("Expected Run command");
        };
        assert_eq!(args.only, vec![KeywordId::Sealed, KeywordId::Typeof]);

        let config = args.to_config();
        assert!(!config.headers);
        assert_eq!(config.scratch_dir, PathBuf::from("/tmp/keytour"));
    }

    #[test]
    fn test_cli_rejects_unknown_keyword() {
        let err = Cli::try_parse_from(["keytour", "run", "--only", "goto"]).unwrap_err();
        assert!(err.to_string().contains("unknown keyword `goto`"));
    }

    #[test]
    fn test_cli_parse_describe() {
        let cli = Cli::try_parse_from(["keytour", "describe", "Dog3", "--json"]).unwrap();
        if let Some(Command::Describe { name, json }) = cli.command {
            assert_eq!(name, "Dog3");
            assert!(json);
        } else {
            panic!("Expected Describe command");
        }
    }

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::try_parse_from(["keytour", "list"]).unwrap();
        assert!(matches!(cli.command, Some(Command::List)));
    }

    #[test]
    fn test_run_args_default_config() {
        let config = RunArgs::default().to_config();
        assert!(config.headers);
        assert!(config.only.is_empty());
    }
}
