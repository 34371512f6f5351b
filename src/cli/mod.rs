//! CLI module for beanprobe
//!
//! This module provides the command-line interface for source-level introspection.
//!
//! ## Commands
//!
//! - `scan <file>...` - List the properties of every type declared in the files
//! - `check <file> --type NAME --expect a,b,c` - Require an exact, ordered property list
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `report` - Text/JSON rendering of scan results
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
pub mod report;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{IntrospectorConfig, PropertyOrder};

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

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Bean-style property introspection for Rust source files
#[derive(Parser, Debug)]
#[command(name = "beanprobe")]
#[command(version = VERSION)]
#[command(about = "Bean-style property introspection for Rust source files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Output format for `scan`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Property order for accessor-discovered properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Sorted by property name
    Name,
    /// Order of the first accessor declaration
    Declaration,
}

/// Introspector options shared by all commands
#[derive(Args, Debug, Clone)]
pub struct IntrospectionArgs {
    /// Additional property name to suppress (repeatable)
    #[arg(long = "suppress", value_name = "NAME")]
    pub suppress: Vec<String>,
    /// Do not suppress `class`
    #[arg(long)]
    pub no_default_suppressions: bool,
    /// Property order
    #[arg(long, value_enum, default_value_t = OrderArg::Name)]
    pub order: OrderArg,
}

impl IntrospectionArgs {
    /// Build the introspector configuration these flags describe.
    pub fn to_config(&self) -> IntrospectorConfig {
        let mut config = IntrospectorConfig::new();
        if self.no_default_suppressions {
            config = config.without_default_suppressions();
        }
        for name in &self.suppress {
            config = config.with_suppressed(name.clone());
        }
        config.with_order(match self.order {
            OrderArg::Name => PropertyOrder::ByName,
            OrderArg::Declaration => PropertyOrder::Declaration,
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the properties of the types declared in Rust source files
    Scan {
        /// Source files to scan
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
        /// Only report this type
        #[arg(long = "type", value_name = "NAME")]
        type_name: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Print property names only
        #[arg(long)]
        names_only: bool,
        #[command(flatten)]
        introspection: IntrospectionArgs,
    },

    /// Require a type's property names to match exactly, in order
    Check {
        /// Source file declaring the type
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Type to check
        #[arg(long = "type", value_name = "NAME")]
        type_name: String,
        /// Expected property names, comma separated (empty for none)
        #[arg(long, value_name = "NAMES", value_delimiter = ',', num_args = 0..)]
        expect: Vec<String>,
        #[command(flatten)]
        introspection: IntrospectionArgs,
    },
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
        Command::Scan {
            files,
            type_name,
            format,
            names_only,
            introspection,
        } => commands::scan_files(
            &files,
            type_name.as_deref(),
            format,
            names_only,
            &introspection.to_config(),
        ),
        Command::Check {
            file,
            type_name,
            expect,
            introspection,
        } => commands::check_type(&file, &type_name, &expect, &introspection.to_config()),
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
    fn test_cli_parse_scan() {
        let cli = Cli::try_parse_from(["beanprobe", "scan", "a.rs", "b.rs", "--format", "json"]).unwrap();
        if let Command::Scan { files, format, .. } = cli.command {
            assert_eq!(files.len(), 2);
            assert_eq!(format, OutputFormat::Json);
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_scan_requires_file() {
        assert!(Cli::try_parse_from(["beanprobe", "scan"]).is_err());
    }

    #[test]
    fn test_cli_parse_check_expect_list() {
        let cli = Cli::try_parse_from([
            "beanprobe",
            "check",
            "employees.rs",
            "--type",
            "EmployeeBean",
            "--expect",
            "firstName,lastName,startDate",
        ])
        .unwrap();
        if let Command::Check { type_name, expect, .. } = cli.command {
            assert_eq!(type_name, "EmployeeBean");
            assert_eq!(expect, vec!["firstName", "lastName", "startDate"]);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_introspection_args_to_config() {
        let cli = Cli::try_parse_from([
            "beanprobe",
            "scan",
            "a.rs",
            "--suppress",
            "id",
            "--no-default-suppressions",
            "--order",
            "declaration",
        ])
        .unwrap();
        let Command::Scan { introspection, .. } = cli.command else {
            panic!("Expected Scan command");
        };
        let config = introspection.to_config();
        assert!(config.is_suppressed("id"));
        assert!(!config.is_suppressed("class"));
        assert_eq!(config.order, PropertyOrder::Declaration);
    }

    #[test]
    fn test_default_introspection_args_match_default_config() {
        let cli = Cli::try_parse_from(["beanprobe", "scan", "a.rs"]).unwrap();
        let Command::Scan { introspection, .. } = cli.command else {
            panic!("Expected Scan command");
        };
        assert_eq!(introspection.to_config(), IntrospectorConfig::default());
    }
}
