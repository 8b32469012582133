//! CLI module for the ITL regression harness
//!
//! ```text
//! itl-harness [DIR] [--max-bound N] [--solver PATH]
//! ```
//!
//! ## Modules
//!
//! - `harness` - Sequential driver over the corpus
//! - `report` - Reporter trait and the console reporter
//!
//! ## Design
//!
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod harness;
pub mod report;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::{DEFAULT_MAX_BOUND, DEFAULT_SOLVER, HarnessConfig};
use crate::error::{HarnessError, Severity};
use crate::version::HARNESS_VERSION;

use harness::Harness;
use report::ConsoleReporter;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// A solver verdict disagreed with the file name
    pub const FAILURE: ExitCode = ExitCode(1);
    /// No verdict could be obtained (spawn failure, unrecognised output, I/O)
    pub const HARNESS_ERROR: ExitCode = ExitCode(2);
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
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }
}

impl From<HarnessError> for CliError {
    fn from(err: HarnessError) -> Self {
        let exit_code = match err.severity() {
            Severity::Mismatch => ExitCode::FAILURE,
            Severity::HarnessError => ExitCode::HARNESS_ERROR,
        };
        let report = miette::Report::new(err);
        Self::new(format!("{report:?}"), exit_code)
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

/// Regression harness for the itlsc bounded ITL satisfiability checker
#[derive(Parser, Debug)]
#[command(name = "itl-harness")]
#[command(version = HARNESS_VERSION)]
#[command(
    about = "Run every formula fixture through itlsc and check the verdict encoded in its name",
    long_about = None
)]
pub struct Cli {
    /// Directory containing the .itl fixtures (or a single fixture)
    #[arg(value_name = "DIR", default_value = ".")]
    pub corpus: PathBuf,

    /// Maximum search bound passed through to the solver
    #[arg(long = "max-bound", value_name = "N", default_value_t = DEFAULT_MAX_BOUND)]
    pub max_bound: u32,

    /// Solver executable
    #[arg(long, value_name = "PATH", env = "ITLSC", default_value = DEFAULT_SOLVER)]
    pub solver: PathBuf,
}

impl Cli {
    pub fn config(&self) -> HarnessConfig {
        HarnessConfig::new()
            .with_corpus(&self.corpus)
            .with_solver(&self.solver)
            .with_max_bound(self.max_bound)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
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

/// Execute the harness and return its exit code.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.config();
    tracing::debug!(?config, "starting harness");

    let harness = Harness::from_config(config);
    let mut reporter = ConsoleReporter::stderr();
    harness.run(&mut reporter)?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Tests
// ============================================================================
