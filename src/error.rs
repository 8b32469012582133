//! Harness error taxonomy
//!
//! Every failure the harness can hit is one variant of [`HarnessError`]. Each one names the
//! formula file involved so the failing case can be rerun by hand against the solver.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::corpus::ExpectedOutcome;
use crate::parser::SolverVerdict;

/// How a failure is classified in the run's outcome and exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The solver answered, but not what the file name expects.
    Mismatch,
    /// The harness could not obtain a verdict at all.
    HarnessError,
}

#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error("could not launch solver '{}': {source}", .solver.display())]
    #[diagnostic(
        code(itl_harness::spawn_failure),
        help("pass the solver location with --solver or the ITLSC environment variable")
    )]
    SpawnFailure { solver: PathBuf, source: io::Error },

    #[error(
        "Could not find satisfiability result when running '{}' for input file {file}",
        .solver.display()
    )]
    #[diagnostic(
        code(itl_harness::unknown_verdict),
        help("the solver output contained neither a satisfiable nor a bound-exhaustion result line")
    )]
    UnknownVerdict {
        file: String,
        solver: PathBuf,
        /// Merged stdout/stderr of the run, for inspection
        output: String,
    },

    #[error("Expected {expected} but found {actual} instead.\nInput formula: {file}")]
    #[diagnostic(code(itl_harness::mismatch))]
    Mismatch {
        file: String,
        expected: ExpectedOutcome,
        actual: SolverVerdict,
    },

    #[error("'{file}' does not encode an expected result: '{token}' is neither a length nor 'unsat'")]
    #[diagnostic(
        code(itl_harness::malformed_name),
        help("fixture names look like <description>_<length>.itl or <description>_unsat.itl")
    )]
    MalformedName { file: String, token: String },

    #[error("failed to list formula files in '{}': {source}", .path.display())]
    #[diagnostic(code(itl_harness::corpus))]
    Corpus { path: PathBuf, source: io::Error },

    #[error("failed to read formula file '{}': {source}", .path.display())]
    #[diagnostic(code(itl_harness::read_formula))]
    ReadFormula { path: PathBuf, source: io::Error },

    #[error("I/O error while talking to solver '{}': {source}", .solver.display())]
    #[diagnostic(code(itl_harness::solver_io))]
    SolverIo { solver: PathBuf, source: io::Error },
}

impl HarnessError {
    pub fn severity(&self) -> Severity {
        match self {
            HarnessError::Mismatch { .. } => Severity::Mismatch,
            _ => Severity::HarnessError,
        }
    }
}
