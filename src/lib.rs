#![forbid(unsafe_code)]
//! Regression harness for the `itlsc` bounded ITL satisfiability checker
//!
//! Each `.itl` fixture in a corpus directory is fed to a fresh solver process. The solver's
//! verdict is parsed from its output and compared with the result encoded in the fixture's name
//! (`<description>_<length>.itl` or `<description>_unsat.itl`). The first disagreement stops
//! the run.
//!
//! ## Pipeline
//!
//! [`corpus`] → [`solver`] → [`parser`] → [`verdict`] → [`cli::harness`] → [`cli::report`]
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod parser;
pub mod solver;
pub mod verdict;
pub mod version;

pub use cli::harness::{FileFailure, Harness, HarnessSummary, TestResult};
pub use cli::report::{ConsoleReporter, HarnessReporter};
pub use config::HarnessConfig;
pub use corpus::{ExpectedOutcome, FormulaFile};
pub use error::{HarnessError, Severity};
pub use parser::SolverVerdict;
pub use solver::{ExitInfo, ProcessSolver, SolverOutput, SolverRunner};
pub use verdict::Outcome;
