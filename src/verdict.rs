//! Verdict checking: compare a fixture's expectation with the solver's answer.

use std::fmt;

use crate::corpus::ExpectedOutcome;
use crate::parser::SolverVerdict;

/// Terminal state of one fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Skipped,
    Ok,
    Mismatch,
    HarnessError,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Skipped => "Skipped",
            Outcome::Ok => "OK",
            Outcome::Mismatch => "Mismatch",
            Outcome::HarnessError => "Harness error",
        };
        f.write_str(s)
    }
}

/// Compare an expectation against a parsed verdict.
///
/// A bound-exhaustion verdict satisfies an `unsat` expectation. `Unknown` is always a harness
/// error, never a plain mismatch.
pub fn check(expected: ExpectedOutcome, verdict: SolverVerdict) -> Outcome {
    match (expected, verdict) {
        (_, SolverVerdict::Unknown) => Outcome::HarnessError,
        (ExpectedOutcome::SatWithLength(n), SolverVerdict::SatWithLength(m)) if n == m => Outcome::Ok,
        (ExpectedOutcome::Unsat, SolverVerdict::Unsat) => Outcome::Ok,
        _ => Outcome::Mismatch,
    }
}
