//! Console reporting
//!
//! The driver never prints. It calls a [`HarnessReporter`], so the per-file report can go to
//! standard error, a buffer in tests, or any other sink.

use std::io::{self, IsTerminal, Write};

use crate::error::HarnessError;
use crate::verdict::Outcome;

use super::harness::{HarnessSummary, TestResult};

/// Trait for reporting harness progress.
pub trait HarnessReporter {
    /// Called once the corpus has been listed
    fn on_corpus_collected(&mut self, _count: usize) {}

    /// Called before a file is processed
    fn on_file_start(&mut self, _file_name: &str) {}

    /// Called when a file finished as `OK` or `Skipped`
    fn on_file_complete(&mut self, result: &TestResult);

    /// Called when a file stopped the run, with its `Mismatch` or `HarnessError` result
    fn on_file_failed(&mut self, result: &TestResult, error: &HarnessError);

    /// Called when the whole corpus passed
    fn on_run_complete(&mut self, summary: &HarnessSummary);
}

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Line-oriented reporter: `<file>: OK`, `<file>: Skipped`, `<file>: <failure>`.
pub struct ConsoleReporter<W: Write> {
    out: W,
    color: bool,
}

impl ConsoleReporter<io::Stderr> {
    /// Reporter on standard error, coloured when it is a terminal.
    pub fn stderr() -> Self {
        let out = io::stderr();
        let color = out.is_terminal();
        Self { out, color }
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.color {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn status_line(&mut self, result: &TestResult) {
        let color = match result.outcome {
            Outcome::Ok => GREEN,
            Outcome::Skipped => YELLOW,
            Outcome::Mismatch | Outcome::HarnessError => RED,
        };
        let status = self.paint(color, &result.outcome.to_string());
        let _ = writeln!(self.out, "{}: {}", result.file.name, status);
    }
}

impl<W: Write> HarnessReporter for ConsoleReporter<W> {
    fn on_corpus_collected(&mut self, count: usize) {
        if count == 0 {
            let _ = writeln!(self.out, "No formula files collected");
        }
    }

    fn on_file_complete(&mut self, result: &TestResult) {
        self.status_line(result);
    }

    fn on_file_failed(&mut self, result: &TestResult, error: &HarnessError) {
        self.status_line(result);

        if let HarnessError::UnknownVerdict { output, .. } = error {
            let _ = writeln!(self.out, "  solver output:");
            for line in output.lines() {
                let _ = writeln!(self.out, "  | {line}");
            }
        }
    }

    fn on_run_complete(&mut self, summary: &HarnessSummary) {
        let line = format!("{} passed, {} skipped", summary.passed, summary.skipped);
        let _ = writeln!(self.out, "{}", self.paint(GREEN, &line));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::corpus::{ExpectedOutcome, FormulaFile};
    use crate::parser::SolverVerdict;
    use std::path::PathBuf;

    fn result(name: &str, outcome: Outcome) -> TestResult {
        TestResult {
            file: FormulaFile {
                name: name.to_string(),
                path: PathBuf::from(name),
                expected: Some(ExpectedOutcome::SatWithLength(1)),
            },
            verdict: Some(SolverVerdict::SatWithLength(1)),
            outcome,
        }
    }

    fn rendered(reporter: ConsoleReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_status_lines() {
        let mut reporter = ConsoleReporter::new(Vec::new(), false);
        reporter.on_file_complete(&result("demo_1.itl", Outcome::Ok));
        reporter.on_file_complete(&result("readme.itl", Outcome::Skipped));
        assert_eq!(rendered(reporter), "demo_1.itl: OK\nreadme.itl: Skipped\n");
    }

    #[test]
    fn test_colored_status_line() {
        let mut reporter = ConsoleReporter::new(Vec::new(), true);
        reporter.on_file_complete(&result("demo_1.itl", Outcome::Ok));
        assert_eq!(rendered(reporter), "demo_1.itl: \x1b[32mOK\x1b[0m\n");
    }

    #[test]
    fn test_unknown_verdict_dumps_output() {
        let mut reporter = ConsoleReporter::new(Vec::new(), false);
        let error = HarnessError::UnknownVerdict {
            file: "demo_3.itl".to_string(),
            solver: PathBuf::from("itlsc"),
            output: "Parser error: syntax error\nbye".to_string(),
        };
        let mut failed = result("demo_3.itl", Outcome::HarnessError);
        failed.verdict = Some(SolverVerdict::Unknown);
        reporter.on_file_failed(&failed, &error);
        assert_eq!(
            rendered(reporter),
            "demo_3.itl: Harness error\n  solver output:\n  | Parser error: syntax error\n  | bye\n"
        );
    }

    #[test]
    fn test_failed_status_comes_from_outcome() {
        let mut reporter = ConsoleReporter::new(Vec::new(), true);
        let error = HarnessError::Mismatch {
            file: "demo_3.itl".to_string(),
            expected: ExpectedOutcome::SatWithLength(3),
            actual: SolverVerdict::SatWithLength(5),
        };
        reporter.on_file_failed(&result("demo_3.itl", Outcome::Mismatch), &error);
        assert_eq!(rendered(reporter), "demo_3.itl: \x1b[31mMismatch\x1b[0m\n");
    }

    #[test]
    fn test_empty_corpus_notice() {
        let mut reporter = ConsoleReporter::new(Vec::new(), false);
        reporter.on_corpus_collected(0);
        assert_eq!(rendered(reporter), "No formula files collected\n");
    }
}
