//! Harness driver
//!
//! Walks the corpus in name order, one file at a time:
//!
//! ```text
//! no `_` in stem ──► Skipped
//! otherwise ──► Running (solver) ──► Parsed ──► OK | Mismatch | Harness error
//! ```
//!
//! The first `Mismatch` or harness error stops the run; later files are not touched.

use std::fs;
use std::time::{Duration, Instant};

use crate::config::HarnessConfig;
use crate::corpus::{FormulaFile, discover_formula_files};
use crate::error::HarnessError;
use crate::parser::{SolverVerdict, parse_verdict};
use crate::solver::{ProcessSolver, SolverOutput, SolverRunner};
use crate::verdict::{Outcome, check};

use super::report::HarnessReporter;

/// Result of one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub file: FormulaFile,
    /// `None` when no verdict was parsed: skipped, or failed before the solver answered
    pub verdict: Option<SolverVerdict>,
    pub outcome: Outcome,
}

/// A fixture that stopped the run.
#[derive(Debug)]
pub struct FileFailure {
    /// Outcome is `Mismatch` or `HarnessError`
    pub result: TestResult,
    pub error: HarnessError,
}

impl FileFailure {
    /// Failure that happened before the solver produced a verdict.
    fn before_verdict(file: FormulaFile, error: HarnessError) -> Self {
        Self {
            result: TestResult {
                file,
                verdict: None,
                outcome: Outcome::HarnessError,
            },
            error,
        }
    }
}

/// Summary of a run that got through the whole corpus.
#[derive(Debug, Clone, Default)]
pub struct HarnessSummary {
    pub passed: usize,
    pub skipped: usize,
    pub results: Vec<TestResult>,
    pub duration: Duration,
}

/// Sequential driver over one corpus.
pub struct Harness<S: SolverRunner> {
    config: HarnessConfig,
    solver: S,
}

impl Harness<ProcessSolver> {
    /// Harness running the solver binary named in `config`.
    pub fn from_config(config: HarnessConfig) -> Self {
        let solver = ProcessSolver::from_config(&config);
        Self::new(config, solver)
    }
}

impl<S: SolverRunner> Harness<S> {
    pub fn new(config: HarnessConfig, solver: S) -> Self {
        Self { config, solver }
    }

    /// Run every fixture in the corpus, stopping at the first failure.
    ///
    /// The failing file has already been passed to `reporter` when this returns `Err`.
    pub fn run(&self, reporter: &mut dyn HarnessReporter) -> Result<HarnessSummary, HarnessError> {
        let start = Instant::now();
        let suffix = self.config.suffix();

        let paths = discover_formula_files(&self.config.corpus, &self.config.extension)?;
        tracing::debug!(corpus = %self.config.corpus.display(), count = paths.len(), "corpus collected");
        reporter.on_corpus_collected(paths.len());

        let mut summary = HarnessSummary::default();
        for path in &paths {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            reporter.on_file_start(&file_name);

            let result = match FormulaFile::from_path(path, &suffix) {
                Ok(file) => self.run_file(file),
                Err(error) => {
                    let file = FormulaFile {
                        name: file_name,
                        path: path.clone(),
                        expected: None,
                    };
                    Err(FileFailure::before_verdict(file, error))
                }
            };
            match result {
                Ok(result) => {
                    match result.outcome {
                        Outcome::Skipped => summary.skipped += 1,
                        _ => summary.passed += 1,
                    }
                    reporter.on_file_complete(&result);
                    summary.results.push(result);
                }
                Err(FileFailure { result, error }) => {
                    tracing::debug!(file = %result.file.name, outcome = %result.outcome, %error, "run stopped");
                    reporter.on_file_failed(&result, &error);
                    return Err(error);
                }
            }
        }

        summary.duration = start.elapsed();
        tracing::info!(
            passed = summary.passed,
            skipped = summary.skipped,
            elapsed = ?summary.duration,
            "corpus passed"
        );
        reporter.on_run_complete(&summary);
        Ok(summary)
    }

    /// Process one fixture. A `Mismatch` or harness error comes back as a [`FileFailure`].
    #[allow(clippy::result_large_err)]
    pub fn run_file(&self, file: FormulaFile) -> Result<TestResult, FileFailure> {
        let Some(expected) = file.expected else {
            tracing::debug!(file = %file.name, "skipped");
            return Ok(TestResult {
                file,
                verdict: None,
                outcome: Outcome::Skipped,
            });
        };

        tracing::debug!(file = %file.name, %expected, "running");
        let output = match self.solve(&file) {
            Ok(output) => output,
            Err(error) => return Err(FileFailure::before_verdict(file, error)),
        };

        let verdict = parse_verdict(&output.lines);
        tracing::debug!(file = %file.name, %verdict, exit = %output.exit, "parsed");

        let outcome = check(expected, verdict);
        let error = match outcome {
            Outcome::Mismatch => HarnessError::Mismatch {
                file: file.name.clone(),
                expected,
                actual: verdict,
            },
            Outcome::HarnessError => HarnessError::UnknownVerdict {
                file: file.name.clone(),
                solver: self.config.solver.clone(),
                output: output.text(),
            },
            Outcome::Ok | Outcome::Skipped => {
                return Ok(TestResult {
                    file,
                    verdict: Some(verdict),
                    outcome,
                });
            }
        };
        Err(FileFailure {
            result: TestResult {
                file,
                verdict: Some(verdict),
                outcome,
            },
            error,
        })
    }

    fn solve(&self, file: &FormulaFile) -> Result<SolverOutput, HarnessError> {
        let formula = fs::read_to_string(&file.path).map_err(|source| HarnessError::ReadFormula {
            path: file.path.clone(),
            source,
        })?;
        self.solver.run(&formula, self.config.max_bound)
    }
}
