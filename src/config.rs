//! Harness configuration
//!
//! Every setting the driver needs is carried by one [`HarnessConfig`] value built at startup and
//! handed to the driver; nothing is read from process-wide state afterwards.

use std::path::{Path, PathBuf};

/// Search bound used when none is given on the command line.
pub const DEFAULT_MAX_BOUND: u32 = 17;

/// File extension of formula fixtures (without the leading dot).
pub const DEFAULT_EXTENSION: &str = "itl";

/// Location of the solver binary relative to the corpus directory it is usually run from.
pub const DEFAULT_SOLVER: &str = "../src/itlsc";

/// Flag the solver accepts for selecting its maximum search bound.
pub const DEFAULT_BOUND_FLAG: &str = "--max-bound";

/// Harness configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Directory holding the formula files, or a single formula file
    pub corpus: PathBuf,
    /// Solver executable
    pub solver: PathBuf,
    /// Maximum search bound passed through to the solver
    pub max_bound: u32,
    /// Fixture suffix, without the dot
    pub extension: String,
    /// Command-line flag that precedes the bound
    pub bound_flag: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            corpus: PathBuf::from("."),
            solver: PathBuf::from(DEFAULT_SOLVER),
            max_bound: DEFAULT_MAX_BOUND,
            extension: DEFAULT_EXTENSION.to_string(),
            bound_flag: DEFAULT_BOUND_FLAG.to_string(),
        }
    }
}

impl HarnessConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the corpus directory (or single file)
    pub fn with_corpus(mut self, corpus: impl AsRef<Path>) -> Self {
        self.corpus = corpus.as_ref().to_path_buf();
        self
    }

    /// Set the solver executable
    pub fn with_solver(mut self, solver: impl AsRef<Path>) -> Self {
        self.solver = solver.as_ref().to_path_buf();
        self
    }

    /// Set the maximum search bound
    pub fn with_max_bound(mut self, max_bound: u32) -> Self {
        self.max_bound = max_bound;
        self
    }

    /// Set the fixture extension. A leading dot is accepted and dropped.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// The full suffix a fixture name must end with, e.g. `.itl`.
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension)
    }
}
