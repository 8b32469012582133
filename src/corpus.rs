//! Formula corpus: fixture discovery and the file-name convention
//!
//! A fixture is named `<description>_<expected>.<ext>`, where `<expected>` is either the length
//! of the shortest satisfying word or the token `unsat`. Files with the right extension but no
//! `_` in their stem are support files and are skipped.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::HarnessError;

/// Token marking a fixture whose search is expected to exhaust the bound.
pub const UNSAT_TOKEN: &str = "unsat";

/// Separator between the description and the expected result.
pub const SEPARATOR: char = '_';

/// Expected result encoded in a fixture's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpectedOutcome {
    /// Shortest satisfying word has this length
    SatWithLength(u64),
    /// No model within the configured bound
    Unsat,
}

impl fmt::Display for ExpectedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedOutcome::SatWithLength(n) => write!(f, "shortest satisfying word of length {n}"),
            ExpectedOutcome::Unsat => write!(f, "{UNSAT_TOKEN}"),
        }
    }
}

/// One formula fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaFile {
    /// Bare file name, e.g. `demo_3.itl`
    pub name: String,
    pub path: PathBuf,
    /// `None` for support files (no `_` in the stem)
    pub expected: Option<ExpectedOutcome>,
}

impl FormulaFile {
    /// Build a fixture from its path, decoding the expectation from the file name.
    pub fn from_path(path: &Path, suffix: &str) -> Result<Self, HarnessError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let expected = expected_outcome(&name, suffix)?;
        Ok(Self {
            name,
            path: path.to_path_buf(),
            expected,
        })
    }

    pub fn is_test_case(&self) -> bool {
        self.expected.is_some()
    }
}

/// Decode the expectation from a fixture name.
///
/// Returns `Ok(None)` for names without a separator. The final `_`-separated segment of the stem
/// must be `unsat` or a non-empty run of ASCII digits.
pub fn expected_outcome(name: &str, suffix: &str) -> Result<Option<ExpectedOutcome>, HarnessError> {
    let stem = name.strip_suffix(suffix).unwrap_or(name);
    let Some((_, token)) = stem.rsplit_once(SEPARATOR) else {
        return Ok(None);
    };

    if token == UNSAT_TOKEN {
        return Ok(Some(ExpectedOutcome::Unsat));
    }

    let malformed = || HarnessError::MalformedName {
        file: name.to_string(),
        token: token.to_string(),
    };
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    token
        .parse::<u64>()
        .map(|n| Some(ExpectedOutcome::SatWithLength(n)))
        .map_err(|_| malformed())
}

/// List the files in `path` whose names end in `.<extension>`, sorted by name.
///
/// Subdirectories and hidden files (names starting with `.`) are not listed. A `path` naming a
/// single matching file yields just that file.
pub fn discover_formula_files(path: &Path, extension: &str) -> Result<Vec<PathBuf>, HarnessError> {
    let suffix = format!(".{extension}");
    let matches = |p: &Path| {
        p.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(&suffix))
    };

    if path.is_file() {
        return Ok(if matches(path) { vec![path.to_path_buf()] } else { Vec::new() });
    }

    let corpus_err = |source| HarnessError::Corpus {
        path: path.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(path).map_err(corpus_err)? {
        let entry_path = entry.map_err(corpus_err)?.path();
        let hidden = entry_path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().starts_with('.'));
        if !hidden && !entry_path.is_dir() && matches(&entry_path) {
            files.push(entry_path);
        }
    }

    files.sort();
    Ok(files)
}
