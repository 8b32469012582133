//! Result-line parser for solver output
//!
//! The solver writes diagnostics and exactly one result line to a merged stream. Two result
//! forms are recognised, by exact, case-sensitive prefix:
//!
//! - [`SAT_PREFIX`] followed by the length of the shortest satisfying word
//! - [`BOUND_PREFIX`] followed by arbitrary text, read as `Unsat`
//!
//! The first recognised line decides the verdict; everything after it is ignored.

use std::fmt;

pub const SAT_PREFIX: &str = "Result: The temporal logic formula is satisfiable for a word of length ";
pub const BOUND_PREFIX: &str = "Result: Aborting due to reaching the maximum bound";

/// Verdict parsed from one solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverVerdict {
    SatWithLength(u64),
    /// The solver exhausted its search bound
    Unsat,
    /// No result line appeared before the stream closed
    Unknown,
}

impl fmt::Display for SolverVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverVerdict::SatWithLength(n) => write!(f, "length {n}"),
            SolverVerdict::Unsat => write!(f, "unsat (maximum bound reached)"),
            SolverVerdict::Unknown => write!(f, "no result"),
        }
    }
}

/// Classify a single output line, or `None` if it is not a result line.
pub fn parse_result_line(line: &str) -> Option<SolverVerdict> {
    if let Some(rest) = line.strip_prefix(SAT_PREFIX) {
        let digits = rest.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        return digits.parse().ok().map(SolverVerdict::SatWithLength);
    }
    if line.starts_with(BOUND_PREFIX) {
        return Some(SolverVerdict::Unsat);
    }
    None
}

/// Scan `lines` for the first result line.
///
/// Consumes the iterator only up to the first match.
pub fn parse_verdict<I>(lines: I) -> SolverVerdict
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .find_map(|line| parse_result_line(line.as_ref()))
        .unwrap_or(SolverVerdict::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sat_line() {
        let line = "Result: The temporal logic formula is satisfiable for a word of length 3";
        assert_eq!(parse_result_line(line), Some(SolverVerdict::SatWithLength(3)));
    }

    #[test]
    fn test_sat_line_trims_whitespace() {
        let line = "Result: The temporal logic formula is satisfiable for a word of length  12 \t";
        assert_eq!(parse_result_line(line), Some(SolverVerdict::SatWithLength(12)));
    }

    #[test]
    fn test_bound_line_with_trailing_text() {
        let line = "Result: Aborting due to reaching the maximum bound of 17.";
        assert_eq!(parse_result_line(line), Some(SolverVerdict::Unsat));
    }

    #[test]
    fn test_prefix_is_case_sensitive_and_anchored() {
        assert_eq!(parse_result_line("result: Aborting due to reaching the maximum bound"), None);
        assert_eq!(parse_result_line("  Result: Aborting due to reaching the maximum bound"), None);
        assert_eq!(parse_result_line("Iteration 4: no model yet"), None);
    }

    #[test]
    fn test_sat_line_without_integer_is_ignored() {
        let line = "Result: The temporal logic formula is satisfiable for a word of length unknown";
        assert_eq!(parse_result_line(line), None);
        assert_eq!(parse_result_line(SAT_PREFIX), None);
    }

    #[test]
    fn test_first_match_wins() {
        let lines = [
            "==================[Satisfiability Checking Result]=================",
            "Result: Aborting due to reaching the maximum bound of 17",
            "Result: The temporal logic formula is satisfiable for a word of length 2",
        ];
        assert_eq!(parse_verdict(lines), SolverVerdict::Unsat);
    }

    #[test]
    fn test_malformed_sat_line_does_not_stop_scan() {
        let lines = vec![
            format!("{SAT_PREFIX}x"),
            format!("{SAT_PREFIX}4"),
        ];
        assert_eq!(parse_verdict(&lines), SolverVerdict::SatWithLength(4));
    }

    #[test]
    fn test_no_result_line_is_unknown() {
        assert_eq!(parse_verdict(["Parser error: syntax error"]), SolverVerdict::Unknown);
        assert_eq!(parse_verdict(Vec::<String>::new()), SolverVerdict::Unknown);
    }

    #[test]
    fn test_scan_stops_at_first_match() {
        let mut seen = 0;
        let lines = ["diag", "Result: Aborting due to reaching the maximum bound", "tail", "tail"]
            .into_iter()
            .inspect(|_| seen += 1);
        assert_eq!(parse_verdict(lines), SolverVerdict::Unsat);
        assert_eq!(seen, 2);
    }
}
