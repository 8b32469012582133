//! Solver adapter: one subprocess per formula
//!
//! The solver is driven over its standard streams. stdout and stderr share one pipe, so the
//! merged output keeps the order in which the solver wrote it. The formula is written to stdin
//! on its own thread while the caller drains the pipe, so a solver that writes before it has
//! read all of its input cannot deadlock against a full pipe.
//!
//! There is no timeout: a solver that never closes its output blocks the harness.

use std::fmt;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{ChildStdin, Command, ExitStatus, Stdio};
use std::thread;

use crate::config::{DEFAULT_BOUND_FLAG, HarnessConfig};
use crate::error::HarnessError;

/// How the solver process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitInfo {
    /// `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl From<ExitStatus> for ExitInfo {
    fn from(status: ExitStatus) -> Self {
        Self { code: status.code() }
    }
}

impl fmt::Display for ExitInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Everything one solver run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutput {
    /// Merged stdout/stderr, one entry per line, line terminators removed
    pub lines: Vec<String>,
    pub exit: ExitInfo,
}

impl SolverOutput {
    /// The merged output as one string, for error reports.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Runs the solver on one formula.
pub trait SolverRunner {
    /// Feed `formula` to a fresh solver bounded by `max_bound` and collect its output.
    fn run(&self, formula: &str, max_bound: u32) -> Result<SolverOutput, HarnessError>;
}

/// Solver launched as an external process.
#[derive(Debug, Clone)]
pub struct ProcessSolver {
    program: PathBuf,
    bound_flag: String,
}

impl ProcessSolver {
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            bound_flag: DEFAULT_BOUND_FLAG.to_string(),
        }
    }

    pub fn from_config(config: &HarnessConfig) -> Self {
        Self {
            program: config.solver.clone(),
            bound_flag: config.bound_flag.clone(),
        }
    }

    fn io_error(&self, source: io::Error) -> HarnessError {
        HarnessError::SolverIo {
            solver: self.program.clone(),
            source,
        }
    }
}

impl SolverRunner for ProcessSolver {
    #[tracing::instrument(skip_all, fields(solver = %self.program.display(), max_bound = max_bound))]
    fn run(&self, formula: &str, max_bound: u32) -> Result<SolverOutput, HarnessError> {
        let (reader, writer) = io::pipe().map_err(|e| self.io_error(e))?;
        let err_writer = writer.try_clone().map_err(|e| self.io_error(e))?;

        let mut command = Command::new(&self.program);
        command
            .arg(&self.bound_flag)
            .arg(max_bound.to_string())
            .stdin(Stdio::piped())
            .stdout(writer)
            .stderr(err_writer);
        let spawned = command.spawn();
        // The command holds the last parent copies of the write end; EOF needs them closed.
        drop(command);
        let mut child = spawned.map_err(|source| HarnessError::SpawnFailure {
            solver: self.program.clone(),
            source,
        })?;

        let Some(stdin) = child.stdin.take() else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(self.io_error(io::Error::other("solver input pipe unavailable")));
        };

        let (read, written) = thread::scope(|s| {
            let input = s.spawn(move || write_input(stdin, formula));
            let read = read_lines(reader);
            if read.is_err() {
                let _ = child.kill();
            }
            (read, join(input))
        });

        let status = child.wait().map_err(|e| self.io_error(e))?;
        let exit = ExitInfo::from(status);

        let lines = read.map_err(|e| self.io_error(e))?;
        written.map_err(|e| self.io_error(e))?;
        tracing::debug!(%exit, lines = lines.len(), "solver finished");
        Ok(SolverOutput { lines, exit })
    }
}

fn join(handle: thread::ScopedJoinHandle<'_, io::Result<()>>) -> io::Result<()> {
    handle
        .join()
        .unwrap_or_else(|_| Err(io::Error::other("solver input thread panicked")))
}

/// Write the whole formula, then close stdin so the solver sees end-of-input.
fn write_input(mut stdin: ChildStdin, formula: &str) -> io::Result<()> {
    match stdin.write_all(formula.as_bytes()).and_then(|()| stdin.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("solver closed its input before the formula was written");
            Ok(())
        }
        other => other,
    }
}

/// Read `stream` to end-of-stream, one entry per line.
fn read_lines<R: Read>(stream: R) -> io::Result<Vec<String>> {
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    let mut lines = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(lines);
        }
        let decoded = String::from_utf8_lossy(&buf);
        let line = decoded.strip_suffix('\n').unwrap_or(&decoded);
        let line = line.strip_suffix('\r').unwrap_or(line);
        tracing::trace!(%line, "solver output");
        lines.push(line.to_string());
    }
}
