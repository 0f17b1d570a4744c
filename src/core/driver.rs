//! Runs the extrapolator over every line of an input source and totals the results.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rayon::prelude::*;

use crate::core::extrapolator;
use crate::core::parser::parse_sequence;
use crate::error::{DriverError, ExtrapolateError};

/// How lines are evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One line after another on the calling thread.
    #[default]
    Sequential,
    /// Lines are evaluated on the rayon pool and combined by reduction.
    Parallel,
}

impl ExecutionMode {
    #[must_use]
    pub const fn from_parallel_flag(parallel: bool) -> Self {
        if parallel {
            Self::Parallel
        } else {
            Self::Sequential
        }
    }
}

/// Outcome of a full run over an input source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Number of lines evaluated.
    pub lines: usize,
    /// Sum of the extrapolated value of every line.
    pub total: i64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Part 1: {}", self.total)
    }
}

/// Extrapolates every line in `path` and sums the results.
///
/// # Errors
///
/// Returns [`DriverError::Io`] if the file cannot be opened, or any error
/// from [`extrapolate_lines`].
pub fn extrapolate_file(path: &Path, mode: ExecutionMode) -> Result<Report, DriverError> {
    let file = File::open(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("reading {} ({mode:?})", path.display());
    extrapolate_lines(BufReader::new(file), mode)
}

/// Extrapolates every line from `reader` and sums the results.
///
/// Every line is evaluated, blank ones included; a line that parses to an
/// empty sequence aborts the run.
///
/// # Errors
///
/// Returns [`DriverError::Read`] on an IO failure and [`DriverError::Line`]
/// for the first (lowest-numbered) line whose sequence is empty.
pub fn extrapolate_lines<R: BufRead>(reader: R, mode: ExecutionMode) -> Result<Report, DriverError> {
    let report = match mode {
        ExecutionMode::Sequential => run_sequential(reader)?,
        ExecutionMode::Parallel => run_parallel(reader)?,
    };
    tracing::info!("extrapolated {} line(s), total {}", report.lines, report.total);
    Ok(report)
}

fn run_sequential<R: BufRead>(reader: R) -> Result<Report, DriverError> {
    let mut report = Report::default();
    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| DriverError::Read {
            line: number,
            source,
        })?;
        report.total += evaluate_line(number, &line)
            .map_err(|(line, source)| DriverError::Line { line, source })?;
        report.lines += 1;
    }
    Ok(report)
}

fn run_parallel<R: BufRead>(reader: R) -> Result<Report, DriverError> {
    let lines = reader
        .lines()
        .enumerate()
        .map(|(index, line)| {
            line.map_err(|source| DriverError::Read {
                line: index + 1,
                source,
            })
        })
        .collect::<Result<Vec<String>, DriverError>>()?;

    let total = lines
        .par_iter()
        .enumerate()
        .map(|(index, line)| evaluate_line(index + 1, line))
        .reduce(|| Ok(0), combine)
        .map_err(|(line, source)| DriverError::Line { line, source })?;

    Ok(Report {
        lines: lines.len(),
        total,
    })
}

type LineResult = Result<i64, (usize, ExtrapolateError)>;

fn evaluate_line(number: usize, line: &str) -> LineResult {
    let sequence = parse_sequence(line);
    let value = extrapolator::next(&sequence).map_err(|e| (number, e))?;
    tracing::trace!("line {number}: {} value(s) -> {value}", sequence.len());
    Ok(value)
}

/// Adds two partial totals. Of two failures the lower line number wins,
/// so the reported error does not depend on how rayon splits the work.
fn combine(left: LineResult, right: LineResult) -> LineResult {
    match (left, right) {
        (Ok(a), Ok(b)) => Ok(a + b),
        (Err(a), Err(b)) => Err(if a.0 <= b.0 { a } else { b }),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
    }
}
