//! Difference-chain extrapolation.
//!
//! A sequence is differenced repeatedly until a row of zeros (or an empty
//! row) appears. The next term is the sequence's last value plus the sum of
//! the last element of every difference row.

use crate::error::ExtrapolateError;

/// An ordered, immutable list of signed integers read from one input line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence(Vec<i64>);

impl Sequence {
    /// Wraps the given values.
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last value, or `None` for an empty sequence.
    #[must_use]
    pub fn last(&self) -> Option<i64> {
        self.0.last().copied()
    }
}

impl From<Vec<i64>> for Sequence {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}

impl FromIterator<i64> for Sequence {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// First-order differences of a predecessor row.
///
/// Always exactly one element shorter than the row it was derived from
/// (an empty predecessor yields an empty row).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DifferenceRow(Vec<i64>);

impl DifferenceRow {
    /// Computes `row[i + 1] - row[i]` for every adjacent pair.
    #[must_use]
    pub fn differences_of(row: &[i64]) -> Self {
        Self(row.windows(2).map(|pair| pair[1] - pair[0]).collect())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<i64> {
        self.0.last().copied()
    }

    /// A row ends the chain when every element is zero. Empty rows qualify.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.0.iter().all(|&dx| dx == 0)
    }
}

/// Difference rows from the first derivative down to the terminal row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifferenceChain {
    rows: Vec<DifferenceRow>,
}

impl DifferenceChain {
    #[must_use]
    pub fn rows(&self) -> &[DifferenceRow] {
        &self.rows
    }

    /// Number of rows, terminal row included. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The all-zero (or empty) row that stopped differencing.
    #[must_use]
    pub fn terminal(&self) -> Option<&DifferenceRow> {
        self.rows.last()
    }

    /// Walks the rows from deepest to shallowest, adding each row's last
    /// element. An empty row contributes nothing.
    #[must_use]
    pub fn back_substitute(&self) -> i64 {
        self.rows
            .iter()
            .rev()
            .fold(0, |dx, row| dx + row.last().unwrap_or(0))
    }
}

/// Builds the difference chain for a non-empty sequence.
///
/// # Errors
///
/// Returns [`ExtrapolateError::InvalidInput`] if `sequence` is empty.
pub fn build_difference_chain(sequence: &Sequence) -> Result<DifferenceChain, ExtrapolateError> {
    if sequence.is_empty() {
        return Err(ExtrapolateError::InvalidInput);
    }

    let mut rows = vec![DifferenceRow::differences_of(sequence.as_slice())];
    // Each row is one shorter than the last, so this runs at most len(sequence) times.
    while let Some(current) = rows.last().filter(|row| !row.is_terminal()) {
        let next = DifferenceRow::differences_of(current.as_slice());
        rows.push(next);
    }

    Ok(DifferenceChain { rows })
}

/// Extrapolates the term that follows `sequence`.
///
/// # Errors
///
/// Returns [`ExtrapolateError::InvalidInput`] if `sequence` is empty.
pub fn next(sequence: &Sequence) -> Result<i64, ExtrapolateError> {
    let chain = build_difference_chain(sequence)?;
    let last = sequence.last().ok_or(ExtrapolateError::InvalidInput)?;
    Ok(last + chain.back_substitute())
}
