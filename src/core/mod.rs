//! Core sequence logic.
//!
//! Contains the extrapolator, the line parser, and the driver that
//! totals extrapolated values over an input source.

pub mod driver;
pub mod extrapolator;
pub mod parser;

pub use driver::{extrapolate_file, extrapolate_lines, ExecutionMode, Report};
pub use extrapolator::{build_difference_chain, next, DifferenceChain, DifferenceRow, Sequence};
pub use parser::parse_sequence;
