//! Mirage extrapolates the next term of integer sequences.
//!
//! Each sequence is differenced until a row of zeros appears, then the last
//! elements of every row are summed back up onto the sequence's last value.
//!
//! ```
//! use mirage::core::{next, parse_sequence};
//!
//! let seq = parse_sequence("10 13 16 21 30 45");
//! assert_eq!(next(&seq), Ok(68));
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod logging;

pub use crate::core::{build_difference_chain, next, DifferenceChain, Sequence};
pub use crate::error::{ConfigError, DriverError, ExtrapolateError};
