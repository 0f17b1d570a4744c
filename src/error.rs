//! Error types shared by the library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the difference-chain extrapolator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtrapolateError {
    /// Differencing is undefined for an empty sequence.
    #[error("invalid input: cannot extrapolate an empty sequence")]
    InvalidInput,
}

/// Errors from driving the extrapolator over an input source.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {source}")]
    Line {
        /// 1-based line number in the input.
        line: usize,
        #[source]
        source: ExtrapolateError,
    },
}

/// Errors from loading `config.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
