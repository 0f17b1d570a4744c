//! Command-line interface module.
//!
//! Provides argument parsing and puzzle dispatch.

pub mod args;
pub mod commands;
