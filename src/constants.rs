//! Application-wide constants and configuration values.
//!
//! Defines metadata, default paths, exit codes, and user-facing messages.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

// === Path Configuration ===

/// Directory that holds puzzle inputs, relative to the working directory.
pub const DEFAULT_INPUT_DIR: &str = "inputs";
/// Name of the config file inside the application config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that overrides the input path.
pub const ENV_INPUT: &str = "MIRAGE_INPUT";
/// Environment variable that overrides the config file path.
pub const ENV_CONFIG: &str = "MIRAGE_CONFIG";

// === Logging ===

/// Log level used when neither config nor `-v` raise it.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// === Exit Codes ===

/// Puzzle ran to completion.
pub const EXIT_SUCCESS: u8 = 0;
/// Missing or malformed command-line arguments.
pub const EXIT_USAGE: u8 = 1;
/// Day number has no registered puzzle.
pub const EXIT_UNKNOWN_DAY: u8 = 2;
/// Puzzle failed while running (unreadable input, invalid line, bad config).
pub const EXIT_FAILURE: u8 = 3;

// === Messages: CLI Output ===

pub const CLI_MSG_SPECIFY_DAY: &str = "Specify a day number";
pub const CLI_MSG_UNKNOWN_DAY: &str = "No puzzle registered for day ";
pub const CLI_MSG_ERROR: &str = "Error: ";
