//! Optional on-disk configuration.
//!
//! Read from `<config_dir>/mirage/config.toml`. Every key is optional and a
//! missing file means defaults:
//!
//! ```toml
//! input_dir = "inputs"
//! parallel = false
//!
//! [logging]
//! level = "warn"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `input_<day>.txt` files.
    pub input_dir: PathBuf,
    /// Evaluate lines on the rayon pool.
    pub parallel: bool,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `warn` or `mirage=debug`.
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(constants::DEFAULT_INPUT_DIR),
            parallel: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: constants::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Where the config file lives when `--config` is not given.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::APP_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}

impl Config {
    /// Loads the config at `path`, falling back to defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// or [`ConfigError::Parse`] if it is not valid TOML for this schema.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads from `path` if given, otherwise from [`default_config_path`].
    ///
    /// # Errors
    ///
    /// See [`Config::load_from`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path.map(Path::to_path_buf).or_else(default_config_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }
}
