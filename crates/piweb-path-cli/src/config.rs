//! Configuration for the `pipath` tool.
//!
//! Settings come from a TOML file named by `--config` or the
//! `PIPATH_CONFIG` environment variable. Without a file the defaults apply.
//!
//! ```toml
//! [display]
//! format = "full"     # name | full | path
//! with_root = false
//!
//! [logging]
//! level = "debug"
//! ```

use std::path::Path;

use piweb_path::PathFormat;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "PIPATH_CONFIG";

/// Complete tool configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How paths are rendered for humans
    pub display: DisplayConfig,
    /// Log filter settings
    pub logging: LoggingConfig,
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Rendering mode used when a command does not name one
    pub format: PathFormat,
    /// Whether full paths start with the root delimiter
    pub with_root: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: PathFormat::Path,
            with_root: true,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. `"info"`)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Loads the config file at `path`, or the defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] if the file cannot be read and
    /// [`Error::ConfigParse`] if it is not a valid config.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
