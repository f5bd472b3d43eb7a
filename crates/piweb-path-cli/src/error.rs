//! Error types for piweb-path-cli

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for piweb-path-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in piweb-path-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from piweb-path
    #[error("Path error: {0}")]
    Path(#[from] piweb_path::Error),

    /// The configuration file could not be read
    #[error("Cannot read config file {path}: {source}")]
    ConfigRead {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this tool
    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying TOML failure
        #[source]
        source: toml::de::Error,
    },

    /// A command was invoked with unusable arguments
    #[error("Usage error: {0}")]
    Usage(String),
}

impl Error {
    /// Creates a new usage error.
    pub fn usage<S: Into<String>>(message: S) -> Self {
        Error::Usage(message.into())
    }
}
