//! Error types for configuration resolution

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
///
/// A missing or corrupt config file is not an error: the store degrades to an
/// empty configuration. Only genuine I/O failures surface here.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Reading an answer from the operator failed
    #[error("Prompt failed: {0}")]
    Prompt(#[source] std::io::Error),

    /// Serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, ConfigError>;
