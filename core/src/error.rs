//! Error types for checker invocation and configuration loading

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CheckError>;

/// Failures that stop a check from producing diagnostics.
///
/// Malformed diagnostic lines are never reported here; the parser drops them.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Checker binary not found in PATH: {0}")]
    CheckerNotFound(String),

    #[error("Failed to spawn checker process: {0}")]
    SpawnFailed(String),

    #[error("Failed to prepare temporary source file: {0}")]
    TempFile(#[source] std::io::Error),

    #[error("Checker did not finish within {0} ms")]
    Timeout(u64),

    #[error("IO error while waiting on checker: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration loading and validation failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for environment variable {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
