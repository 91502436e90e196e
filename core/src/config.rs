//! Service Configuration Module
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then `LEANCHECK_*` environment variables. Command-line flags are applied
//! on top by the binary.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use crate::error::ConfigError;

pub const ENV_HOST: &str = "LEANCHECK_HOST";
pub const ENV_PORT: &str = "LEANCHECK_PORT";
pub const ENV_CHECKER: &str = "LEANCHECK_CHECKER";
pub const ENV_TIMEOUT_MS: &str = "LEANCHECK_TIMEOUT_MS";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener settings
    pub server: ServerConfig,

    /// External checker settings
    pub checker: CheckerConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// How the external checker is invoked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Program name or path
    pub program: String,

    /// Arguments passed before the source path
    pub args: Vec<String>,

    /// Extension (without dot) given to the temporary source file
    pub extension: String,

    /// Directory for temporary source files, OS default when unset
    pub temp_dir: Option<PathBuf>,

    /// Wall-clock bound on one checker run, 0 disables it
    pub timeout_ms: u64,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            program: "lean".to_string(),
            args: Vec::new(),
            extension: "lean".to_string(),
            temp_dir: None,
            timeout_ms: 30_000,
        }
    }
}

impl CheckerConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

/// Loads, overrides and validates a [`ServiceConfig`]
#[derive(Debug, Default)]
pub struct ConfigManager {
    config: ServiceConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create a manager holding the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager that reads the given TOML file on load
    pub fn with_config_file<P: AsRef<std::path::Path>>(path: P) -> Self {
        Self {
            config: ServiceConfig::default(),
            config_path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Load the config file if one was given
    ///
    /// A missing file keeps the defaults.
    pub async fn load_config(&mut self) -> Result<(), ConfigError> {
        let Some(ref path) = self.config_path else {
            return Ok(());
        };

        if !path.exists() {
            warn!("Config file {:?} not found, using defaults", path);
            return Ok(());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;
        self.config = toml::from_str(&content)?;

        info!("Loaded configuration from {:?}", path);
        Ok(())
    }

    /// Apply `LEANCHECK_*` variables from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.config.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.config.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                name: ENV_PORT,
                value: port,
            })?;
        }
        if let Some(program) = lookup(ENV_CHECKER) {
            self.config.checker.program = program;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_MS) {
            self.config.checker.timeout_ms =
                timeout.parse().map_err(|_| ConfigError::InvalidEnv {
                    name: ENV_TIMEOUT_MS,
                    value: timeout,
                })?;
        }
        Ok(())
    }

    pub fn get_config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn get_config_mut(&mut self) -> &mut ServiceConfig {
        &mut self.config
    }

    pub fn into_config(self) -> ServiceConfig {
        self.config
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.config.server.port == 0 {
            return Err(ConfigError::Invalid(
                "server port must be greater than 0".to_string(),
            ));
        }

        if self.config.checker.program.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "checker program cannot be empty".to_string(),
            ));
        }

        let ext = &self.config.checker.extension;
        if ext.is_empty() || ext.starts_with('.') {
            return Err(ConfigError::Invalid(format!(
                "checker extension must be non-empty and given without a dot, got {ext:?}"
            )));
        }

        Ok(())
    }
}
