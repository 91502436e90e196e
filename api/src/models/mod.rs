//! Request and response bodies for the HTTP surface

use serde::{Deserialize, Serialize};

use leancheck_core::{Diagnostic, ServerConfig};

/// Body of `POST /check`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Source text to check
    pub code: String,
}

/// Response of `POST /check`, diagnostics in checker emission order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResponse {
    pub errors: Vec<Diagnostic>,
}

/// Body returned when the checker could not be run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub checker: String,
}

/// Listener settings for [`crate::ApiServer`]
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl From<&ServerConfig> for ApiConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            host: server.host.clone(),
            port: server.port,
        }
    }
}
