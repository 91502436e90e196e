//! API Handlers Module
//!
//! This module contains the request handlers for the API system.

use axum::{debug_handler, extract::State, http::StatusCode, response::Json};
use std::sync::Arc;

use leancheck_core::{CheckError, Checker};

use crate::models::{CheckRequest, CheckResponse, ErrorResponse, HealthResponse};

/// Represents the state of the API server
pub struct ApiState {
    /// Shared checker; each call spawns its own process
    pub checker: Checker,
}

/// Health check endpoint
#[debug_handler]
pub async fn health_check(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "leancheck".to_string(),
        checker: state.checker.config().program.clone(),
    })
}

/// Check submitted source text
///
/// Any completed checker run is a 200, whatever it reported. Only failing to
/// run the checker at all is an error.
#[debug_handler]
pub async fn check_code(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, (StatusCode, Json<ErrorResponse>)> {
    tracing::debug!("Checking {} bytes of source", request.code.len());

    match state.checker.check(&request.code).await {
        Ok(errors) => Ok(Json(CheckResponse { errors })),
        Err(e) => {
            tracing::error!("Failed to run checker: {}", e);
            Err((status_for(&e), Json(ErrorResponse { error: e.to_string() })))
        }
    }
}

fn status_for(err: &CheckError) -> StatusCode {
    match err {
        CheckError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
