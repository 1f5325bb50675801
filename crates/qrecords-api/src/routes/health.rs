//! Health check endpoint

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::ApiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Every credential needed for dispatch is configured
    Ready,
    /// The server is up but submissions will fail to dispatch
    Degraded,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    /// Required environment variables that are not set
    pub missing_config: Vec<String>,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is up; `status` tells whether forms can be dispatched", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    let status = if state.missing_config.is_empty() {
        HealthStatus::Ready
    } else {
        HealthStatus::Degraded
    };
    Json(HealthResponse {
        status,
        version: state.version.clone(),
        missing_config: state.missing_config.iter().map(|key| key.to_string()).collect(),
    })
}
