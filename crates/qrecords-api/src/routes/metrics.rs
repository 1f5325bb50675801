//! Prometheus scrape endpoint

use axum::extract::State;
use std::sync::Arc;

use crate::error::ApiError;
use crate::ApiState;

pub async fn render_metrics(State(state): State<Arc<ApiState>>) -> Result<String, ApiError> {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .ok_or(ApiError::MetricsUnavailable)
}
