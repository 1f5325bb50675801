//! API errors

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::models::ErrorResponse;

const MALFORMED_BODY_MESSAGE: &str = "Die Anfrage konnte nicht gelesen werden";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    #[error("Metrics recorder is not installed")]
    MetricsUnavailable,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::MalformedBody(rejection) => {
                warn!(error = %rejection.body_text(), "Rejected malformed request body");
                (StatusCode::BAD_REQUEST, ErrorResponse::new("malformed_body", MALFORMED_BODY_MESSAGE))
            }
            Self::MetricsUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new("metrics_unavailable", self.to_string()),
            ),
        };
        (status, Json(body)).into_response()
    }
}
