//! Demo request endpoint

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use qrecords_leads::RawLeadSubmission;
use std::sync::Arc;

use super::outcome_response;
use crate::error::ApiError;
use crate::ApiState;

/// Submit a demo request
#[utoipa::path(
    post,
    path = "/api/demo-requests",
    request_body = RawLeadSubmission,
    responses(
        (status = 200, description = "Lead stored and emails sent", body = qrecords_leads::SubmissionOutcome),
        (status = 400, description = "Body is not a JSON object", body = crate::models::ErrorResponse),
        (status = 422, description = "One or more fields are invalid", body = qrecords_leads::SubmissionOutcome),
        (status = 502, description = "CRM or email delivery failed", body = qrecords_leads::SubmissionOutcome)
    ),
    tag = "forms"
)]
pub async fn submit_demo_request(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<RawLeadSubmission>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(raw) = payload?;
    let outcome = state.demo_requests.submit_demo_request(raw).await;
    Ok(outcome_response(outcome))
}
