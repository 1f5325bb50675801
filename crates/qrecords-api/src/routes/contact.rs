//! Contact form endpoint

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use qrecords_leads::RawContactMessage;
use std::sync::Arc;

use super::outcome_response;
use crate::error::ApiError;
use crate::ApiState;

/// Send a contact message to the team
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = RawContactMessage,
    responses(
        (status = 200, description = "Message forwarded", body = qrecords_leads::SubmissionOutcome),
        (status = 400, description = "Body is not a JSON object", body = crate::models::ErrorResponse),
        (status = 422, description = "One or more fields are invalid", body = qrecords_leads::SubmissionOutcome),
        (status = 502, description = "Email delivery failed", body = qrecords_leads::SubmissionOutcome)
    ),
    tag = "forms"
)]
pub async fn submit_contact_message(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<RawContactMessage>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(raw) = payload?;
    let outcome = state.contact.submit_contact_message(raw).await;
    Ok(outcome_response(outcome))
}
