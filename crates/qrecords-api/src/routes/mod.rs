//! API Routes

pub mod catalog;
pub mod contact;
pub mod demo_requests;
pub mod health;
pub mod metrics;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use qrecords_leads::application::OutcomeKind;
use qrecords_leads::SubmissionOutcome;

/// HTTP status of a submission outcome
pub fn outcome_status(outcome: &SubmissionOutcome) -> StatusCode {
    match outcome.kind() {
        OutcomeKind::Success => StatusCode::OK,
        OutcomeKind::ValidationError => StatusCode::UNPROCESSABLE_ENTITY,
        OutcomeKind::DispatchError => StatusCode::BAD_GATEWAY,
    }
}

pub(crate) fn outcome_response(outcome: SubmissionOutcome) -> Response {
    (outcome_status(&outcome), Json(outcome)).into_response()
}
