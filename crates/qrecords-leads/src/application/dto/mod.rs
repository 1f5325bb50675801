//! Data Transfer Objects (DTOs)
//!
//! What a submission reports back to the visitor's browser.

use serde::{Deserialize, Serialize};

use crate::domain::services::FieldErrors;

pub const VALIDATION_FAILED_MESSAGE: &str = "Validierungsfehler";
pub const DEMO_REQUEST_SENT_MESSAGE: &str = "Demo-Anfrage erfolgreich gesendet";
pub const CONTACT_SENT_MESSAGE: &str = "Nachricht erfolgreich gesendet";
pub const DISPATCH_FAILED_MESSAGE: &str =
    "Es ist ein Fehler aufgetreten. Bitte versuchen Sie es später erneut oder kontaktieren Sie uns direkt.";

/// Route the visitor is sent to after a successful demo request
pub const SUCCESS_ROUTE: &str = "/success";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RedirectData {
    pub redirect_url: String,
}

/// Result of one submission
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RedirectData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

/// Coarse outcome class, used for metrics labels and HTTP status mapping
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    ValidationError,
    DispatchError,
}

impl OutcomeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::ValidationError => "validation_error",
            Self::DispatchError => "dispatch_error",
        }
    }
}

impl SubmissionOutcome {
    pub fn validation_failed(errors: FieldErrors) -> Self {
        Self {
            success: false,
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            data: None,
            errors: Some(errors),
        }
    }

    pub fn dispatch_failed() -> Self {
        Self {
            success: false,
            message: DISPATCH_FAILED_MESSAGE.to_string(),
            data: None,
            errors: None,
        }
    }

    pub fn demo_request_sent() -> Self {
        Self {
            success: true,
            message: DEMO_REQUEST_SENT_MESSAGE.to_string(),
            data: Some(RedirectData { redirect_url: SUCCESS_ROUTE.to_string() }),
            errors: None,
        }
    }

    pub fn contact_sent() -> Self {
        Self {
            success: true,
            message: CONTACT_SENT_MESSAGE.to_string(),
            data: None,
            errors: None,
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        if self.success {
            OutcomeKind::Success
        } else if self.errors.is_some() {
            OutcomeKind::ValidationError
        } else {
            OutcomeKind::DispatchError
        }
    }

    pub fn redirect_url(&self) -> Option<&str> {
        self.data.as_ref().map(|data| data.redirect_url.as_str())
    }
}
