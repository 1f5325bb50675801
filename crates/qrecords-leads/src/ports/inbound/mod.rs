//! Inbound ports (Use case traits)
//!
//! Hexagonal architecture: what the HTTP layer and the form stepper call.
//! Use cases never fail: every problem is folded into the outcome.

use async_trait::async_trait;

use crate::application::dto::SubmissionOutcome;
use crate::domain::{RawContactMessage, RawLeadSubmission};

/// Demo request use cases
#[async_trait]
pub trait DemoRequestUseCases: Send + Sync {
    /// Validate, store and announce a demo request
    async fn submit_demo_request(&self, raw: RawLeadSubmission) -> SubmissionOutcome;
}

/// Contact form use cases
#[async_trait]
pub trait ContactUseCases: Send + Sync {
    async fn submit_contact_message(&self, raw: RawContactMessage) -> SubmissionOutcome;
}
