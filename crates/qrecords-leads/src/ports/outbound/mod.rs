//! Outbound ports (Gateway traits)
//!
//! Hexagonal architecture: the external services a submission is dispatched to.

use async_trait::async_trait;

use crate::config::ConfigError;
use crate::domain::services::{CrmRecord, NotificationMessage};

/// CRM port
#[async_trait]
pub trait LeadRecordGateway: Send + Sync {
    /// Store one lead record. Not idempotent, never retried.
    async fn create_lead(&self, record: &CrmRecord) -> Result<(), DispatchError>;
}

/// Email delivery port
#[async_trait]
pub trait EmailGateway: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DispatchError>;
}

/// Failure to hand a record or email to an external service
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{service} rejected the request with status {status}: {body}")]
    Rejected {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}
