//! API Models

use qrecords_leads::{CatalogSize, FormStep};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self { code: code.to_string(), message: message.into() }
    }
}

/// Catalog size choice offered by the demo request form
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogSizeOption {
    /// Token submitted as `catalogSize`
    pub value: String,
    pub label: String,
}

impl From<CatalogSize> for CatalogSizeOption {
    fn from(size: CatalogSize) -> Self {
        Self { value: size.token().to_string(), label: size.label().to_string() }
    }
}

/// One step of the demo request form
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormStepInfo {
    pub id: u8,
    pub title: String,
    pub description: String,
    /// Field paths validated when leaving this step
    pub fields: Vec<String>,
}

impl From<FormStep> for FormStepInfo {
    fn from(step: FormStep) -> Self {
        Self {
            id: step.number(),
            title: step.title().to_string(),
            description: step.description().to_string(),
            fields: step.fields().iter().map(|field| field.path().to_string()).collect(),
        }
    }
}
