//! Q-Records lead intake
//!
//! Everything behind the demo request and contact forms of the Q-Records
//! Store Manager site.
//!
//! ## Architecture
//!
//! - **Domain Layer**: submissions, value objects, validation, CRM mapping, email composition
//! - **Application Layer**: dispatch services, outcome DTOs, the form stepper
//! - **Ports Layer**: use case and gateway traits
//! - **Infrastructure Layer**: Airtable and Resend adapters, in-memory doubles
//!
//! ## Flow
//!
//! A raw submission is validated field by field. Accepted leads become one
//! CRM record and two emails, dispatched concurrently. The visitor sees
//! success only when all three calls succeeded.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports for convenience
pub use application::{
    ContactService, DemoRequestService, DemoRequestStepper, FormStep, StepperError, SubmissionOutcome,
};
pub use config::{ConfigError, LeadsConfig};
pub use domain::services::{
    CrmRecord, FieldErrors, NotificationComposer, NotificationMessage, OperatorSettings,
};
pub use domain::value_objects::CatalogSize;
pub use domain::{ContactMessage, LeadField, LeadSubmission, RawContactMessage, RawLeadSubmission};
pub use infrastructure::{AirtableClient, ResendClient};
pub use ports::inbound::{ContactUseCases, DemoRequestUseCases};
pub use ports::outbound::{DispatchError, EmailGateway, LeadRecordGateway};
