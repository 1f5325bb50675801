//! Domain services
//!
//! Pure functions and composers that operate on submissions.

pub mod crm_mapping;
pub mod notifications;
pub mod validation;

pub use crm_mapping::{CrmRecord, LeadStatus, LEAD_SOURCE};
pub use notifications::{
    ComposeError, LeadNotifications, NotificationComposer, NotificationKind, NotificationMessage,
    OperatorSettings,
};
pub use validation::{
    check_fields, validate_contact_message, validate_submission, FieldErrors, ValidationResult,
};
