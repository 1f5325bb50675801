//! Domain layer

pub mod contact_message;
pub mod form_payload;
pub mod services;
pub mod submission;
pub mod value_objects;

pub use contact_message::{ContactField, ContactMessage, RawContactMessage};
pub use form_payload::FormField;
pub use submission::{LeadField, LeadSubmission, RawLeadSubmission};
