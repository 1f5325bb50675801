//! Infrastructure layer
//!
//! HTTP adapters for the outbound ports, plus in-memory doubles.

pub mod airtable;
pub mod in_memory;
pub mod resend;

pub use airtable::AirtableClient;
pub use in_memory::{InMemoryLeadRecords, InMemoryMailer};
pub use resend::ResendClient;

/// HTTP client shared by the adapters
pub use reqwest::Client as HttpClient;
