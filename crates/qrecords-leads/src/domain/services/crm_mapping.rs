//! CRM record mapping
//!
//! Turns a validated demo request into the flat record stored in the CRM.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::domain::submission::LeadSubmission;

/// Source tag attached to every record created by the website
pub const LEAD_SOURCE: &str = "Website Demo Request";

/// Pipeline status of a lead in the CRM
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum LeadStatus {
    #[default]
    Inbound,
    Contacted,
    Qualified,
    Closed,
}

/// Lead record in the CRM's field naming
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CrmRecord {
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "Store Name")]
    pub store_name: String,
    #[serde(rename = "Store City")]
    pub store_city: String,
    #[serde(rename = "Catalog Size")]
    pub catalog_size: &'static str,
    #[serde(rename = "Current System", skip_serializing_if = "Option::is_none")]
    pub current_system: Option<String>,
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "Status")]
    pub status: LeadStatus,
    #[serde(rename = "Source")]
    pub source: &'static str,
    #[serde(rename = "Created At", serialize_with = "serialize_created_at")]
    pub created_at: DateTime<Utc>,
}

impl CrmRecord {
    /// Map a lead, stamped with the current instant.
    pub fn from_submission(lead: &LeadSubmission) -> Self {
        Self::from_submission_at(lead, Utc::now())
    }

    pub fn from_submission_at(lead: &LeadSubmission, created_at: DateTime<Utc>) -> Self {
        Self {
            first_name: lead.first_name().to_string(),
            last_name: lead.last_name().to_string(),
            email: lead.email().to_string(),
            phone: lead.phone().map(|phone| phone.as_str().to_string()),
            store_name: lead.store_name().to_string(),
            store_city: lead.store_city().to_string(),
            catalog_size: lead.catalog_size().label(),
            current_system: lead.current_system().map(str::to_string),
            message: lead.message().map(str::to_string),
            status: LeadStatus::Inbound,
            source: LEAD_SOURCE,
            created_at,
        }
    }

    /// Timestamp as written to the CRM, e.g. `2024-03-01T09:30:00.000Z`.
    pub fn created_at_iso(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

fn serialize_created_at<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}
