//! Contact message
//!
//! Free-form message sent through the site's contact form.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

use crate::domain::form_payload::{FormField, FormPayload};
use crate::domain::value_objects::Email;

/// Contact message as received from the form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RawContactMessage {
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    /// Fields whose JSON value had the wrong type
    #[serde(skip)]
    pub(crate) mistyped: BTreeSet<ContactField>,
}

impl RawContactMessage {
    pub fn is_mistyped(&self, field: ContactField) -> bool {
        self.mistyped.contains(&field)
    }
}

impl<'de> Deserialize<'de> for RawContactMessage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut payload = FormPayload::read(deserializer)?;
        Ok(Self {
            email: payload.text(ContactField::Email),
            subject: payload.text(ContactField::Subject),
            message: payload.text(ContactField::Message),
            mistyped: payload.into_mistyped(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl FormField for ContactField {
    fn path(self) -> &'static str {
        ContactField::path(self)
    }
}

/// Validated contact message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub(crate) email: Email,
    pub(crate) subject: String,
    pub(crate) message: String,
}

impl ContactMessage {
    pub fn email(&self) -> &Email { &self.email }
    pub fn subject(&self) -> &str { &self.subject }
    pub fn message(&self) -> &str { &self.message }
}
