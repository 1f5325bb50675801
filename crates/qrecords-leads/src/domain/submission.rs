//! Demo request submission
//!
//! A lead arrives as a [`RawLeadSubmission`] (every field optional, exactly
//! what the visitor's browser sent) and leaves validation as a
//! [`LeadSubmission`] whose fields carry their declared types.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

use crate::domain::form_payload::{FormField, FormPayload};
use crate::domain::value_objects::{CatalogSize, Email, PhoneNumber};

/// Demo request as received from the form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RawLeadSubmission {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub store_name: Option<String>,
    pub store_city: Option<String>,
    pub catalog_size: Option<String>,
    pub current_system: Option<String>,
    pub message: Option<String>,
    pub gdpr_consent: Option<bool>,
    /// Fields whose JSON value had the wrong type
    #[serde(skip)]
    pub(crate) mistyped: BTreeSet<LeadField>,
}

impl RawLeadSubmission {
    pub fn is_mistyped(&self, field: LeadField) -> bool {
        self.mistyped.contains(&field)
    }
}

impl<'de> Deserialize<'de> for RawLeadSubmission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut payload = FormPayload::read(deserializer)?;
        Ok(Self {
            first_name: payload.text(LeadField::FirstName),
            last_name: payload.text(LeadField::LastName),
            email: payload.text(LeadField::Email),
            phone: payload.text(LeadField::Phone),
            store_name: payload.text(LeadField::StoreName),
            store_city: payload.text(LeadField::StoreCity),
            catalog_size: payload.text(LeadField::CatalogSize),
            current_system: payload.text(LeadField::CurrentSystem),
            message: payload.text(LeadField::Message),
            gdpr_consent: payload.flag(LeadField::GdprConsent),
            mistyped: payload.into_mistyped(),
        })
    }
}

/// Form fields of a demo request, addressable by their wire path
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LeadField {
    FirstName,
    LastName,
    Email,
    Phone,
    StoreName,
    StoreCity,
    CatalogSize,
    CurrentSystem,
    Message,
    GdprConsent,
}

impl LeadField {
    pub const ALL: [LeadField; 10] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::StoreName,
        Self::StoreCity,
        Self::CatalogSize,
        Self::CurrentSystem,
        Self::Message,
        Self::GdprConsent,
    ];

    /// Key used in JSON payloads and in field error maps.
    pub const fn path(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::StoreName => "storeName",
            Self::StoreCity => "storeCity",
            Self::CatalogSize => "catalogSize",
            Self::CurrentSystem => "currentSystem",
            Self::Message => "message",
            Self::GdprConsent => "gdprConsent",
        }
    }
}

impl FormField for LeadField {
    fn path(self) -> &'static str {
        LeadField::path(self)
    }
}

/// Validated demo request
///
/// Only [`crate::domain::services::validate_submission`] builds one, so
/// holding a value means consent was given and every rule passed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadSubmission {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: Email,
    pub(crate) phone: Option<PhoneNumber>,
    pub(crate) store_name: String,
    pub(crate) store_city: String,
    pub(crate) catalog_size: CatalogSize,
    pub(crate) current_system: Option<String>,
    pub(crate) message: Option<String>,
}

impl LeadSubmission {
    pub fn first_name(&self) -> &str { &self.first_name }
    pub fn last_name(&self) -> &str { &self.last_name }
    pub fn full_name(&self) -> String { format!("{} {}", self.first_name, self.last_name) }
    pub fn email(&self) -> &Email { &self.email }
    pub fn phone(&self) -> Option<&PhoneNumber> { self.phone.as_ref() }
    pub fn store_name(&self) -> &str { &self.store_name }
    pub fn store_city(&self) -> &str { &self.store_city }
    pub fn catalog_size(&self) -> CatalogSize { self.catalog_size }
    pub fn current_system(&self) -> Option<&str> { self.current_system.as_deref() }
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }
}
