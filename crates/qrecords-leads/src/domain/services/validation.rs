//! Field validation
//!
//! Every form field has exactly one rule function. Full validation and the
//! per-step checks of the form stepper both go through these functions, so a
//! rule is never defined twice. Validation never stops at the first failure:
//! all failing fields are reported together. A field that arrived with the
//! wrong JSON type fails with its own rule's message.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::contact_message::{ContactField, ContactMessage, RawContactMessage};
use crate::domain::submission::{LeadField, LeadSubmission, RawLeadSubmission};
use crate::domain::value_objects::{CatalogSize, CatalogSizeError, Email, EmailError, PhoneError, PhoneNumber};

pub const CONSENT_REQUIRED: &str = "Bitte stimmen Sie der Datenschutzerklärung zu";

/// Outcome of validating a demo request.
pub type ValidationResult = Result<LeadSubmission, FieldErrors>;

/// Error messages keyed by field path
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.entry(path.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.0.get(path).map(Vec::as_slice)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    /// Failing field paths in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(path, messages)| (path.as_str(), messages.as_slice()))
    }

    /// Record the rule result of one field. A type mismatch replaces it.
    fn collect<T>(&mut self, (path, mismatch): (&str, Option<String>), result: Result<T, String>) -> Option<T> {
        match mismatch.map_or(result, Err) {
            Ok(value) => Some(value),
            Err(message) => {
                self.add(path, message);
                None
            }
        }
    }
}

// =============================================================================
// Text rules
// =============================================================================

/// Length bounds of a free-text field, counted in characters
struct TextRule {
    label: &'static str,
    min: usize,
    max: usize,
    trim: bool,
}

impl TextRule {
    const fn required(label: &'static str, min: usize, max: usize) -> Self {
        Self { label, min, max, trim: false }
    }

    const fn trimmed(label: &'static str, min: usize, max: usize) -> Self {
        Self { label, min, max, trim: true }
    }

    const fn optional(label: &'static str, max: usize) -> Self {
        Self { label, min: 0, max, trim: false }
    }

    /// A missing value counts as empty and fails the minimum length.
    fn check(&self, value: Option<&str>) -> Result<String, String> {
        let value = value.unwrap_or_default();
        let value = if self.trim { value.trim() } else { value };
        let length = value.chars().count();

        if length < self.min {
            Err(format!("{} muss mindestens {} Zeichen haben", self.label, self.min))
        } else if length > self.max {
            Err(format!("{} darf maximal {} Zeichen haben", self.label, self.max))
        } else {
            Ok(value.to_string())
        }
    }

    fn type_mismatch(&self) -> String {
        format!("{} muss ein Text sein", self.label)
    }

    /// Absent and empty values are both treated as "not provided".
    fn check_optional(&self, value: Option<&str>) -> Result<Option<String>, String> {
        match value {
            None | Some("") => Ok(None),
            Some(value) => self.check(Some(value)).map(Some),
        }
    }
}

const FIRST_NAME: TextRule = TextRule::trimmed("Vorname", 2, 50);
const LAST_NAME: TextRule = TextRule::trimmed("Nachname", 2, 50);
const STORE_NAME: TextRule = TextRule::required("Geschäftsname", 2, 100);
const STORE_CITY: TextRule = TextRule::required("Stadt", 2, 100);
const CURRENT_SYSTEM: TextRule = TextRule::optional("Aktuelle Lösung", 200);
const LEAD_MESSAGE: TextRule = TextRule::optional("Nachricht", 1000);
const CONTACT_SUBJECT: TextRule = TextRule::required("Betreff", 5, 100);
const CONTACT_MESSAGE: TextRule = TextRule::required("Nachricht", 20, 2000);

fn email_rule(value: Option<&str>) -> Result<Email, String> {
    Email::parse(value.unwrap_or_default()).map_err(|e| e.to_string())
}

fn phone_rule(value: Option<&str>) -> Result<Option<PhoneNumber>, String> {
    match value {
        None | Some("") => Ok(None),
        Some(value) => PhoneNumber::parse(value).map(Some).map_err(|e| e.to_string()),
    }
}

fn catalog_size_rule(value: Option<&str>) -> Result<CatalogSize, String> {
    value
        .unwrap_or_default()
        .parse::<CatalogSize>()
        .map_err(|e| e.to_string())
}

fn consent_rule(value: Option<bool>) -> Result<(), String> {
    match value {
        Some(true) => Ok(()),
        _ => Err(CONSENT_REQUIRED.to_string()),
    }
}

/// Message of a demo request field that arrived with the wrong JSON type.
fn lead_mismatch(raw: &RawLeadSubmission, field: LeadField) -> Option<String> {
    raw.is_mistyped(field).then(|| match field {
        LeadField::FirstName => FIRST_NAME.type_mismatch(),
        LeadField::LastName => LAST_NAME.type_mismatch(),
        LeadField::Email => EmailError::InvalidFormat.to_string(),
        LeadField::Phone => PhoneError::InvalidFormat.to_string(),
        LeadField::StoreName => STORE_NAME.type_mismatch(),
        LeadField::StoreCity => STORE_CITY.type_mismatch(),
        LeadField::CatalogSize => CatalogSizeError::UnknownBucket.to_string(),
        LeadField::CurrentSystem => CURRENT_SYSTEM.type_mismatch(),
        LeadField::Message => LEAD_MESSAGE.type_mismatch(),
        LeadField::GdprConsent => CONSENT_REQUIRED.to_string(),
    })
}

fn contact_mismatch(raw: &RawContactMessage, field: ContactField) -> Option<String> {
    raw.is_mistyped(field).then(|| match field {
        ContactField::Email => EmailError::InvalidFormat.to_string(),
        ContactField::Subject => CONTACT_SUBJECT.type_mismatch(),
        ContactField::Message => CONTACT_MESSAGE.type_mismatch(),
    })
}

/// Run the rule of a single demo request field.
fn check_field(raw: &RawLeadSubmission, field: LeadField) -> Result<(), String> {
    if let Some(message) = lead_mismatch(raw, field) {
        return Err(message);
    }
    match field {
        LeadField::FirstName => FIRST_NAME.check(raw.first_name.as_deref()).map(drop),
        LeadField::LastName => LAST_NAME.check(raw.last_name.as_deref()).map(drop),
        LeadField::Email => email_rule(raw.email.as_deref()).map(drop),
        LeadField::Phone => phone_rule(raw.phone.as_deref()).map(drop),
        LeadField::StoreName => STORE_NAME.check(raw.store_name.as_deref()).map(drop),
        LeadField::StoreCity => STORE_CITY.check(raw.store_city.as_deref()).map(drop),
        LeadField::CatalogSize => catalog_size_rule(raw.catalog_size.as_deref()).map(drop),
        LeadField::CurrentSystem => CURRENT_SYSTEM.check_optional(raw.current_system.as_deref()).map(drop),
        LeadField::Message => LEAD_MESSAGE.check_optional(raw.message.as_deref()).map(drop),
        LeadField::GdprConsent => consent_rule(raw.gdpr_consent),
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Check a subset of demo request fields, e.g. those owned by one form step.
pub fn check_fields(raw: &RawLeadSubmission, fields: &[LeadField]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for &field in fields {
        if let Err(message) = check_field(raw, field) {
            errors.add(field.path(), message);
        }
    }
    errors
}

/// Validate a complete demo request.
pub fn validate_submission(raw: &RawLeadSubmission) -> ValidationResult {
    let mut errors = FieldErrors::new();
    let field = |field: LeadField| (field.path(), lead_mismatch(raw, field));

    let first_name = errors.collect(field(LeadField::FirstName), FIRST_NAME.check(raw.first_name.as_deref()));
    let last_name = errors.collect(field(LeadField::LastName), LAST_NAME.check(raw.last_name.as_deref()));
    let email = errors.collect(field(LeadField::Email), email_rule(raw.email.as_deref()));
    let phone = errors.collect(field(LeadField::Phone), phone_rule(raw.phone.as_deref()));
    let store_name = errors.collect(field(LeadField::StoreName), STORE_NAME.check(raw.store_name.as_deref()));
    let store_city = errors.collect(field(LeadField::StoreCity), STORE_CITY.check(raw.store_city.as_deref()));
    let catalog_size = errors.collect(
        field(LeadField::CatalogSize),
        catalog_size_rule(raw.catalog_size.as_deref()),
    );
    let current_system = errors.collect(
        field(LeadField::CurrentSystem),
        CURRENT_SYSTEM.check_optional(raw.current_system.as_deref()),
    );
    let message = errors.collect(field(LeadField::Message), LEAD_MESSAGE.check_optional(raw.message.as_deref()));
    let consent = errors.collect(field(LeadField::GdprConsent), consent_rule(raw.gdpr_consent));

    let (
        Some(first_name),
        Some(last_name),
        Some(email),
        Some(phone),
        Some(store_name),
        Some(store_city),
        Some(catalog_size),
        Some(current_system),
        Some(message),
        Some(()),
    ) = (
        first_name,
        last_name,
        email,
        phone,
        store_name,
        store_city,
        catalog_size,
        current_system,
        message,
        consent,
    )
    else {
        return Err(errors);
    };

    Ok(LeadSubmission {
        first_name,
        last_name,
        email,
        phone,
        store_name,
        store_city,
        catalog_size,
        current_system,
        message,
    })
}

/// Validate a contact form message.
pub fn validate_contact_message(raw: &RawContactMessage) -> Result<ContactMessage, FieldErrors> {
    let mut errors = FieldErrors::new();
    let field = |field: ContactField| (field.path(), contact_mismatch(raw, field));

    let email = errors.collect(field(ContactField::Email), email_rule(raw.email.as_deref()));
    let subject = errors.collect(field(ContactField::Subject), CONTACT_SUBJECT.check(raw.subject.as_deref()));
    let message = errors.collect(field(ContactField::Message), CONTACT_MESSAGE.check(raw.message.as_deref()));

    match (email, subject, message) {
        (Some(email), Some(subject), Some(message)) => Ok(ContactMessage { email, subject, message }),
        _ => Err(errors),
    }
}
