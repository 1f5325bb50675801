//! Demo request form stepper
//!
//! Client-side state machine of the three-step demo request form. Each step
//! owns a set of fields; "next" checks only those fields, "back" always
//! works, and the final submission is only possible from the last step.

use crate::application::dto::SubmissionOutcome;
use crate::domain::services::{check_fields, validate_submission, FieldErrors};
use crate::domain::{LeadField, RawLeadSubmission};
use crate::ports::inbound::DemoRequestUseCases;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormStep {
    Contact,
    Business,
    Details,
}

impl FormStep {
    pub const ALL: [FormStep; 3] = [Self::Contact, Self::Business, Self::Details];

    /// One-based position shown in the progress bar.
    pub const fn number(self) -> u8 {
        match self {
            Self::Contact => 1,
            Self::Business => 2,
            Self::Details => 3,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Contact => "Kontakt",
            Self::Business => "Geschäft",
            Self::Details => "Details",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Contact => "Ihre Daten",
            Self::Business => "Ihr Laden",
            Self::Details => "Mehr über Sie",
        }
    }

    pub const fn fields(self) -> &'static [LeadField] {
        match self {
            Self::Contact => &[LeadField::FirstName, LeadField::LastName, LeadField::Email, LeadField::Phone],
            Self::Business => &[LeadField::StoreName, LeadField::StoreCity, LeadField::CatalogSize],
            Self::Details => &[LeadField::CurrentSystem, LeadField::Message, LeadField::GdprConsent],
        }
    }

    pub const fn next(self) -> Option<FormStep> {
        match self {
            Self::Contact => Some(Self::Business),
            Self::Business => Some(Self::Details),
            Self::Details => None,
        }
    }

    pub const fn previous(self) -> Option<FormStep> {
        match self {
            Self::Contact => None,
            Self::Business => Some(Self::Contact),
            Self::Details => Some(Self::Business),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepperError {
    #[error("Submission is only possible from the final step")]
    NotOnFinalStep,

    #[error("Demo request was already submitted")]
    AlreadySubmitted,

    #[error("Form contains invalid fields")]
    Invalid(FieldErrors),
}

/// Form state: current step, draft and feedback
#[derive(Debug, Default)]
pub struct DemoRequestStepper {
    step: Option<FormStep>,
    draft: RawLeadSubmission,
    errors: FieldErrors,
    submit_error: Option<String>,
    redirect: Option<String>,
}

impl DemoRequestStepper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> FormStep {
        self.step.unwrap_or(FormStep::Contact)
    }

    pub fn draft(&self) -> &RawLeadSubmission {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut RawLeadSubmission {
        &mut self.draft
    }

    /// Field errors currently shown inline.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Message of the last failed submission.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Route to navigate to once the request was accepted.
    pub fn redirect_to(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    /// Check the current step's fields and advance when they pass.
    pub fn next(&mut self) -> bool {
        let step = self.step();
        self.errors = check_fields(&self.draft, step.fields());
        match step.next() {
            Some(next) if self.errors.is_empty() => {
                self.step = Some(next);
                true
            }
            _ => false,
        }
    }

    pub fn back(&mut self) -> bool {
        match self.step().previous() {
            Some(previous) => {
                self.step = Some(previous);
                self.errors = FieldErrors::new();
                true
            }
            None => false,
        }
    }

    /// Validate the whole draft, then hand it to the demo request use case.
    ///
    /// On failure the stepper stays on the final step with the draft intact,
    /// so the visitor can correct it and submit again.
    pub async fn submit(
        &mut self,
        use_cases: &dyn DemoRequestUseCases,
    ) -> Result<SubmissionOutcome, StepperError> {
        if self.redirect.is_some() {
            return Err(StepperError::AlreadySubmitted);
        }
        if self.step() != FormStep::Details {
            return Err(StepperError::NotOnFinalStep);
        }
        if let Err(errors) = validate_submission(&self.draft) {
            self.errors = errors.clone();
            return Err(StepperError::Invalid(errors));
        }

        self.submit_error = None;
        let outcome = use_cases.submit_demo_request(self.draft.clone()).await;

        if outcome.success {
            self.errors = FieldErrors::new();
            self.redirect = outcome.redirect_url().map(str::to_string);
        } else {
            self.errors = outcome.errors.clone().unwrap_or_default();
            self.submit_error = Some(outcome.message.clone());
        }
        Ok(outcome)
    }
}
