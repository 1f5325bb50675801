//! Command handlers
//!
//! Application services that orchestrate a submission: validate, build the
//! CRM record and emails, dispatch them concurrently, and fold the result
//! into a [`SubmissionOutcome`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::application::dto::SubmissionOutcome;
use crate::domain::services::{
    validate_contact_message, validate_submission, CrmRecord, NotificationComposer,
};
use crate::domain::{RawContactMessage, RawLeadSubmission};
use crate::ports::inbound::{ContactUseCases, DemoRequestUseCases};
use crate::ports::outbound::{DispatchError, EmailGateway, LeadRecordGateway};

pub const SUBMISSIONS_METRIC: &str = "qrecords_submissions_total";

fn record_outcome(form: &'static str, outcome: &SubmissionOutcome) {
    metrics::counter!(SUBMISSIONS_METRIC, "form" => form, "outcome" => outcome.kind().as_str()).increment(1);
}

/// Results of the three concurrent demo request calls
#[derive(Debug)]
struct DispatchReport {
    crm: Result<(), DispatchError>,
    admin_alert: Result<(), DispatchError>,
    user_confirmation: Result<(), DispatchError>,
}

impl DispatchReport {
    fn is_complete(&self) -> bool {
        self.crm.is_ok() && self.admin_alert.is_ok() && self.user_confirmation.is_ok()
    }

    fn log_failures(&self) {
        let channels = [
            ("crm", &self.crm),
            ("admin_alert", &self.admin_alert),
            ("user_confirmation", &self.user_confirmation),
        ];
        for (channel, result) in channels {
            if let Err(err) = result {
                error!(channel, error = %err, "Demo request dispatch failed");
            }
        }

        // No rollback: the record stays in the CRM.
        if self.crm.is_ok() {
            warn!("Lead stored in CRM but the submission is reported as failed");
        }
    }
}

// =============================================================================
// Demo requests
// =============================================================================

/// Demo request application service
pub struct DemoRequestService {
    crm: Arc<dyn LeadRecordGateway>,
    mailer: Arc<dyn EmailGateway>,
    composer: Arc<NotificationComposer>,
}

impl DemoRequestService {
    pub fn new(
        crm: Arc<dyn LeadRecordGateway>,
        mailer: Arc<dyn EmailGateway>,
        composer: Arc<NotificationComposer>,
    ) -> Self {
        Self { crm, mailer, composer }
    }

    async fn process(&self, raw: RawLeadSubmission) -> SubmissionOutcome {
        let lead = match validate_submission(&raw) {
            Ok(lead) => lead,
            Err(errors) => {
                info!(fields = ?errors.fields().collect::<Vec<_>>(), "Demo request failed validation");
                return SubmissionOutcome::validation_failed(errors);
            }
        };

        let record = CrmRecord::from_submission(&lead);
        let notifications = match self.composer.compose(&lead) {
            Ok(notifications) => notifications,
            Err(err) => {
                error!(error = %err, "Failed to compose demo request emails");
                return SubmissionOutcome::dispatch_failed();
            }
        };

        // join! rather than try_join!: every call runs to completion.
        let (crm, admin_alert, user_confirmation) = tokio::join!(
            self.crm.create_lead(&record),
            self.mailer.send(&notifications.admin_alert),
            self.mailer.send(&notifications.user_confirmation),
        );
        let report = DispatchReport { crm, admin_alert, user_confirmation };

        if !report.is_complete() {
            report.log_failures();
            return SubmissionOutcome::dispatch_failed();
        }

        info!(
            store = lead.store_name(),
            email_domain = %lead.email().domain(),
            catalog_size = lead.catalog_size().token(),
            "Demo request dispatched"
        );
        SubmissionOutcome::demo_request_sent()
    }
}

#[async_trait]
impl DemoRequestUseCases for DemoRequestService {
    #[tracing::instrument(name = "demo_request", skip_all)]
    async fn submit_demo_request(&self, raw: RawLeadSubmission) -> SubmissionOutcome {
        let outcome = self.process(raw).await;
        record_outcome("demo_request", &outcome);
        outcome
    }
}

// =============================================================================
// Contact messages
// =============================================================================

/// Contact form application service
pub struct ContactService {
    mailer: Arc<dyn EmailGateway>,
    composer: Arc<NotificationComposer>,
}

impl ContactService {
    pub fn new(mailer: Arc<dyn EmailGateway>, composer: Arc<NotificationComposer>) -> Self {
        Self { mailer, composer }
    }

    async fn process(&self, raw: RawContactMessage) -> SubmissionOutcome {
        let message = match validate_contact_message(&raw) {
            Ok(message) => message,
            Err(errors) => {
                info!(fields = ?errors.fields().collect::<Vec<_>>(), "Contact message failed validation");
                return SubmissionOutcome::validation_failed(errors);
            }
        };

        let alert = match self.composer.compose_contact(&message) {
            Ok(alert) => alert,
            Err(err) => {
                error!(error = %err, "Failed to compose contact email");
                return SubmissionOutcome::dispatch_failed();
            }
        };

        match self.mailer.send(&alert).await {
            Ok(()) => SubmissionOutcome::contact_sent(),
            Err(err) => {
                error!(channel = "contact_alert", error = %err, "Contact message dispatch failed");
                SubmissionOutcome::dispatch_failed()
            }
        }
    }
}

#[async_trait]
impl ContactUseCases for ContactService {
    #[tracing::instrument(name = "contact_message", skip_all)]
    async fn submit_contact_message(&self, raw: RawContactMessage) -> SubmissionOutcome {
        let outcome = self.process(raw).await;
        record_outcome("contact", &outcome);
        outcome
    }
}
