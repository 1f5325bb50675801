//! In-memory gateway implementations for testing

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::services::{CrmRecord, NotificationKind, NotificationMessage};
use crate::ports::outbound::{DispatchError, EmailGateway, LeadRecordGateway};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Records every lead it is given, or fails when told to
#[derive(Default)]
pub struct InMemoryLeadRecords {
    records: Mutex<Vec<CrmRecord>>,
    failure: Mutex<Option<String>>,
}

impl InMemoryLeadRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every following call with `reason`.
    pub fn fail_with(&self, reason: impl Into<String>) {
        *lock(&self.failure) = Some(reason.into());
    }

    pub fn records(&self) -> Vec<CrmRecord> {
        lock(&self.records).clone()
    }
}

#[async_trait]
impl LeadRecordGateway for InMemoryLeadRecords {
    async fn create_lead(&self, record: &CrmRecord) -> Result<(), DispatchError> {
        if let Some(reason) = lock(&self.failure).clone() {
            return Err(DispatchError::Unavailable(reason));
        }
        lock(&self.records).push(record.clone());
        Ok(())
    }
}

/// Collects sent emails; sends of selected kinds fail
#[derive(Default)]
pub struct InMemoryMailer {
    sent: Mutex<Vec<NotificationMessage>>,
    failing: Mutex<HashSet<NotificationKind>>,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(&self, kind: NotificationKind) {
        lock(&self.failing).insert(kind);
    }

    pub fn sent(&self) -> Vec<NotificationMessage> {
        lock(&self.sent).clone()
    }
}

#[async_trait]
impl EmailGateway for InMemoryMailer {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DispatchError> {
        if lock(&self.failing).contains(&message.kind) {
            return Err(DispatchError::Unavailable(format!(
                "{} delivery disabled",
                message.kind.template_name()
            )));
        }
        lock(&self.sent).push(message.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(kind: NotificationKind) -> NotificationMessage {
        NotificationMessage {
            kind,
            to: "info@q-records-storemanager.de".into(),
            subject: "Test".into(),
            html: "<p>Test</p>".into(),
            reply_to: None,
        }
    }

    #[test]
    fn test_mailer_failure_injection() {
        let mailer = InMemoryMailer::new();
        mailer.fail_on(NotificationKind::AdminAlert);

        let failed = tokio_test::block_on(mailer.send(&message(NotificationKind::AdminAlert)));
        assert!(matches!(failed, Err(DispatchError::Unavailable(_))));

        tokio_test::block_on(mailer.send(&message(NotificationKind::UserConfirmation))).unwrap();
        assert_eq!(mailer.sent().len(), 1);
    }
}
