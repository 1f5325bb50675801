//! Notification composer
//!
//! Renders the emails sent for every accepted submission. Bodies are
//! Handlebars templates; `{{value}}` expressions are HTML-escaped, so
//! visitor-supplied text can never inject markup.

use handlebars::Handlebars;
use serde::Serialize;

use crate::domain::contact_message::ContactMessage;
use crate::domain::submission::LeadSubmission;

const ADMIN_ALERT_TEMPLATE: &str = include_str!("../../../templates/admin_alert.hbs");
const USER_CONFIRMATION_TEMPLATE: &str = include_str!("../../../templates/user_confirmation.hbs");
const CONTACT_ALERT_TEMPLATE: &str = include_str!("../../../templates/contact_alert.hbs");

/// CRM workspace linked from the operator alert
pub const CRM_URL: &str = "https://airtable.com";

/// Sales process steps promised in the confirmation email
pub const NEXT_STEPS: [&str; 4] = [
    "Wir analysieren Ihre Anforderungen",
    "Persönlicher Anruf zur Terminvereinbarung",
    "30-minütige Live-Demo Ihres neuen Systems",
    "Kostenloser 30-Tage-Testzugang",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    AdminAlert,
    UserConfirmation,
    ContactAlert,
}

impl NotificationKind {
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::AdminAlert => "admin-alert",
            Self::UserConfirmation => "user-confirmation",
            Self::ContactAlert => "contact-alert",
        }
    }
}

/// A rendered email, ready for delivery
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationMessage {
    pub kind: NotificationKind,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub reply_to: Option<String>,
}

/// Both emails of a demo request
#[derive(Clone, Debug)]
pub struct LeadNotifications {
    pub admin_alert: NotificationMessage,
    pub user_confirmation: NotificationMessage,
}

/// Operator-side values shared by every notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorSettings {
    pub admin_email: String,
    pub site_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("Invalid email template: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    #[error("Failed to render email: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl From<handlebars::TemplateError> for ComposeError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::Template(Box::new(err))
    }
}

#[derive(Serialize)]
struct AdminAlertContext<'a> {
    full_name: String,
    email: &'a str,
    phone: Option<&'a str>,
    phone_e164: Option<String>,
    store_name: &'a str,
    store_city: &'a str,
    catalog_size: &'static str,
    current_system: Option<&'a str>,
    message: Option<&'a str>,
    crm_url: &'static str,
}

#[derive(Serialize)]
struct UserConfirmationContext<'a> {
    first_name: &'a str,
    store_name: &'a str,
    next_steps: &'static [&'static str],
    site_url: &'a str,
    site_host: &'a str,
}

#[derive(Serialize)]
struct ContactAlertContext<'a> {
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

pub struct NotificationComposer {
    handlebars: Handlebars<'static>,
    settings: OperatorSettings,
    site_host: String,
}

impl NotificationComposer {
    pub fn new(settings: OperatorSettings) -> Result<Self, ComposeError> {
        let mut hb = Handlebars::new();
        hb.register_template_string(NotificationKind::AdminAlert.template_name(), ADMIN_ALERT_TEMPLATE)?;
        hb.register_template_string(
            NotificationKind::UserConfirmation.template_name(),
            USER_CONFIRMATION_TEMPLATE,
        )?;
        hb.register_template_string(NotificationKind::ContactAlert.template_name(), CONTACT_ALERT_TEMPLATE)?;

        let site_host = url::Url::parse(&settings.site_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| settings.site_url.clone());

        Ok(Self { handlebars: hb, settings, site_host })
    }

    /// Operator alert and visitor confirmation for a demo request.
    pub fn compose(&self, lead: &LeadSubmission) -> Result<LeadNotifications, ComposeError> {
        let admin = AdminAlertContext {
            full_name: lead.full_name(),
            email: lead.email().as_str(),
            phone: lead.phone().map(|phone| phone.as_str()),
            phone_e164: lead.phone().map(|phone| phone.to_e164()),
            store_name: lead.store_name(),
            store_city: lead.store_city(),
            catalog_size: lead.catalog_size().label(),
            current_system: lead.current_system(),
            message: lead.message(),
            crm_url: CRM_URL,
        };
        let admin_alert = NotificationMessage {
            kind: NotificationKind::AdminAlert,
            to: self.settings.admin_email.clone(),
            subject: format!("[High-Value Lead] Neue Demo-Anfrage: {}", lead.store_name()),
            html: self.handlebars.render(NotificationKind::AdminAlert.template_name(), &admin)?,
            reply_to: None,
        };

        let confirmation = UserConfirmationContext {
            first_name: lead.first_name(),
            store_name: lead.store_name(),
            next_steps: &NEXT_STEPS,
            site_url: &self.settings.site_url,
            site_host: &self.site_host,
        };
        let user_confirmation = NotificationMessage {
            kind: NotificationKind::UserConfirmation,
            to: lead.email().to_string(),
            subject: format!("Ihre Demo-Anfrage für {} | Q-Records", lead.store_name()),
            html: self
                .handlebars
                .render(NotificationKind::UserConfirmation.template_name(), &confirmation)?,
            reply_to: Some(self.settings.admin_email.clone()),
        };

        Ok(LeadNotifications { admin_alert, user_confirmation })
    }

    /// Operator alert for a contact form message. Replies go to the visitor.
    pub fn compose_contact(&self, message: &ContactMessage) -> Result<NotificationMessage, ComposeError> {
        let context = ContactAlertContext {
            email: message.email().as_str(),
            subject: message.subject(),
            message: message.message(),
        };

        Ok(NotificationMessage {
            kind: NotificationKind::ContactAlert,
            to: self.settings.admin_email.clone(),
            subject: format!("[Kontakt] {}", message.subject()),
            html: self.handlebars.render(NotificationKind::ContactAlert.template_name(), &context)?,
            reply_to: Some(message.email().to_string()),
        })
    }
}
