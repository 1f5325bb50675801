//! Resend API client

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};
use url::Url;

use crate::config::ResendConfig;
use crate::domain::services::NotificationMessage;
use crate::ports::outbound::{DispatchError, EmailGateway};

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

/// Resend email gateway
pub struct ResendClient {
    config: ResendConfig,
    client: Client,
}

impl ResendClient {
    pub fn new(config: ResendConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: ResendConfig, client: Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl EmailGateway for ResendClient {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DispatchError> {
        let api_key = self.config.api_key()?;
        let url = Url::parse(&format!("{}/emails", self.config.api_base_url.trim_end_matches('/')))?;
        debug!(kind = message.kind.template_name(), "POST {}", url);

        let request = SendEmailRequest {
            from: &self.config.from_email,
            to: [message.to.as_str()],
            subject: &message.subject,
            html: &message.html,
            reply_to: message.reply_to.as_deref(),
        };

        let response = self.client.post(url).bearer_auth(api_key).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(DispatchError::Rejected { service: "resend", status, body });
        }

        info!(kind = message.kind.template_name(), "Email accepted by Resend");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LeadsConfig, RESEND_API_KEY, RESEND_API_URL};
    use crate::domain::services::NotificationKind;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ResendClient {
        let uri = server.uri();
        let config = LeadsConfig::from_lookup(|key| match key {
            RESEND_API_KEY => Some("re_test".into()),
            RESEND_API_URL => Some(uri.clone()),
            _ => None,
        });
        ResendClient::new(config.resend)
    }

    fn confirmation() -> NotificationMessage {
        NotificationMessage {
            kind: NotificationKind::UserConfirmation,
            to: "max@laden.de".into(),
            subject: "Ihre Demo-Anfrage für Vinyl Dreams | Q-Records".into(),
            html: "<p>Hallo Max,</p>".into(),
            reply_to: Some("info@q-records-storemanager.de".into()),
        }
    }

    #[tokio::test]
    async fn test_send() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("authorization", "Bearer re_test"))
            .and(body_json(serde_json::json!({
                "from": "Q-Records <info@q-records-storemanager.de>",
                "to": ["max@laden.de"],
                "subject": "Ihre Demo-Anfrage für Vinyl Dreams | Q-Records",
                "html": "<p>Hallo Max,</p>",
                "reply_to": "info@q-records-storemanager.de",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "email_1"})))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).send(&confirmation()).await.unwrap();
    }

    #[tokio::test]
    async fn test_reply_to_is_omitted_when_absent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(body_json(serde_json::json!({
                "from": "Q-Records <info@q-records-storemanager.de>",
                "to": ["info@q-records-storemanager.de"],
                "subject": "[High-Value Lead] Neue Demo-Anfrage: Vinyl Dreams",
                "html": "<p>Neue Demo-Anfrage</p>",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let alert = NotificationMessage {
            kind: NotificationKind::AdminAlert,
            to: "info@q-records-storemanager.de".into(),
            subject: "[High-Value Lead] Neue Demo-Anfrage: Vinyl Dreams".into(),
            html: "<p>Neue Demo-Anfrage</p>".into(),
            reply_to: None,
        };
        client(&server).send(&alert).await.unwrap();
    }

    #[tokio::test]
    async fn test_api_error_is_a_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("domain not verified"))
            .mount(&server)
            .await;

        let err = client(&server).send(&confirmation()).await.unwrap_err();
        assert!(matches!(err, DispatchError::Rejected { service: "resend", status: 403, .. }));
        assert!(err.to_string().contains("domain not verified"));
    }
}
