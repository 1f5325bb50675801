//! Q-Records Store Manager API
//!
//! HTTP surface of the marketing site's lead forms.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      QRECORDS API                        │
//! │                                                          │
//! │   POST /api/demo-requests        POST /api/contact       │
//! │             │                            │               │
//! │   ┌─────────▼──────────┐      ┌──────────▼─────────┐     │
//! │   │ DemoRequestService │      │   ContactService   │     │
//! │   └─────┬────────┬─────┘      └──────────┬─────────┘     │
//! │         │        │                       │               │
//! │   ┌─────▼────┐ ┌─▼───────────────────────▼───────────┐   │
//! │   │ Airtable │ │               Resend                │   │
//! │   └──────────┘ └─────────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod models;
pub mod routes;

use axum::routing::{get, post};
use axum::{Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use qrecords_leads::application::RedirectData;
use qrecords_leads::domain::services::ComposeError;
use qrecords_leads::infrastructure::HttpClient;
use qrecords_leads::{
    AirtableClient, ContactService, ContactUseCases, DemoRequestService, DemoRequestUseCases,
    EmailGateway, FieldErrors, LeadRecordGateway, LeadsConfig, NotificationComposer, OperatorSettings,
    RawContactMessage, RawLeadSubmission, ResendClient, SubmissionOutcome,
};

pub use error::ApiError;
pub use models::*;

/// API state
#[derive(Clone)]
pub struct ApiState {
    pub demo_requests: Arc<dyn DemoRequestUseCases>,
    pub contact: Arc<dyn ContactUseCases>,
    /// Prometheus handle; `/metrics` answers 503 without one
    pub metrics: Option<PrometheusHandle>,
    /// Required configuration keys that were unset at startup
    pub missing_config: Vec<&'static str>,
    pub version: String,
}

impl ApiState {
    pub fn new(demo_requests: Arc<dyn DemoRequestUseCases>, contact: Arc<dyn ContactUseCases>) -> Self {
        Self {
            demo_requests,
            contact,
            metrics: None,
            missing_config: Vec::new(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }

    /// Wire the Airtable and Resend adapters from configuration.
    pub fn from_config(config: &LeadsConfig) -> Result<Self, ComposeError> {
        let composer = Arc::new(NotificationComposer::new(OperatorSettings {
            admin_email: config.resend.admin_email.clone(),
            site_url: config.app.url.clone(),
        })?);

        let http = HttpClient::new();
        let crm: Arc<dyn LeadRecordGateway> = Arc::new(AirtableClient::with_client(config.airtable.clone(), http.clone()));
        let mailer: Arc<dyn EmailGateway> = Arc::new(ResendClient::with_client(config.resend.clone(), http));

        let mut state = Self::new(
            Arc::new(DemoRequestService::new(crm, mailer.clone(), composer.clone())),
            Arc::new(ContactService::new(mailer, composer)),
        );
        state.missing_config = config.missing_required();
        Ok(state)
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Q-Records Store Manager API",
        version = "0.1.0",
        description = "Demo request and contact forms of the Q-Records Store Manager site",
        license(name = "Apache-2.0")
    ),
    paths(
        routes::health::health_check,
        routes::demo_requests::submit_demo_request,
        routes::contact::submit_contact_message,
        routes::catalog::list_catalog_sizes,
        routes::catalog::list_form_steps,
    ),
    components(
        schemas(
            RawLeadSubmission, RawContactMessage,
            SubmissionOutcome, RedirectData, FieldErrors,
            CatalogSizeOption, FormStepInfo, ErrorResponse,
            routes::health::HealthResponse, routes::health::HealthStatus
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "forms", description = "Demo request and contact forms")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the API router
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/metrics", get(routes::metrics::render_metrics))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(Arc::new(state))
}

fn api_routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/demo-requests", post(routes::demo_requests::submit_demo_request))
        .route("/contact", post(routes::contact::submit_contact_message))
        .route("/catalog-sizes", get(routes::catalog::list_catalog_sizes))
        .route("/form-steps", get(routes::catalog::list_form_steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use qrecords_leads::domain::services::NotificationKind;
    use qrecords_leads::infrastructure::{InMemoryLeadRecords, InMemoryMailer};
    use serde_json::{json, Value};

    struct Fixture {
        server: TestServer,
        crm: Arc<InMemoryLeadRecords>,
        mailer: Arc<InMemoryMailer>,
    }

    fn state(crm: Arc<InMemoryLeadRecords>, mailer: Arc<InMemoryMailer>) -> ApiState {
        let composer = Arc::new(
            NotificationComposer::new(OperatorSettings {
                admin_email: "info@q-records-storemanager.de".into(),
                site_url: "https://q-records-storemanager.de".into(),
            })
            .unwrap(),
        );
        ApiState::new(
            Arc::new(DemoRequestService::new(crm, mailer.clone(), composer.clone())),
            Arc::new(ContactService::new(mailer, composer)),
        )
    }

    fn fixture() -> Fixture {
        let crm = Arc::new(InMemoryLeadRecords::new());
        let mailer = Arc::new(InMemoryMailer::new());
        let server = TestServer::new(build_router(state(crm.clone(), mailer.clone()))).unwrap();
        Fixture { server, crm, mailer }
    }

    fn demo_request() -> Value {
        json!({
            "firstName": "Max",
            "lastName": "Mustermann",
            "email": "max@laden.de",
            "storeName": "Vinyl Dreams",
            "storeCity": "Berlin",
            "catalogSize": "1000_5000",
            "gdprConsent": true
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = fixture().server.get("/health").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ready");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["missingConfig"], json!([]));
    }

    #[tokio::test]
    async fn test_health_reports_missing_config() {
        let config = LeadsConfig::from_lookup(|key| (key == "AIRTABLE_API_KEY").then(|| "key".to_string()));
        let server = TestServer::new(build_router(ApiState::from_config(&config).unwrap())).unwrap();

        let response = server.get("/health").await;
        response.assert_status_ok();
        response.assert_json(&json!({
            "status": "degraded",
            "version": env!("CARGO_PKG_VERSION"),
            "missingConfig": ["AIRTABLE_BASE_ID", "RESEND_API_KEY"]
        }));
    }

    #[tokio::test]
    async fn test_demo_request_success() {
        let fx = fixture();
        let response = fx.server.post("/api/demo-requests").json(&demo_request()).await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "success": true,
            "message": "Demo-Anfrage erfolgreich gesendet",
            "data": {"redirectUrl": "/success"}
        }));
        assert_eq!(fx.crm.records().len(), 1);
        assert_eq!(fx.mailer.sent().len(), 2);
    }

    #[tokio::test]
    async fn test_demo_request_validation_error() {
        let fx = fixture();
        let mut body = demo_request();
        body["gdprConsent"] = json!(false);
        let response = fx.server.post("/api/demo-requests").json(&body).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        response.assert_json(&json!({
            "success": false,
            "message": "Validierungsfehler",
            "errors": {"gdprConsent": ["Bitte stimmen Sie der Datenschutzerklärung zu"]}
        }));
        assert!(fx.crm.records().is_empty());
        assert!(fx.mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_demo_request_dispatch_failure() {
        let fx = fixture();
        fx.mailer.fail_on(NotificationKind::UserConfirmation);
        let response = fx.server.post("/api/demo-requests").json(&demo_request()).await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "Es ist ein Fehler aufgetreten. Bitte versuchen Sie es später erneut oder kontaktieren Sie uns direkt."
        );
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let fx = fixture();
        let response = fx.server.post("/api/demo-requests").json(&json!("not a form")).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({
            "code": "malformed_body",
            "message": "Die Anfrage konnte nicht gelesen werden"
        }));

        let response = fx.server.post("/api/contact").text("email=max@laden.de").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(fx.mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_field_types_are_validation_errors() {
        let fx = fixture();
        let mut body = demo_request();
        body["gdprConsent"] = json!("true");
        body["email"] = json!("not-an-email");
        body["phone"] = json!(4930123456u64);
        let response = fx.server.post("/api/demo-requests").json(&body).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        response.assert_json(&json!({
            "success": false,
            "message": "Validierungsfehler",
            "errors": {
                "email": ["Bitte geben Sie eine gültige E-Mail-Adresse ein"],
                "gdprConsent": ["Bitte stimmen Sie der Datenschutzerklärung zu"],
                "phone": ["Bitte geben Sie eine gültige deutsche Telefonnummer ein"]
            }
        }));
        assert!(fx.crm.records().is_empty());
        assert!(fx.mailer.sent().is_empty());

        let response = fx
            .server
            .post("/api/contact")
            .json(&json!({"email": false, "subject": "Frage zum Import", "message": 12}))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["errors"]["email"], json!(["Bitte geben Sie eine gültige E-Mail-Adresse ein"]));
        assert_eq!(body["errors"]["message"], json!(["Nachricht muss ein Text sein"]));
    }

    #[tokio::test]
    async fn test_contact() {
        let fx = fixture();
        let response = fx
            .server
            .post("/api/contact")
            .json(&json!({
                "email": "anna@plattenbar.de",
                "subject": "Frage zum Import",
                "message": "Kann ich meine Discogs-Liste importieren?"
            }))
            .await;
        response.assert_status_ok();
        assert_eq!(fx.mailer.sent()[0].subject, "[Kontakt] Frage zum Import");

        let response = fx.server.post("/api/contact").json(&json!({"email": "anna"})).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert!(body["errors"]["subject"].is_array());
    }

    #[tokio::test]
    async fn test_catalog_sizes() {
        let response = fixture().server.get("/api/catalog-sizes").await;
        response.assert_status_ok();
        response.assert_json(&json!([
            {"value": "under_1000", "label": "Unter 1.000 Artikel"},
            {"value": "1000_5000", "label": "1.000 - 5.000 Artikel"},
            {"value": "5000_20000", "label": "5.000 - 20.000 Artikel"},
            {"value": "over_20000", "label": "Über 20.000 Artikel"}
        ]));
    }

    #[tokio::test]
    async fn test_form_steps() {
        let response = fixture().server.get("/api/form-steps").await;
        response.assert_status_ok();
        let steps: Vec<FormStepInfo> = response.json();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].title, "Kontakt");
        assert_eq!(steps[0].fields, vec!["firstName", "lastName", "email", "phone"]);
        assert_eq!(steps[2].fields, vec!["currentSystem", "message", "gdprConsent"]);
    }

    #[tokio::test]
    async fn test_metrics() {
        let fx = fixture();
        fx.server.get("/metrics").await.assert_status(StatusCode::SERVICE_UNAVAILABLE);

        let handle = PrometheusBuilder::new().build_recorder().handle();
        let crm = Arc::new(InMemoryLeadRecords::new());
        let mailer = Arc::new(InMemoryMailer::new());
        let server = TestServer::new(build_router(state(crm, mailer).with_metrics(handle))).unwrap();
        server.get("/metrics").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_openapi_document() {
        let response = fixture().server.get("/api-docs/openapi.json").await;
        response.assert_status_ok();
        let doc: Value = response.json();
        assert!(doc["paths"]["/api/demo-requests"]["post"].is_object());
        assert!(doc["components"]["schemas"]["SubmissionOutcome"].is_object());
    }
}
