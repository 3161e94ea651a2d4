//! Test context for unified test setup
//!
//! Wires the router to mock Viber and vacancy servers and signs requests the
//! way Viber does.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use CareerBuddy::config::Settings;
use CareerBuddy::server::{build_app, AppContext};

use super::test_data::TEST_AUTH_TOKEN;
use super::vacancies_mock::VacanciesMockServer;
use super::viber_mock::ViberMockServer;

/// Configuration for test context creation
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Mount a `send_message` mock that accepts every delivery
    pub accept_deliveries: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self { accept_deliveries: true }
    }
}

pub struct TestContext {
    pub viber: ViberMockServer,
    pub vacancies: VacanciesMockServer,
    pub settings: Settings,
    pub app_context: Arc<AppContext>,
    pub app: Router,
}

impl TestContext {
    /// Start mock servers and build the app with Viber deliveries accepted
    pub async fn new() -> Self {
        Self::new_with_config(TestConfig::default()).await
    }

    pub async fn new_with_config(config: TestConfig) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();

        let viber = ViberMockServer::new().await;
        if config.accept_deliveries {
            viber.mock_send_message(TEST_AUTH_TOKEN).await;
        }
        let vacancies = VacanciesMockServer::new().await;

        let mut settings = Settings::default();
        settings.bot.auth_token = TEST_AUTH_TOKEN.to_string();
        settings.bot.api_url = viber.api_url();
        settings.vacancies.api_url = vacancies.api_url();
        settings.vacancies.timeout_seconds = Some(5);

        let app_context = Arc::new(
            AppContext::from_settings(settings.clone()).expect("Failed to build app context"),
        );
        let app = build_app(app_context.clone());

        Self { viber, vacancies, settings, app_context, app }
    }

    /// Signature Viber would send for `body`
    pub fn sign(&self, body: &[u8]) -> String {
        self.app_context
            .services
            .viber_service
            .sign(body)
            .expect("Failed to sign body")
    }

    /// POST a raw body with an explicit signature header (or none)
    pub async fn post_raw(&self, body: Vec<u8>, signature: Option<&str>) -> StatusCode {
        let mut request = Request::builder()
            .method("POST")
            .uri(self.settings.server.path.as_str())
            .header("content-type", "application/json");
        if let Some(signature) = signature {
            request = request.header("X-Viber-Content-Signature", signature);
        }

        let response = self.app
            .clone()
            .oneshot(request.body(Body::from(body)).expect("Failed to build request"))
            .await
            .expect("Router is infallible");

        response.status()
    }

    /// POST a correctly signed callback
    pub async fn post_event(&self, event: &Value) -> StatusCode {
        let body = serde_json::to_vec(event).expect("Failed to serialize event");
        let signature = self.sign(&body);
        self.post_raw(body, Some(&signature)).await
    }
}
