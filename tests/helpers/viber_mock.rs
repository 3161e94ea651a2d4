//! Mock Viber REST API server for testing
//!
//! Accepts `send_message` and `set_webhook` calls and lets tests inspect the
//! messages the bot delivered.

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub struct ViberMockServer {
    pub server: MockServer,
}

impl ViberMockServer {
    pub async fn new() -> Self {
        Self { server: MockServer::start().await }
    }

    /// Base URL to configure as `bot.api_url`
    pub fn api_url(&self) -> String {
        self.server.uri()
    }

    /// Accept every `send_message` call authenticated with `auth_token`
    pub async fn mock_send_message(&self, auth_token: &str) {
        Mock::given(method("POST"))
            .and(path("/send_message"))
            .and(header("X-Viber-Auth-Token", auth_token))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 0,
                "status_message": "ok",
                "message_token": 5098034272017990000u64
            })))
            .mount(&self.server)
            .await;
    }

    /// Answer `send_message` with a Viber error status
    pub async fn mock_send_message_failure(&self, status: i64, status_message: &str) {
        Mock::given(method("POST"))
            .and(path("/send_message"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": status,
                "status_message": status_message
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_set_webhook(&self) {
        Mock::given(method("POST"))
            .and(path("/set_webhook"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 0,
                "status_message": "ok",
                "event_types": ["delivered", "seen", "failed", "subscribed", "unsubscribed", "conversation_started"]
            })))
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of all requests sent to `endpoint`, in order
    pub async fn requests_to(&self, endpoint: &str) -> Vec<Value> {
        let target = format!("/{}", endpoint);
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == target)
            .map(|request| serde_json::from_slice(&request.body).expect("request body is JSON"))
            .collect()
    }

    /// Messages delivered through `send_message`, in order
    pub async fn sent_messages(&self) -> Vec<Value> {
        self.requests_to("send_message").await
    }
}
