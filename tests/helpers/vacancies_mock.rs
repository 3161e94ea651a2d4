//! Mock vacancy directory for testing

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const VACANCIES_PATH: &str = "/api/vacancies/";

pub struct VacanciesMockServer {
    pub server: MockServer,
}

impl VacanciesMockServer {
    pub async fn new() -> Self {
        Self { server: MockServer::start().await }
    }

    /// URL to configure as `vacancies.api_url`
    pub fn api_url(&self) -> String {
        format!("{}{}", self.server.uri(), VACANCIES_PATH)
    }

    /// Respond to every search with the given vacancy URLs
    pub async fn mock_results(&self, urls: &[&str]) {
        let results: Vec<Value> = urls.iter().map(|url| json!({ "url": url })).collect();
        self.mock_body(json!({ "count": results.len(), "results": results })).await;
    }

    pub async fn mock_body(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path(VACANCIES_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_status(&self, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(VACANCIES_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Query strings of the searches received, as `(key, value)` pairs
    pub async fn received_queries(&self) -> Vec<Vec<(String, String)>> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|request| request.url.query_pairs().into_owned().collect())
            .collect()
    }
}
