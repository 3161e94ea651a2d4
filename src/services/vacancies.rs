//! Vacancy directory service
//!
//! Queries the careers API with the filters collected by the wizard.

use std::time::Duration;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use crate::config::settings::VacanciesConfig;
use crate::state::ConversationState;
use crate::utils::errors::{CareerBuddyError, VacancyError, Result};

/// A single record returned by the directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Vacancy {
    #[serde(default)]
    pub url: Option<String>,
}

/// Directory response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct VacancyResponse {
    #[serde(default)]
    pub results: Vec<Vacancy>,
}

/// HTTP client for the vacancy directory
#[derive(Debug, Clone)]
pub struct VacancyService {
    client: Client,
    api_url: String,
}

impl VacancyService {
    /// Create a new VacancyService instance
    pub fn new(config: &VacanciesConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent("CareerBuddy-Bot/1.0");
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let client = builder.build().map_err(CareerBuddyError::Http)?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// Fetch vacancy links matching the selected filters.
    ///
    /// Records without a `url` are skipped.
    pub async fn search(&self, state: &ConversationState) -> Result<Vec<String>> {
        let params = state.query_params();
        debug!(url = %self.api_url, params = ?params, "Querying vacancy directory");

        let response = self.client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    VacancyError::Timeout
                } else if e.is_connect() {
                    VacancyError::ServiceUnavailable
                } else {
                    VacancyError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(VacancyError::RequestFailed(format!("HTTP {}: {}", status, error_text)).into());
        }

        let body: VacancyResponse = response.json().await
            .map_err(|e| VacancyError::InvalidResponse(e.to_string()))?;

        let total = body.results.len();
        let urls: Vec<String> = body.results.into_iter().filter_map(|v| v.url).collect();
        if urls.len() < total {
            debug!(skipped = total - urls.len(), "Skipped vacancies without url");
        }

        Ok(urls)
    }
}
