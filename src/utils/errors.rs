//! Error handling for CareerBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Main error type for CareerBuddy application
#[derive(Error, Debug)]
pub enum CareerBuddyError {
    #[error("Viber API error: {0}")]
    Viber(#[from] ViberError),

    #[error("Vacancy directory error: {0}")]
    Vacancies(#[from] VacancyError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid webhook signature")]
    InvalidSignature,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Viber REST API specific errors
#[derive(Error, Debug)]
pub enum ViberError {
    #[error("Viber request failed: {0}")]
    RequestFailed(String),

    #[error("Viber API returned status {status}: {message}")]
    ApiStatus { status: i64, message: String },

    #[error("Invalid Viber response: {0}")]
    InvalidResponse(String),
}

/// Vacancy directory specific errors
#[derive(Error, Debug)]
pub enum VacancyError {
    #[error("Vacancy request failed: {0}")]
    RequestFailed(String),

    #[error("Vacancy directory timeout")]
    Timeout,

    #[error("Invalid vacancy response: {0}")]
    InvalidResponse(String),

    #[error("Vacancy directory unavailable")]
    ServiceUnavailable,
}

/// Result type alias for CareerBuddy operations
pub type Result<T> = std::result::Result<T, CareerBuddyError>;

impl CareerBuddyError {
    /// HTTP status reported to the webhook caller
    pub fn status_code(&self) -> StatusCode {
        match self {
            CareerBuddyError::InvalidSignature => StatusCode::FORBIDDEN,
            CareerBuddyError::Serialization(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CareerBuddyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Webhook request failed");
        } else {
            tracing::warn!(error = %self, status = %status, "Webhook request rejected");
        }
        status.into_response()
    }
}
