//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;
use crate::utils::errors::{CareerBuddyError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_server_config(&settings.server)?;
    validate_vacancies_config(&settings.vacancies)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.auth_token.is_empty() {
        return Err(CareerBuddyError::Config(
            "Bot auth token is required".to_string()
        ));
    }

    if config.name.is_empty() {
        return Err(CareerBuddyError::Config(
            "Bot sender name is required".to_string()
        ));
    }

    Url::parse(&config.api_url)?;

    if let Some(ref webhook_url) = config.webhook_url {
        let parsed = Url::parse(webhook_url)?;
        if parsed.scheme() != "https" {
            return Err(CareerBuddyError::Config(
                "Webhook URL must use https".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate webhook listener configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.port == 0 {
        return Err(CareerBuddyError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    if !config.path.starts_with('/') {
        return Err(CareerBuddyError::Config(
            format!("Webhook path must start with '/': {}", config.path)
        ));
    }

    Ok(())
}

/// Validate vacancy directory configuration
fn validate_vacancies_config(config: &super::VacanciesConfig) -> Result<()> {
    Url::parse(&config.api_url)?;

    if config.timeout_seconds == Some(0) {
        return Err(CareerBuddyError::Config(
            "Vacancy timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CareerBuddyError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(CareerBuddyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
