//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from configuration files and environment variables.

use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `CAREERBUDDY__BOT__AUTH_TOKEN`
pub const ENV_PREFIX: &str = "CAREERBUDDY";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub server: ServerConfig,
    pub vacancies: VacanciesConfig,
    pub logging: LoggingConfig,
}

/// Viber bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub auth_token: String,
    /// Sender name shown next to every outbound message
    pub name: String,
    pub avatar: Option<String>,
    pub api_url: String,
    /// Public URL registered with Viber on startup
    pub webhook_url: Option<String>,
    pub min_api_version: u32,
}

/// Webhook listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub path: String,
}

/// Vacancy directory configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VacanciesConfig {
    pub api_url: String,
    pub timeout_seconds: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily-rolling log files; stdout only when unset
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from an explicit file (or `config.*` when `None`),
    /// with environment variables taking precedence
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::with_name(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let defaults = Settings::default();
        let settings = config::Config::builder()
            .set_default("bot.auth_token", defaults.bot.auth_token)?
            .set_default("bot.name", defaults.bot.name)?
            .set_default("bot.api_url", defaults.bot.api_url)?
            .set_default("bot.min_api_version", i64::from(defaults.bot.min_api_version))?
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.path", defaults.server.path)?
            .set_default("vacancies.api_url", defaults.vacancies.api_url)?
            .set_default("logging.level", defaults.logging.level)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::CareerBuddyError> {
        super::validation::validate_settings(self)
    }

    /// Socket address the webhook listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                auth_token: String::new(),
                name: "Smyt Career's Bot".to_string(),
                avatar: None,
                api_url: "https://chatapi.viber.com/pa".to_string(),
                webhook_url: None,
                min_api_version: 1,
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8443,
                path: "/".to_string(),
            },
            vacancies: VacanciesConfig {
                api_url: "https://careers.smyt.ru/api/vacancies/".to_string(),
                timeout_seconds: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
