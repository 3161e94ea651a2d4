//! CareerBuddy Viber Bot
//!
//! A Viber bot that walks candidates through a short vacancy search
//! (country, profile, experience level) and replies with matching vacancy
//! links from the careers directory. Conversation state travels with the
//! messages, so the bot keeps no sessions.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod state;
pub mod utils;
pub mod middleware;
pub mod server;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CareerBuddyError, Result};

// Re-export main components for easy access
pub use handlers::DialogController;
pub use server::{build_app, AppContext};
pub use services::ServiceFactory;
pub use state::ConversationState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
