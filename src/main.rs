//! CareerBuddy Viber Bot
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use tracing::{info, warn, error};

use CareerBuddy::{
    config::Settings,
    utils::logging,
    server::{build_app, AppContext},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration; an optional first argument names the config file
    let config_path = std::env::args().nth(1);
    let settings = Settings::load(config_path.as_deref()).context("Failed to load configuration")?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", CareerBuddy::info());

    let ctx = Arc::new(AppContext::from_settings(settings.clone())?);

    let app = build_app(ctx.clone());
    let address = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    if let Some(webhook_url) = &settings.bot.webhook_url {
        // Viber calls back the webhook during registration, so the
        // listener must be bound first.
        let viber = ctx.services.viber_service.clone();
        let webhook_url = webhook_url.clone();
        tokio::spawn(async move {
            if let Err(e) = viber.set_webhook(&webhook_url).await {
                error!(url = %webhook_url, error = %e, "Failed to register webhook");
            }
        });
    } else {
        warn!("No webhook URL configured, expecting it to be registered externally");
    }

    info!(address = %address, path = %settings.server.path, "CareerBuddy bot is ready!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("CareerBuddy bot has been shut down.");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
