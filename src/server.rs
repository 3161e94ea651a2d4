//! HTTP server setup

use std::sync::Arc;

use axum::middleware;
use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::handlers::{handle_webhook, DialogController};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Shared state of the webhook server
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub services: ServiceFactory,
    pub dialog: DialogController,
}

impl AppContext {
    pub fn new(settings: Settings, services: ServiceFactory) -> Self {
        let dialog = DialogController::new(services.vacancy_service.clone());
        Self { settings, services, dialog }
    }

    /// Build all services from settings
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let services = ServiceFactory::new(&settings)?;
        Ok(Self::new(settings, services))
    }
}

/// Build the webhook router
pub fn build_app(ctx: Arc<AppContext>) -> Router {
    let path = ctx.settings.server.path.clone();

    Router::new()
        .route(&path, post(handle_webhook))
        .route_layer(middleware::from_fn_with_state(ctx.clone(), crate::middleware::verify_signature))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
