//! Webhook endpoint
//!
//! The signature has already been checked by the middleware when this
//! handler runs. Replies go out through the Viber API; the HTTP response is
//! always empty.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::{debug, error};

use crate::models::event::ViberEvent;
use crate::server::AppContext;
use crate::utils::errors::{CareerBuddyError, Result};

/// Handle a verified Viber callback
pub async fn handle_webhook(
    State(ctx): State<Arc<AppContext>>,
    body: Bytes,
) -> Result<StatusCode> {
    let event = ViberEvent::from_slice(&body).map_err(CareerBuddyError::Serialization)?;
    debug!(event = event.kind(), "Webhook event received");

    if let Some(reply) = ctx.dialog.handle_event(&event).await {
        if let Err(e) = ctx.services.viber_service.send_messages(&reply.receiver, &reply.messages).await {
            error!(receiver = %reply.receiver, error = %e, "Failed to deliver reply");
        }
    }

    Ok(StatusCode::OK)
}
