//! Signature verification middleware
//!
//! Viber signs every callback with an HMAC-SHA256 of the raw body keyed by
//! the bot auth token. Requests with a missing or wrong signature are
//! rejected before any handler sees them.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::server::AppContext;
use crate::services::viber::SIGNATURE_HEADER;
use crate::utils::errors::CareerBuddyError;

/// Largest callback body accepted
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Reject requests whose body does not match the signature header
pub async fn verify_signature(
    State(ctx): State<Arc<AppContext>>,
    request: Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();

    let signature = match parts.headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok()) {
        Some(signature) => signature.to_string(),
        None => {
            warn!("Webhook request without signature header");
            return CareerBuddyError::InvalidSignature.into_response();
        }
    };

    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            // Oversize or truncated bodies cannot be verified
            warn!(error = %e, "Unreadable webhook body");
            return CareerBuddyError::InvalidSignature.into_response();
        }
    };

    if !ctx.services.viber_service.verify_signature(&bytes, &signature) {
        return CareerBuddyError::InvalidSignature.into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
