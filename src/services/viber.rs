//! Viber messaging gateway
//!
//! Verifies callback signatures and talks to the Viber REST API: message
//! delivery and webhook registration.

use hmac::{Hmac, Mac};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use tracing::{info, debug};
use crate::config::settings::BotConfig;
use crate::models::message::OutboundMessage;
use crate::utils::errors::{CareerBuddyError, ViberError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the hex HMAC-SHA256 of the callback body
pub const SIGNATURE_HEADER: &str = "X-Viber-Content-Signature";

/// Header authenticating requests to the Viber REST API
pub const AUTH_TOKEN_HEADER: &str = "X-Viber-Auth-Token";

/// Callback kinds requested when registering the webhook
pub const WEBHOOK_EVENT_TYPES: &[&str] = &[
    "delivered",
    "seen",
    "failed",
    "subscribed",
    "unsubscribed",
    "conversation_started",
];

/// Bot identity shown with every message
#[derive(Debug, Clone, Serialize)]
pub struct Sender {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    receiver: &'a str,
    min_api_version: u32,
    sender: &'a Sender,
    #[serde(flatten)]
    message: &'a OutboundMessage,
}

#[derive(Debug, Serialize)]
struct SetWebhookRequest<'a> {
    url: &'a str,
    event_types: &'a [&'a str],
}

/// Common envelope of Viber REST API responses
#[derive(Debug, Clone, Deserialize)]
pub struct ViberResponse {
    pub status: i64,
    #[serde(default)]
    pub status_message: String,
    #[serde(default)]
    pub message_token: Option<u64>,
}

/// Viber REST API client
#[derive(Debug, Clone)]
pub struct ViberService {
    client: Client,
    api_url: String,
    auth_token: String,
    sender: Sender,
    min_api_version: u32,
}

impl ViberService {
    /// Create a new ViberService instance
    pub fn new(config: &BotConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent("CareerBuddy-Bot/1.0")
            .build()
            .map_err(CareerBuddyError::Http)?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
            sender: Sender {
                name: config.name.clone(),
                avatar: config.avatar.clone(),
            },
            min_api_version: config.min_api_version,
        })
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(self.auth_token.as_bytes())
            .map_err(|e| CareerBuddyError::Config(format!("Invalid auth token key: {}", e)))
    }

    /// Hex signature Viber would attach to `body`
    pub fn sign(&self, body: &[u8]) -> Result<String> {
        let mut mac = self.mac()?;
        mac.update(body);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Check a callback signature in constant time
    pub fn verify_signature(&self, body: &[u8], signature: &str) -> bool {
        let expected = match hex::decode(signature.trim()) {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };

        let mut mac = match self.mac() {
            Ok(mac) => mac,
            Err(_) => return false,
        };
        mac.update(body);
        mac.verify_slice(&expected).is_ok()
    }

    /// Deliver messages to a user in order, returning their message tokens.
    ///
    /// Stops at the first failed delivery.
    pub async fn send_messages(&self, receiver: &str, messages: &[OutboundMessage]) -> Result<Vec<u64>> {
        let mut tokens = Vec::with_capacity(messages.len());
        for message in messages {
            let response = self.send_message(receiver, message).await?;
            tokens.extend(response.message_token);
        }
        Ok(tokens)
    }

    /// Deliver a single message
    pub async fn send_message(&self, receiver: &str, message: &OutboundMessage) -> Result<ViberResponse> {
        let request = SendMessageRequest {
            receiver,
            min_api_version: self.min_api_version,
            sender: &self.sender,
            message,
        };

        debug!(receiver = receiver, "Sending Viber message");
        self.post("send_message", &request).await
    }

    /// Register `url` as the bot webhook
    pub async fn set_webhook(&self, url: &str) -> Result<ViberResponse> {
        let request = SetWebhookRequest {
            url,
            event_types: WEBHOOK_EVENT_TYPES,
        };

        let response = self.post("set_webhook", &request).await?;
        info!(url = url, "Viber webhook registered");
        Ok(response)
    }

    async fn post<T: Serialize + ?Sized>(&self, method: &str, body: &T) -> Result<ViberResponse> {
        let url = format!("{}/{}", self.api_url, method);

        let response = self.client
            .post(&url)
            .header(AUTH_TOKEN_HEADER, &self.auth_token)
            .json(body)
            .send()
            .await
            .map_err(|e| ViberError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ViberError::RequestFailed(format!("HTTP {}: {}", status, error_text)).into());
        }

        let body: ViberResponse = response.json().await
            .map_err(|e| ViberError::InvalidResponse(e.to_string()))?;

        if body.status != 0 {
            return Err(ViberError::ApiStatus {
                status: body.status,
                message: body.status_message,
            }
            .into());
        }

        Ok(body)
    }
}
