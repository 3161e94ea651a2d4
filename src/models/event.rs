//! Inbound Viber callback events
//!
//! Every callback posted to the webhook carries an `event` field naming its
//! kind; the remaining fields depend on that kind. Unknown fields are ignored
//! so newer Viber payloads keep parsing.

use serde::Deserialize;

/// Viber user as it appears in `sender` / `user` objects
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ViberUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Message body of a `message` event
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InboundMessage {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
    /// Conversation state blob echoed back by the client
    #[serde(default)]
    pub tracking_data: Option<String>,
}

/// A parsed webhook callback
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ViberEvent {
    Message {
        sender: ViberUser,
        message: InboundMessage,
        #[serde(default)]
        message_token: Option<u64>,
    },
    Subscribed {
        user: ViberUser,
    },
    Unsubscribed {
        user_id: String,
    },
    ConversationStarted {
        user: ViberUser,
        #[serde(default)]
        context: Option<String>,
    },
    Failed {
        user_id: String,
        #[serde(default)]
        message_token: Option<u64>,
        #[serde(default)]
        desc: Option<String>,
    },
    Delivered {
        user_id: String,
    },
    Seen {
        user_id: String,
    },
    /// Sent once by Viber when the webhook is registered
    Webhook,
    #[serde(other)]
    Unknown,
}

impl ViberEvent {
    /// Parse a raw webhook body
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// Event name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            ViberEvent::Message { .. } => "message",
            ViberEvent::Subscribed { .. } => "subscribed",
            ViberEvent::Unsubscribed { .. } => "unsubscribed",
            ViberEvent::ConversationStarted { .. } => "conversation_started",
            ViberEvent::Failed { .. } => "failed",
            ViberEvent::Delivered { .. } => "delivered",
            ViberEvent::Seen { .. } => "seen",
            ViberEvent::Webhook => "webhook",
            ViberEvent::Unknown => "unknown",
        }
    }
}
