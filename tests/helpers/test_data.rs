//! Test data helpers for building Viber callback payloads

use serde_json::{json, Value};

pub const TEST_AUTH_TOKEN: &str = "4453b6ac12345678-e02c5f12174805f9-daec9cbb5448c51f";

pub const TEST_USER_ID: &str = "01234567890A=";

/// A `message` callback carrying `text` and, optionally, echoed tracking data
pub fn message_event(user_id: &str, text: &str, tracking_data: Option<&str>) -> Value {
    let mut message = json!({ "type": "text", "text": text });
    if let Some(tracking_data) = tracking_data {
        message["tracking_data"] = json!(tracking_data);
    }

    json!({
        "event": "message",
        "timestamp": 1457764197627u64,
        "message_token": 4912661846655238145u64,
        "sender": {
            "id": user_id,
            "name": "John McClane",
            "avatar": "http://avatar.example.com",
            "country": "UK",
            "language": "en",
            "api_version": 1
        },
        "message": message
    })
}

pub fn conversation_started_event(user_id: &str) -> Value {
    json!({
        "event": "conversation_started",
        "timestamp": 1457764197627u64,
        "message_token": 4912661846655238145u64,
        "type": "open",
        "context": "context information",
        "user": {
            "id": user_id,
            "name": "John McClane",
            "language": "en",
            "country": "UK",
            "api_version": 1
        },
        "subscribed": false
    })
}

pub fn subscribed_event(user_id: &str) -> Value {
    json!({
        "event": "subscribed",
        "timestamp": 1457764197627u64,
        "message_token": 4912661846655238145u64,
        "user": { "id": user_id, "name": "John McClane", "api_version": 1 }
    })
}

pub fn failed_event(user_id: &str) -> Value {
    json!({
        "event": "failed",
        "timestamp": 1457764197627u64,
        "message_token": 4912661846655238145u64,
        "user_id": user_id,
        "desc": "failure description"
    })
}

pub fn webhook_event() -> Value {
    json!({
        "event": "webhook",
        "timestamp": 1457764197627u64,
        "message_token": 241256543215u64
    })
}
