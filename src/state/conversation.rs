//! Conversation state carried by the client
//!
//! The bot keeps no sessions. The filters collected so far travel with every
//! outbound message as `tracking_data` and come back with the user's next
//! message, so each request is handled from the blob alone.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Filters selected so far in the vacancy search wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl ConversationState {
    /// Restore state from an echoed blob.
    ///
    /// A missing, empty or unparsable blob yields an empty state.
    pub fn from_blob(blob: Option<&str>) -> Self {
        let blob = match blob.map(str::trim) {
            Some(blob) if !blob.is_empty() => blob,
            _ => {
                debug!("No tracking data, starting from empty state");
                return Self::default();
            }
        };

        match serde_json::from_str(blob) {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, blob = blob, "Unparsable tracking data, starting from empty state");
                Self::default()
            }
        }
    }

    /// Serialize for the `tracking_data` slot; an empty state is `{}`
    pub fn to_blob(&self) -> String {
        // Only optional strings, serialization cannot fail.
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.profile.is_none() && self.level.is_none()
    }

    /// Directory query parameters for the fields that are set
    pub fn query_params(&self) -> Vec<(&'static str, &str)> {
        [
            ("country", self.country.as_deref()),
            ("profile", self.profile.as_deref()),
            ("level", self.level.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}
