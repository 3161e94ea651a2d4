//! Conversation state management
//!
//! State lives on the client: it is echoed back with every message and
//! advanced here one action at a time.

pub mod conversation;
pub mod wizard;

pub use conversation::ConversationState;
pub use wizard::{advance, Action, Prompt, Step};
