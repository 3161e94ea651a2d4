//! Data models module
//!
//! This module contains the inbound event types, outbound message types and
//! the static catalogs used to render the wizard.

pub mod catalog;
pub mod event;
pub mod message;
pub mod texts;

pub use catalog::{OptionItem, COUNTRIES, PROFILES, LEVELS};
pub use event::{ViberEvent, ViberUser, InboundMessage};
pub use message::{Button, Keyboard, MessageContent, OutboundMessage};
