//! Bot handlers module
//!
//! - `webhook`: the HTTP endpoint Viber posts callbacks to
//! - `dialog`: the vacancy search dialog driven by those callbacks

pub mod dialog;
pub mod webhook;

pub use dialog::{DialogController, Reply};
pub use webhook::handle_webhook;
