//! Middleware module
//!
//! Request layers applied in front of the webhook handler.

pub mod signature;

pub use signature::verify_signature;
