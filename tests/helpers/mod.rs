//! Test helpers module
//!
//! Mock servers for the Viber API and the vacancy directory, payload builders
//! and a context that drives the webhook router.

#![allow(dead_code)]

pub mod test_context;
pub mod test_data;
pub mod vacancies_mock;
pub mod viber_mock;

pub use test_context::*;
pub use test_data::*;
pub use vacancies_mock::*;
pub use viber_mock::*;
