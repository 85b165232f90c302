//! Paywall core library.
//!
//! This library provides the shared data model and error taxonomy for the paywall kit.

pub mod errors;
pub mod types;
