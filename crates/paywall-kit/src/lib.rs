//! # Paywall Kit
//!
//! Paywall Kit is a modular, framework-agnostic SDK for building subscription
//! paywall screens on top of hosted billing providers.
//!
//! The kit is **not a billing provider** — it is the seam between one
//! (anything implementing [`billing::BillingClient`]) and the screens that
//! sell subscriptions. Payment processing, receipt validation, and
//! entitlement computation stay on the provider's side.
//!
//! ## Core Components Overview
//!
//! - **[`billing`]**: The billing client interface and purchase result types.
//! - **[`billing_client`]**: A remote billing client speaking the provider's
//!   REST surface (feature `billing-client`).
//! - **[`providers`]**: Context providers and the composition root that
//!   establishes them in dependency order.
//! - **[`subscription`]**: The derived "is subscribed" signal.
//! - **[`navigation`]**: The navigation seam screens redirect through.
//! - **[`mock`]**: Scripted collaborators for tests and local development.

pub mod errors {
    pub use paywall_core::errors::*;
}

pub mod types {
    pub use paywall_core::types::*;
}

pub mod billing;
pub mod mock;
pub mod navigation;
pub mod providers;
pub mod subscription;

#[cfg(feature = "billing-client")]
pub mod billing_client;
