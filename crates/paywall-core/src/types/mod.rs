//! Core types used across the paywall kit.

mod common;
mod customer;
mod offering;

pub use common::*;
pub use customer::*;
pub use offering::*;
