//! Integration test utilities for the Russian Town backend
//!
//! This crate provides helpers for running end-to-end tests against the
//! `/auth`, `/admin` and `/forum` endpoints of a spawned server.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
