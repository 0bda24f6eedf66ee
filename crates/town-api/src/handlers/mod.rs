//! Subsystem handlers
//!
//! Each subsystem exposes `handle(ctx, event) -> Envelope` plus an axum
//! `endpoint` that feeds it from an HTTP request.

pub mod admin;
pub mod forum;
pub mod health;
pub mod identity;
