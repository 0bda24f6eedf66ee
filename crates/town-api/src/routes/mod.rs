//! Route definitions
//!
//! One catch-all route per subsystem plus the health probes.

use axum::{
    routing::{any, get},
    Router,
};

use crate::handlers::{admin, forum, health, identity};
use crate::state::AppState;

/// Create the main router with the three subsystem endpoints
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/auth", any(identity::endpoint))
        .route("/admin", any(admin::endpoint))
        .route("/forum", any(forum::endpoint))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
