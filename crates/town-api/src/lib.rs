//! # town-api
//!
//! Invocation handlers for the identity, administration and forum
//! subsystems, and the Axum server that hosts them.

pub mod actions;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use extractors::FunctionEvent;
pub use response::{Envelope, HandlerError};
pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
