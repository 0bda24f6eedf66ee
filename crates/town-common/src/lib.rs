//! # town-common
//!
//! Shared utilities including configuration, error handling, credentials, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{generate_token, hash_password, PasswordService, TOKEN_BYTES};
pub use config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, ServerConfig,
    DEFAULT_SUPER_ADMIN,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
