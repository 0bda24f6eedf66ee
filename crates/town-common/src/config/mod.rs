//! Configuration structs

mod app_config;

pub use app_config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, ServerConfig,
    DEFAULT_SUPER_ADMIN,
};
