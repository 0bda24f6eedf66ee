//! # town-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `town-core`. It handles:
//!
//! - Connection pool management and the schema fixture
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use town_db::{create_pool, PgUserRepository, PoolConfig};
//! use town_core::UserRepository;
//!
//! async fn example(url: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::new(url)).await?;
//!     let users = PgUserRepository::new(pool);
//!     let alice = users.find_by_id(1).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, install_schema, ping, PgPool, PoolConfig, SCHEMA_SQL};
pub use repositories::{
    PgAdminCodeRepository, PgCommentRepository, PgFactionRepository, PgPostRepository,
    PgRoleRepository, PgUserRepository,
};
