//! PostgreSQL connection pool management

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

use town_common::DatabaseConfig;

/// Table definitions used by the repositories (idempotent)
pub const SCHEMA_SQL: &str = include_str!("../../migrations/0001_schema.sql");

/// Settings for the connection pool
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// PostgreSQL connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
    /// Maximum idle time before a connection is closed
    pub idle_timeout: Duration,
}

impl PoolConfig {
    /// Pool settings with defaults for everything but the URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 5,
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
        }
    }
}

impl From<&DatabaseConfig> for PoolConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            max_connections: config.max_connections,
            min_connections: config.min_connections.min(config.max_connections),
            ..Self::new(config.url.clone())
        }
    }
}

/// Create a new PostgreSQL connection pool
pub async fn create_pool(config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .connect(&config.url)
        .await
}

/// Advisory lock key held while the schema is installed
const SCHEMA_LOCK_KEY: i64 = 0x746f_776e;

/// Create any missing tables and indexes
///
/// Concurrent callers are serialized on a transaction-scoped advisory lock.
#[instrument(skip(pool))]
pub async fn install_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;
    sqlx::raw_sql(SCHEMA_SQL).execute(&mut *tx).await?;
    tx.commit().await?;
    info!("Schema installed");
    Ok(())
}

/// Round-trip a trivial query to check the store is reachable
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_config_from_app_config() {
        let config = PoolConfig::from(&DatabaseConfig {
            url: "postgres://localhost/town".to_string(),
            max_connections: 4,
            min_connections: 10,
        });
        assert_eq!(config.max_connections, 4);
        // Minimum never exceeds maximum
        assert_eq!(config.min_connections, 4);
        assert_eq!(config.acquire_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_schema_covers_all_tables() {
        for table in [
            "users",
            "admin_codes",
            "roles",
            "user_roles",
            "factions",
            "forum_posts",
            "forum_comments",
        ] {
            assert!(
                SCHEMA_SQL.contains(&format!("CREATE TABLE IF NOT EXISTS {table} ")),
                "missing table {table}"
            );
        }
    }
}
