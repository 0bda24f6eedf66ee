//! Test fixtures and data generators
//!
//! Rows the public endpoints cannot create (admins, codes, factions) are
//! seeded straight into the store.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::PgPool;

use town_common::hash_password;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Name that will not collide with earlier runs against the same store
pub fn unique_name(prefix: &str) -> String {
    format!(
        "{prefix}_{}_{}",
        chrono::Utc::now().timestamp_micros(),
        unique_suffix()
    )
}

/// Registration / login body
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn unique() -> Self {
        Self {
            username: unique_name("resident"),
            password: "pw1".to_string(),
        }
    }
}

/// Insert a user with an admin role tag and return its id
pub async fn seed_admin(pool: &PgPool, username: &str, admin_role: &str) -> Result<i32> {
    let id = sqlx::query_scalar(
        "INSERT INTO users (username, password_hash, admin_role) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind(hash_password("admin-pw"))
    .bind(admin_role)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Insert an admin code valid through `valid_date`
pub async fn seed_code(pool: &PgPool, code: &str, valid_date: NaiveDate) -> Result<()> {
    sqlx::query("INSERT INTO admin_codes (code, valid_date) VALUES ($1, $2)")
        .bind(code)
        .bind(valid_date)
        .execute(pool)
        .await?;
    Ok(())
}

/// Insert a faction with a stored type label and return its id
pub async fn seed_faction(pool: &PgPool, name: &str, type_label: &str) -> Result<i32> {
    let id = sqlx::query_scalar(
        "INSERT INTO factions (name, type, color) VALUES ($1, $2, '#334455') RETURNING id",
    )
    .bind(name)
    .bind(type_label)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Count users with a given username
pub async fn count_users(pool: &PgPool, username: &str) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
        .bind(username)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
