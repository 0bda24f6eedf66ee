//! PostgreSQL implementation of AdminCodeRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use town_core::{AdminCode, AdminCodeRepository, RepoResult};

use crate::models::AdminCodeModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AdminCodeRepository
#[derive(Clone)]
pub struct PgAdminCodeRepository {
    pool: PgPool,
}

impl PgAdminCodeRepository {
    /// Create a new PgAdminCodeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminCodeRepository for PgAdminCodeRepository {
    #[instrument(skip(self, code))]
    async fn find_valid(&self, code: &str, today: NaiveDate) -> RepoResult<Option<AdminCode>> {
        let result = sqlx::query_as::<_, AdminCodeModel>(
            r"
            SELECT code, valid_date
            FROM admin_codes
            WHERE code = $1 AND valid_date >= $2
            ",
        )
        .bind(code)
        .bind(today)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(AdminCode::from))
    }
}
