//! PostgreSQL implementation of FactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use town_core::{Faction, FactionRepository, FactionWithGeneral, RepoResult};

use crate::models::{FactionModel, FactionWithGeneralModel};

use super::error::map_db_error;

/// PostgreSQL implementation of FactionRepository
#[derive(Clone)]
pub struct PgFactionRepository {
    pool: PgPool,
}

impl PgFactionRepository {
    /// Create a new PgFactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FactionRepository for PgFactionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Faction>> {
        let result = sqlx::query_as::<_, FactionModel>(
            r"
            SELECT id, name, description, type, color, general_user_id
            FROM factions
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Faction::from))
    }

    #[instrument(skip(self))]
    async fn list_with_generals(&self) -> RepoResult<Vec<FactionWithGeneral>> {
        let results = sqlx::query_as::<_, FactionWithGeneralModel>(
            r"
            SELECT f.id, f.name, f.description, f.type, f.color, f.general_user_id,
                   u.username AS general_name
            FROM factions f
            LEFT JOIN users u ON f.general_user_id = u.id
            ORDER BY
                CASE f.type
                    WHEN 'открытая' THEN 1
                    WHEN 'закрытая' THEN 2
                    WHEN 'криминальная' THEN 3
                    ELSE 1
                END,
                f.name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(FactionWithGeneral::from).collect())
    }
}
