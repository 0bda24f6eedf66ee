//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use town_core::{
    DomainError, ProfilePatch, RepoResult, RoleBadge, User, UserListing, UserProfile,
    UserRepository,
};

use crate::mappers::profile_from_parts;
use crate::models::{RoleBadgeModel, UserListingModel, UserModel, UserProfileModel};

use super::error::{
    map_db_error, map_foreign_key_violation, map_unique_violation, user_not_found,
};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Set one of the boolean moderation flags
    async fn set_flag(&self, id: i32, sql: &'static str) -> RepoResult<()> {
        let result = sqlx::query(sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, admin_role, status, rank_level, experience, is_banned, is_muted,
                   faction_id, avatar_url, custom_status, discord_link, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, password_hash))]
    async fn find_by_credentials(
        &self,
        username: &str,
        password_hash: &str,
    ) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, admin_role, status, rank_level, experience, is_banned, is_muted,
                   faction_id, avatar_url, custom_status, discord_link, created_at, updated_at
            FROM users
            WHERE username = $1 AND password_hash = $2
            ",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<User> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // A unique violation returns early and the dropped transaction rolls back
        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, admin_role, status, rank_level, experience, is_banned, is_muted,
                      faction_id, avatar_url, custom_status, discord_link, created_at, updated_at
            ",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UsernameTaken))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(User::from(model))
    }

    #[instrument(skip(self))]
    async fn find_profile(&self, id: i32) -> RepoResult<Option<UserProfile>> {
        let Some(model) = sqlx::query_as::<_, UserProfileModel>(
            r"
            SELECT u.id, u.username, u.admin_role, u.status, u.rank_level, u.experience,
                   u.is_banned, u.is_muted, u.faction_id, u.avatar_url, u.custom_status,
                   u.discord_link, u.created_at, u.updated_at,
                   f.name AS faction_name, f.color AS faction_color
            FROM users u
            LEFT JOIN factions f ON u.faction_id = f.id
            WHERE u.id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        else {
            return Ok(None);
        };

        let badges = sqlx::query_as::<_, RoleBadgeModel>(
            r"
            SELECT r.name, r.color
            FROM roles r
            JOIN user_roles ur ON r.id = ur.role_id
            WHERE ur.user_id = $1
            ORDER BY r.is_custom, r.name
            ",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let roles = badges.into_iter().map(RoleBadge::from).collect();
        Ok(Some(profile_from_parts(model, roles)))
    }

    #[instrument(skip(self))]
    async fn update_profile(&self, id: i32, patch: &ProfilePatch) -> RepoResult<User> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users
            SET custom_status = COALESCE($2, custom_status),
                avatar_url = COALESCE($3, avatar_url),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, username, admin_role, status, rank_level, experience, is_banned, is_muted,
                      faction_id, avatar_url, custom_status, discord_link, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(patch.custom_status.as_deref())
        .bind(patch.avatar_url.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::from).ok_or_else(|| user_not_found(id))
    }

    #[instrument(skip(self))]
    async fn list_with_factions(&self) -> RepoResult<Vec<UserListing>> {
        let results = sqlx::query_as::<_, UserListingModel>(
            r"
            SELECT u.id, u.username, u.admin_role, u.status, u.rank_level,
                   u.is_banned, u.is_muted, f.name AS faction_name, u.created_at
            FROM users u
            LEFT JOIN factions f ON u.faction_id = f.id
            ORDER BY u.created_at DESC, u.id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(UserListing::from).collect())
    }

    #[instrument(skip(self))]
    async fn set_banned(&self, id: i32) -> RepoResult<()> {
        self.set_flag(id, "UPDATE users SET is_banned = TRUE WHERE id = $1")
            .await
    }

    #[instrument(skip(self))]
    async fn set_muted(&self, id: i32) -> RepoResult<()> {
        self.set_flag(id, "UPDATE users SET is_muted = TRUE WHERE id = $1")
            .await
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: i32, status: &str) -> RepoResult<()> {
        let result = sqlx::query("UPDATE users SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn assign_faction(&self, id: i32, faction_id: Option<i32>) -> RepoResult<()> {
        let result = sqlx::query("UPDATE users SET faction_id = $2 WHERE id = $1")
            .bind(id)
            .bind(faction_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_foreign_key_violation(e, |_| {
                    DomainError::FactionNotFound(faction_id.unwrap_or_default())
                })
            })?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}
