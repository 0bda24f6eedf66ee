//! PostgreSQL implementation of RoleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use town_core::{DomainError, NewRole, RepoResult, Role, RoleRepository};

use crate::models::RoleModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of RoleRepository
#[derive(Clone)]
pub struct PgRoleRepository {
    pool: PgPool,
}

impl PgRoleRepository {
    /// Create a new PgRoleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Role>> {
        let results = sqlx::query_as::<_, RoleModel>(
            r"
            SELECT id, name, description, color, is_custom, created_by_admin_id, created_at
            FROM roles
            ORDER BY is_custom, name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Role::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, role: &NewRole) -> RepoResult<Role> {
        let result = sqlx::query_as::<_, RoleModel>(
            r"
            INSERT INTO roles (name, description, color, is_custom, created_by_admin_id)
            VALUES ($1, $2, $3, TRUE, $4)
            RETURNING id, name, description, color, is_custom, created_by_admin_id, created_at
            ",
        )
        .bind(&role.name)
        .bind(&role.description)
        .bind(&role.color)
        .bind(role.created_by_admin_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, |_| DomainError::UserNotFound(role.created_by_admin_id))
        })?;

        Ok(Role::from(result))
    }

    #[instrument(skip(self))]
    async fn assign_to_user(&self, user_id: i32, role_id: i32) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO user_roles (user_id, role_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(user_id)
        .bind(role_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, |constraint| {
                membership_fk_error(constraint, user_id, role_id)
            })
        })?;

        Ok(result.rows_affected() > 0)
    }
}

/// Which side of a `user_roles` insert hit a missing row
///
/// Postgres names the keys `user_roles_user_id_fkey` and `user_roles_role_id_fkey`.
fn membership_fk_error(constraint: &str, user_id: i32, role_id: i32) -> DomainError {
    if constraint.contains("role_id") {
        DomainError::RoleNotFound(role_id)
    } else {
        DomainError::UserNotFound(user_id)
    }
}
