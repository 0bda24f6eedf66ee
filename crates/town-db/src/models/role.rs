//! Role database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the roles table
#[derive(Debug, Clone, FromRow)]
pub struct RoleModel {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub is_custom: bool,
    pub created_by_admin_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Role name and color joined through user_roles
#[derive(Debug, Clone, FromRow)]
pub struct RoleBadgeModel {
    pub name: String,
    pub color: Option<String>,
}
