//! User database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table
///
/// `password_hash` is never selected into this model.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i32,
    pub username: String,
    pub admin_role: Option<String>,
    pub status: Option<String>,
    pub rank_level: Option<i32>,
    pub experience: Option<i32>,
    pub is_banned: Option<bool>,
    pub is_muted: Option<bool>,
    pub faction_id: Option<i32>,
    pub avatar_url: Option<String>,
    pub custom_status: Option<String>,
    pub discord_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User row joined with the faction name for admin listings
#[derive(Debug, Clone, FromRow)]
pub struct UserListingModel {
    pub id: i32,
    pub username: String,
    pub admin_role: Option<String>,
    pub status: Option<String>,
    pub rank_level: Option<i32>,
    pub is_banned: Option<bool>,
    pub is_muted: Option<bool>,
    pub faction_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// User row joined with faction name and color
#[derive(Debug, Clone, FromRow)]
pub struct UserProfileModel {
    #[sqlx(flatten)]
    pub user: UserModel,
    pub faction_name: Option<String>,
    pub faction_color: Option<String>,
}
