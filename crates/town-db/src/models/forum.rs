//! Forum database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the forum_posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub likes: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Post row joined with author columns
#[derive(Debug, Clone, FromRow)]
pub struct PostWithAuthorModel {
    #[sqlx(flatten)]
    pub post: PostModel,
    pub username: String,
    pub avatar_url: Option<String>,
    pub admin_role: Option<String>,
}

/// Database model for the forum_comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Comment row joined with author columns
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithAuthorModel {
    #[sqlx(flatten)]
    pub comment: CommentModel,
    pub username: String,
    pub avatar_url: Option<String>,
}
