//! Forum entities - posts and comments

use chrono::{DateTime, Utc};

use crate::value_objects::DEFAULT_POST_CATEGORY;

/// Forum post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumPost {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub category: String,
    /// Only ever incremented
    pub likes: i32,
    pub created_at: DateTime<Utc>,
}

/// Values for a new forum post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub category: String,
}

impl NewPost {
    /// Build a post, falling back to the general category
    pub fn new(user_id: i32, title: String, content: String, category: Option<String>) -> Self {
        Self {
            user_id,
            title,
            content,
            category: category.unwrap_or_else(|| DEFAULT_POST_CATEGORY.to_string()),
        }
    }
}

/// Forum comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumComment {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Values for a new comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
}

/// Author identity fields shown next to posts and comments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub username: String,
    pub avatar_url: Option<String>,
    pub admin_role: Option<String>,
}

/// Post joined with its author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithAuthor {
    pub post: ForumPost,
    pub author: Author,
}

/// Comment joined with its author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWithAuthor {
    pub comment: ForumComment,
    pub author: Author,
}
