//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use town_core::{DomainError, ForumPost, NewPost, PostRepository, PostWithAuthor, RepoResult};

use crate::models::{PostModel, PostWithAuthorModel};

use super::error::{map_db_error, map_foreign_key_violation, post_not_found};

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn list(&self, category: Option<&str>) -> RepoResult<Vec<PostWithAuthor>> {
        let results = sqlx::query_as::<_, PostWithAuthorModel>(
            r"
            SELECT p.id, p.user_id, p.title, p.content, p.category, p.likes, p.created_at,
                   u.username, u.avatar_url, u.admin_role
            FROM forum_posts p
            JOIN users u ON p.user_id = u.id
            WHERE ($1::TEXT IS NULL OR p.category = $1)
            ORDER BY p.created_at DESC, p.id DESC
            ",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(PostWithAuthor::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<ForumPost>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, user_id, title, content, category, likes, created_at
            FROM forum_posts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ForumPost::from))
    }

    #[instrument(skip(self, post), fields(user_id = post.user_id))]
    async fn create(&self, post: &NewPost) -> RepoResult<ForumPost> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            INSERT INTO forum_posts (user_id, title, content, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, title, content, category, likes, created_at
            ",
        )
        .bind(post.user_id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, |_| DomainError::UserNotFound(post.user_id)))?;

        Ok(ForumPost::from(result))
    }

    #[instrument(skip(self))]
    async fn increment_likes(&self, id: i32) -> RepoResult<i32> {
        // Single statement, so concurrent likes never lose an increment
        let likes = sqlx::query_scalar::<_, i32>(
            r"
            UPDATE forum_posts
            SET likes = likes + 1
            WHERE id = $1
            RETURNING likes
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        likes.ok_or_else(|| post_not_found(id))
    }
}
