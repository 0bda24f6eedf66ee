//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use town_core::{
    CommentRepository, CommentWithAuthor, DomainError, ForumComment, NewComment, RepoResult,
};

use crate::models::{CommentModel, CommentWithAuthorModel};

use super::error::{map_db_error, map_foreign_key_violation, post_not_found};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: i32) -> RepoResult<Vec<CommentWithAuthor>> {
        let results = sqlx::query_as::<_, CommentWithAuthorModel>(
            r"
            SELECT c.id, c.post_id, c.user_id, c.content, c.created_at,
                   u.username, u.avatar_url
            FROM forum_comments c
            JOIN users u ON c.user_id = u.id
            WHERE c.post_id = $1
            ORDER BY c.created_at ASC, c.id ASC
            ",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CommentWithAuthor::from).collect())
    }

    #[instrument(skip(self, comment), fields(post_id = comment.post_id, user_id = comment.user_id))]
    async fn create(&self, comment: &NewComment) -> RepoResult<ForumComment> {
        // The insert only happens when the post exists, so no orphan comment is ever written
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO forum_comments (post_id, user_id, content)
            SELECT $1, $2, $3
            WHERE EXISTS (SELECT 1 FROM forum_posts WHERE id = $1)
            RETURNING id, post_id, user_id, content, created_at
            ",
        )
        .bind(comment.post_id)
        .bind(comment.user_id)
        .bind(&comment.content)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, |constraint| {
                if constraint.contains("post") {
                    post_not_found(comment.post_id)
                } else {
                    DomainError::UserNotFound(comment.user_id)
                }
            })
        })?;

        result
            .map(ForumComment::from)
            .ok_or_else(|| post_not_found(comment.post_id))
    }
}
