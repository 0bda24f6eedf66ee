//! Forum entity <- model mappers

use town_core::{
    Author, CommentWithAuthor, ForumComment, ForumPost, PostWithAuthor, DEFAULT_POST_CATEGORY,
};

use crate::models::{CommentModel, CommentWithAuthorModel, PostModel, PostWithAuthorModel};

/// Convert PostModel to ForumPost entity
impl From<PostModel> for ForumPost {
    fn from(model: PostModel) -> Self {
        ForumPost {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            content: model.content,
            category: model
                .category
                .unwrap_or_else(|| DEFAULT_POST_CATEGORY.to_string()),
            likes: model.likes.unwrap_or(0),
            created_at: model.created_at,
        }
    }
}

/// Convert PostWithAuthorModel to PostWithAuthor
impl From<PostWithAuthorModel> for PostWithAuthor {
    fn from(model: PostWithAuthorModel) -> Self {
        PostWithAuthor {
            post: ForumPost::from(model.post),
            author: Author {
                username: model.username,
                avatar_url: model.avatar_url,
                admin_role: model.admin_role,
            },
        }
    }
}

/// Convert CommentModel to ForumComment entity
impl From<CommentModel> for ForumComment {
    fn from(model: CommentModel) -> Self {
        ForumComment {
            id: model.id,
            post_id: model.post_id,
            user_id: model.user_id,
            content: model.content,
            created_at: model.created_at,
        }
    }
}

/// Convert CommentWithAuthorModel to CommentWithAuthor
impl From<CommentWithAuthorModel> for CommentWithAuthor {
    fn from(model: CommentWithAuthorModel) -> Self {
        CommentWithAuthor {
            comment: ForumComment::from(model.comment),
            author: Author {
                username: model.username,
                avatar_url: model.avatar_url,
                admin_role: None,
            },
        }
    }
}
