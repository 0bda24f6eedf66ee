//! Forum service
//!
//! Posts, comments and likes.

use tracing::{info, instrument};
use validator::Validate;

use town_core::{NewComment, NewPost};

use crate::dto::{
    parse_query_id, AddCommentRequest, CommentResponse, CommentsResponse, CreatePostRequest,
    CreatedCommentResponse, CreatedPostResponse, LikePostRequest, LikeResponse, PostResponse,
    PostsResponse,
};

use super::authorization::AuthorizationContext;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Forum service
pub struct ForumService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ForumService<'a> {
    /// Create a new ForumService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Posts with author details, newest first, optionally for one category
    #[instrument(skip(self))]
    pub async fn list_posts(&self, category: Option<&str>) -> ServiceResult<PostsResponse> {
        let category = category.filter(|c| !c.is_empty());
        let posts = self.ctx.post_repo().list(category).await?;

        Ok(PostsResponse {
            posts: posts.into_iter().map(PostResponse::from).collect(),
        })
    }

    /// Create a post authored by the caller
    #[instrument(skip(self, auth, request), fields(user_id = auth.actor_id()))]
    pub async fn create_post(
        &self,
        auth: &AuthorizationContext,
        request: CreatePostRequest,
    ) -> ServiceResult<CreatedPostResponse> {
        request.validate()?;
        let (Some(title), Some(content)) = (request.title, request.content) else {
            return Err(ServiceError::validation("Title and content required"));
        };

        let post = self
            .ctx
            .post_repo()
            .create(&NewPost::new(auth.actor_id(), title, content, request.category))
            .await?;

        info!(post_id = post.id, category = %post.category, "Post created");

        Ok(CreatedPostResponse {
            success: true,
            post: PostResponse::from(post),
        })
    }

    /// Comments on a post, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, post_id: Option<&str>) -> ServiceResult<CommentsResponse> {
        let post_id = parse_query_id(post_id, "postId")?;
        let comments = self.ctx.comment_repo().find_by_post(post_id).await?;

        Ok(CommentsResponse {
            comments: comments.into_iter().map(CommentResponse::from).collect(),
        })
    }

    /// Comment on an existing post
    #[instrument(skip(self, auth, request), fields(user_id = auth.actor_id()))]
    pub async fn add_comment(
        &self,
        auth: &AuthorizationContext,
        request: AddCommentRequest,
    ) -> ServiceResult<CreatedCommentResponse> {
        request.validate()?;
        let (Some(post_id), Some(content)) = (request.post_id, request.content) else {
            return Err(ServiceError::validation("postId and content required"));
        };

        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id))?;

        // The insert also requires the post to exist
        let comment = self
            .ctx
            .comment_repo()
            .create(&NewComment {
                post_id,
                user_id: auth.actor_id(),
                content,
            })
            .await?;

        info!(post_id, comment_id = comment.id, "Comment added");

        Ok(CreatedCommentResponse {
            success: true,
            comment: CommentResponse::from(comment),
        })
    }

    /// Add one like and return the new total
    #[instrument(skip(self, request))]
    pub async fn like_post(&self, request: LikePostRequest) -> ServiceResult<LikeResponse> {
        request.validate()?;
        let post_id = request
            .post_id
            .ok_or_else(|| ServiceError::validation("postId is required"))?;

        let likes = self.ctx.post_repo().increment_likes(post_id).await?;

        Ok(LikeResponse {
            success: true,
            likes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::authorization::{AuthorizationGate, RequiredLevel};
    use crate::services::testing::Fixture;
    use town_core::DEFAULT_POST_CATEGORY;

    async fn member(fixture: &Fixture, name: &str) -> AuthorizationContext {
        let user = fixture.add_user(name);
        AuthorizationGate::new(&fixture.ctx)
            .authorize(Some(user.id), None, RequiredLevel::Member)
            .await
            .unwrap()
    }

    fn post_request(title: &str, category: Option<&str>) -> CreatePostRequest {
        CreatePostRequest {
            user_id: None,
            title: Some(title.to_string()),
            content: Some("текст".to_string()),
            category: category.map(ToString::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_and_list_posts() {
        let fixture = Fixture::new();
        let auth = member(&fixture, "writer").await;
        let service = ForumService::new(&fixture.ctx);

        let first = service
            .create_post(&auth, post_request("Первый", None))
            .await
            .unwrap();
        assert_eq!(first.post.category, DEFAULT_POST_CATEGORY);
        assert_eq!(first.post.likes, 0);
        service
            .create_post(&auth, post_request("Продам", Some("торговля")))
            .await
            .unwrap();

        let all = service.list_posts(None).await.unwrap().posts;
        let titles: Vec<_> = all.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Продам", "Первый"]);
        assert_eq!(all[0].username.as_deref(), Some("writer"));

        let trade = service.list_posts(Some("торговля")).await.unwrap().posts;
        assert_eq!(trade.len(), 1);
    }

    #[tokio::test]
    async fn test_create_post_requires_title() {
        let fixture = Fixture::new();
        let auth = member(&fixture, "writer").await;

        let err = ForumService::new(&fixture.ctx)
            .create_post(
                &auth,
                CreatePostRequest {
                    content: Some("x".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "Title and content required");
    }

    #[tokio::test]
    async fn test_comments() {
        let fixture = Fixture::new();
        let auth = member(&fixture, "talker").await;
        let service = ForumService::new(&fixture.ctx);
        let post = service
            .create_post(&auth, post_request("Тема", None))
            .await
            .unwrap()
            .post;

        for text in ["раз", "два"] {
            service
                .add_comment(
                    &auth,
                    AddCommentRequest {
                        user_id: Some(auth.actor_id()),
                        post_id: Some(post.id),
                        content: Some(text.into()),
                    },
                )
                .await
                .unwrap();
        }

        let id = post.id.to_string();
        let thread = service.list_comments(Some(&id)).await.unwrap().comments;
        let texts: Vec<_> = thread.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(texts, ["раз", "два"]);

        let err = service.list_comments(Some("abc")).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_comment_on_missing_post_is_not_found() {
        let fixture = Fixture::new();
        let auth = member(&fixture, "ghost").await;

        let err = ForumService::new(&fixture.ctx)
            .add_comment(
                &auth,
                AddCommentRequest {
                    user_id: Some(auth.actor_id()),
                    post_id: Some(4242),
                    content: Some("эхо".into()),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(fixture.comment_count(), 0);
    }

    #[tokio::test]
    async fn test_like_post() {
        let fixture = Fixture::new();
        let auth = member(&fixture, "fan").await;
        let service = ForumService::new(&fixture.ctx);
        let post = service
            .create_post(&auth, post_request("Мем", None))
            .await
            .unwrap()
            .post;

        let request = LikePostRequest {
            post_id: Some(post.id),
        };
        assert_eq!(service.like_post(request.clone()).await.unwrap().likes, 1);
        assert_eq!(service.like_post(request).await.unwrap().likes, 2);

        let err = service
            .like_post(LikePostRequest { post_id: Some(9) })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
