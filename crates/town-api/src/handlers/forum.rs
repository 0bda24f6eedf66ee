//! Forum handler
//!
//! Reads are open; create-post and add-comment need a known `userId`.

use axum::extract::State;
use tracing::instrument;

use town_service::dto::{AddCommentRequest, CreatePostRequest, LikePostRequest};
use town_service::services::parse_actor_id;
use town_service::{
    AuthorizationContext, AuthorizationGate, ForumService, RequiredLevel, ServiceContext,
};

use crate::actions::ForumAction;
use crate::extractors::{validated_body, FunctionEvent};
use crate::response::{Cors, Envelope, HandlerError, HandlerResult};
use crate::state::AppState;

/// Handle one forum invocation
#[instrument(skip_all, fields(method = %event.http_method, action = event.action()))]
pub async fn handle(ctx: &ServiceContext, event: FunctionEvent) -> Envelope {
    if event.is_preflight() {
        return Envelope::preflight(Cors::FORUM);
    }

    dispatch(ctx, &event)
        .await
        .unwrap_or_else(HandlerError::into_envelope)
}

async fn dispatch(ctx: &ServiceContext, event: &FunctionEvent) -> HandlerResult {
    let action =
        ForumAction::route(&event.method(), event.action()).ok_or(HandlerError::EndpointNotFound)?;
    let service = ForumService::new(ctx);

    match action {
        ForumAction::ListPosts => Envelope::ok(&service.list_posts(event.query("category")).await?),
        ForumAction::CreatePost => {
            let request: CreatePostRequest = validated_body(event)?;
            let auth = member(ctx, event, request.user_id).await?;
            Envelope::ok(&service.create_post(&auth, request).await?)
        }
        ForumAction::ListComments => {
            Envelope::ok(&service.list_comments(event.query("postId")).await?)
        }
        ForumAction::AddComment => {
            let request: AddCommentRequest = validated_body(event)?;
            let auth = member(ctx, event, request.user_id).await?;
            Envelope::ok(&service.add_comment(&auth, request).await?)
        }
        ForumAction::LikePost => {
            let request: LikePostRequest = validated_body(event)?;
            Envelope::ok(&service.like_post(request).await?)
        }
    }
}

/// Member gate on the body's `userId`, falling back to the query string
async fn member(
    ctx: &ServiceContext,
    event: &FunctionEvent,
    body_user_id: Option<i32>,
) -> Result<AuthorizationContext, HandlerError> {
    let actor_id = body_user_id.or_else(|| parse_actor_id(event.query("userId")));
    Ok(AuthorizationGate::new(ctx)
        .authorize(actor_id, None, RequiredLevel::Member)
        .await?)
}

/// `ANY /forum`
pub async fn endpoint(State(state): State<AppState>, event: FunctionEvent) -> Envelope {
    handle(state.service_context(), event).await
}
