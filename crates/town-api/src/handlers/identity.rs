//! Identity handler
//!
//! POST ?action=register, POST ?action=login, GET ?action=profile&userId=,
//! PUT ?action=update-profile

use axum::extract::State;
use tracing::instrument;

use town_service::dto::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use town_service::services::parse_actor_id;
use town_service::{AuthorizationGate, IdentityService, RequiredLevel, ServiceContext};

use crate::actions::IdentityAction;
use crate::extractors::{validated_body, FunctionEvent};
use crate::response::{Cors, Envelope, HandlerError, HandlerResult};
use crate::state::AppState;

/// Handle one identity invocation
#[instrument(skip_all, fields(method = %event.http_method, action = event.action()))]
pub async fn handle(ctx: &ServiceContext, event: FunctionEvent) -> Envelope {
    if event.is_preflight() {
        return Envelope::preflight(Cors::IDENTITY);
    }

    dispatch(ctx, &event)
        .await
        .unwrap_or_else(HandlerError::into_envelope)
}

async fn dispatch(ctx: &ServiceContext, event: &FunctionEvent) -> HandlerResult {
    let action = IdentityAction::route(&event.method(), event.action())
        .ok_or(HandlerError::EndpointNotFound)?;
    let service = IdentityService::new(ctx);

    match action {
        IdentityAction::Register => {
            let request: RegisterRequest = validated_body(event)?;
            Envelope::ok(&service.register(request).await?)
        }
        IdentityAction::Login => {
            let request: LoginRequest = validated_body(event)?;
            Envelope::ok(&service.login(request).await?)
        }
        IdentityAction::Profile => Envelope::ok(&service.get_profile(event.query("userId")).await?),
        IdentityAction::UpdateProfile => {
            let request: UpdateProfileRequest = validated_body(event)?;
            let actor_id = request
                .user_id
                .or_else(|| parse_actor_id(event.query("userId")));
            let auth = AuthorizationGate::new(ctx)
                .authorize(actor_id, None, RequiredLevel::Member)
                .await?;
            Envelope::ok(&service.update_profile(&auth, request).await?)
        }
    }
}

/// `ANY /auth`
pub async fn endpoint(State(state): State<AppState>, event: FunctionEvent) -> Envelope {
    handle(state.service_context(), event).await
}
