//! Administration handler
//!
//! Every request except a preflight passes the admin gate before it is
//! routed, using the `X-Admin-Id` and `X-Admin-Code` headers.

use axum::extract::State;
use tracing::instrument;

use town_service::dto::{
    AssignFactionRequest, AssignRoleRequest, CreateRoleRequest, TargetUserRequest,
    UpdateStatusRequest,
};
use town_service::services::parse_actor_id;
use town_service::{AdminService, AuthorizationGate, RequiredLevel, ServiceContext};

use crate::actions::AdminAction;
use crate::extractors::{validated_body, FunctionEvent};
use crate::response::{Cors, Envelope, HandlerError, HandlerResult};
use crate::state::AppState;

/// Header carrying the acting admin's user id
pub const ADMIN_ID_HEADER: &str = "x-admin-id";

/// Header carrying the daily admin code
pub const ADMIN_CODE_HEADER: &str = "x-admin-code";

/// Handle one administration invocation
#[instrument(skip_all, fields(method = %event.http_method, action = event.action()))]
pub async fn handle(ctx: &ServiceContext, event: FunctionEvent) -> Envelope {
    if event.is_preflight() {
        return Envelope::preflight(Cors::ADMIN);
    }

    dispatch(ctx, &event)
        .await
        .unwrap_or_else(HandlerError::into_envelope)
}

async fn dispatch(ctx: &ServiceContext, event: &FunctionEvent) -> HandlerResult {
    let auth = AuthorizationGate::new(ctx)
        .authorize(
            parse_actor_id(event.header(ADMIN_ID_HEADER)),
            event.header(ADMIN_CODE_HEADER),
            RequiredLevel::Admin,
        )
        .await?;
    let action =
        AdminAction::route(&event.method(), event.action()).ok_or(HandlerError::EndpointNotFound)?;

    let service = AdminService::new(ctx);

    match action {
        AdminAction::ListUsers => Envelope::ok(&service.list_users(&auth).await?),
        AdminAction::Ban => {
            let request: TargetUserRequest = validated_body(event)?;
            Envelope::ok(&service.ban_user(&auth, request).await?)
        }
        AdminAction::Mute => {
            let request: TargetUserRequest = validated_body(event)?;
            Envelope::ok(&service.mute_user(&auth, request).await?)
        }
        AdminAction::CreateRole => {
            let request: CreateRoleRequest = validated_body(event)?;
            Envelope::ok(&service.create_role(&auth, request).await?)
        }
        AdminAction::AssignRole => {
            let request: AssignRoleRequest = validated_body(event)?;
            Envelope::ok(&service.assign_role(&auth, request).await?)
        }
        AdminAction::ListRoles => Envelope::ok(&service.list_roles(&auth).await?),
        AdminAction::ListFactions => Envelope::ok(&service.list_factions(&auth).await?),
        AdminAction::UpdateStatus => {
            let request: UpdateStatusRequest = validated_body(event)?;
            Envelope::ok(&service.update_status(&auth, request).await?)
        }
        AdminAction::AssignFaction => {
            let request: AssignFactionRequest = validated_body(event)?;
            Envelope::ok(&service.assign_faction(&auth, request).await?)
        }
    }
}

/// `ANY /admin`
pub async fn endpoint(State(state): State<AppState>, event: FunctionEvent) -> Envelope {
    handle(state.service_context(), event).await
}
