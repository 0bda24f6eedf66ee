//! Administration service
//!
//! Moderation and town management. Every method expects an admin-level
//! `AuthorizationContext` produced by the gate.

use tracing::{info, instrument};
use validator::Validate;

use town_core::{NewRole, Role, DEFAULT_ROLE_COLOR};

use crate::dto::{
    AssignFactionRequest, AssignRoleRequest, CreateRoleRequest, CreatedRoleResponse,
    FactionResponse, FactionsResponse, MessageResponse, RoleResponse, RolesResponse,
    TargetUserRequest, UpdateStatusRequest, UserListingResponse, UsersResponse,
};

use super::authorization::AuthorizationContext;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Administration service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // ===== Users =====

    /// All users with their faction name, newest first
    #[instrument(skip(self, _auth))]
    pub async fn list_users(&self, _auth: &AuthorizationContext) -> ServiceResult<UsersResponse> {
        let users = self.ctx.user_repo().list_with_factions().await?;

        Ok(UsersResponse {
            users: users.into_iter().map(UserListingResponse::from).collect(),
        })
    }

    /// Ban a user; banning twice is harmless
    #[instrument(skip(self, auth, request), fields(admin_id = auth.actor_id()))]
    pub async fn ban_user(
        &self,
        auth: &AuthorizationContext,
        request: TargetUserRequest,
    ) -> ServiceResult<MessageResponse> {
        request.validate()?;
        let user_id = required_id(request.user_id, "userId is required")?;

        self.ctx.user_repo().set_banned(user_id).await?;
        info!(user_id, "User banned");

        Ok(MessageResponse::new("User banned"))
    }

    /// Mute a user; muting twice is harmless
    #[instrument(skip(self, auth, request), fields(admin_id = auth.actor_id()))]
    pub async fn mute_user(
        &self,
        auth: &AuthorizationContext,
        request: TargetUserRequest,
    ) -> ServiceResult<MessageResponse> {
        request.validate()?;
        let user_id = required_id(request.user_id, "userId is required")?;

        self.ctx.user_repo().set_muted(user_id).await?;
        info!(user_id, "User muted");

        Ok(MessageResponse::new("User muted"))
    }

    /// Overwrite a user's status text
    #[instrument(skip(self, auth, request), fields(admin_id = auth.actor_id()))]
    pub async fn update_status(
        &self,
        auth: &AuthorizationContext,
        request: UpdateStatusRequest,
    ) -> ServiceResult<MessageResponse> {
        request.validate()?;
        let user_id = required_id(request.user_id, "userId and status required")?;
        let status = request
            .status
            .ok_or_else(|| ServiceError::validation("userId and status required"))?;

        self.ctx.user_repo().update_status(user_id, &status).await?;
        info!(user_id, status = %status, "Status updated");

        Ok(MessageResponse::new("Status updated"))
    }

    /// Move a user into a faction, or clear it with `None`
    #[instrument(skip(self, auth, request), fields(admin_id = auth.actor_id()))]
    pub async fn assign_faction(
        &self,
        auth: &AuthorizationContext,
        request: AssignFactionRequest,
    ) -> ServiceResult<MessageResponse> {
        request.validate()?;
        let user_id = required_id(request.user_id, "userId is required")?;

        if let Some(faction_id) = request.faction_id {
            self.ctx
                .faction_repo()
                .find_by_id(faction_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Faction", faction_id))?;
        }

        self.ctx
            .user_repo()
            .assign_faction(user_id, request.faction_id)
            .await?;
        info!(user_id, faction_id = ?request.faction_id, "Faction assigned");

        Ok(MessageResponse::new("Faction assigned"))
    }

    // ===== Roles =====

    /// Create a custom role attributed to the acting admin
    #[instrument(skip(self, auth, request), fields(admin_id = auth.actor_id()))]
    pub async fn create_role(
        &self,
        auth: &AuthorizationContext,
        request: CreateRoleRequest,
    ) -> ServiceResult<CreatedRoleResponse> {
        request.validate()?;
        let name = request
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ServiceError::validation("Role name is required"))?;

        let role = self
            .ctx
            .role_repo()
            .create(&NewRole {
                name,
                description: request.description.unwrap_or_default(),
                color: request
                    .color
                    .unwrap_or_else(|| DEFAULT_ROLE_COLOR.to_string()),
                created_by_admin_id: auth.actor_id(),
            })
            .await?;

        info!(role_id = role.id, name = %role.name, "Role created");

        Ok(CreatedRoleResponse {
            success: true,
            role: RoleResponse::from(role),
        })
    }

    /// Give a role to a user; assigning the same pair again changes nothing
    #[instrument(skip(self, auth, request), fields(admin_id = auth.actor_id()))]
    pub async fn assign_role(
        &self,
        auth: &AuthorizationContext,
        request: AssignRoleRequest,
    ) -> ServiceResult<MessageResponse> {
        request.validate()?;
        let user_id = required_id(request.user_id, "userId and roleId required")?;
        let role_id = required_id(request.role_id, "userId and roleId required")?;

        let inserted = self.ctx.role_repo().assign_to_user(user_id, role_id).await?;
        info!(user_id, role_id, inserted, "Role assigned");

        Ok(MessageResponse::new("Role assigned"))
    }

    /// Built-in roles first, then custom ones, each group by name
    #[instrument(skip(self, _auth))]
    pub async fn list_roles(&self, _auth: &AuthorizationContext) -> ServiceResult<RolesResponse> {
        let mut roles = self.ctx.role_repo().list().await?;
        roles.sort_by(Role::listing_cmp);

        Ok(RolesResponse {
            roles: roles.into_iter().map(RoleResponse::from).collect(),
        })
    }

    // ===== Factions =====

    /// Factions with their general, ordered open, closed, criminal, then by name
    #[instrument(skip(self, _auth))]
    pub async fn list_factions(
        &self,
        _auth: &AuthorizationContext,
    ) -> ServiceResult<FactionsResponse> {
        let mut factions = self.ctx.faction_repo().list_with_generals().await?;
        factions.sort_by(|a, b| a.faction.listing_cmp(&b.faction));

        Ok(FactionsResponse {
            factions: factions.into_iter().map(FactionResponse::from).collect(),
        })
    }
}

fn required_id(id: Option<i32>, message: &str) -> ServiceResult<i32> {
    id.ok_or_else(|| ServiceError::validation(message))
}
