//! Identity service
//!
//! Handles registration, login and the user's own profile.

use tracing::{info, instrument, warn};
use validator::Validate;

use town_common::generate_token;
use town_core::DomainError;

use crate::dto::{
    parse_query_id, AuthResponse, LoginRequest, ProfileResponse, RegisterRequest,
    RegisteredUserResponse, SessionUserResponse, UpdateProfileRequest, UpdatedUserResponse,
    UserResponse,
};

use super::authorization::AuthorizationContext;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Identity service
pub struct IdentityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IdentityService<'a> {
    /// Create a new IdentityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request))]
    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> ServiceResult<AuthResponse<RegisteredUserResponse>> {
        request.validate()?;
        let (username, password) = credentials(request.username, request.password)?;

        let password_hash = self.ctx.passwords().hash(&password);
        let user = self.ctx.user_repo().create(&username, &password_hash).await?;

        info!(user_id = user.id, username = %user.username, "User registered");

        Ok(AuthResponse::new(
            RegisteredUserResponse::from(&user),
            generate_token(),
        ))
    }

    /// Log in with username and password
    ///
    /// The token is opaque and not persisted.
    #[instrument(skip(self, request))]
    pub async fn login(
        &self,
        request: LoginRequest,
    ) -> ServiceResult<AuthResponse<SessionUserResponse>> {
        request.validate()?;
        let (username, password) = credentials(request.username, request.password)?;

        let password_hash = self.ctx.passwords().hash(&password);
        let user = self
            .ctx
            .user_repo()
            .find_by_credentials(&username, &password_hash)
            .await?
            .ok_or_else(|| {
                warn!(username = %username, "Login failed: invalid credentials");
                DomainError::InvalidCredentials
            })?;

        if !user.can_log_in() {
            warn!(user_id = user.id, "Login refused: account is banned");
            return Err(DomainError::UserBanned.into());
        }

        info!(user_id = user.id, "User logged in");

        Ok(AuthResponse::new(
            SessionUserResponse::from(&user),
            generate_token(),
        ))
    }

    /// Public profile with faction and roles
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Option<&str>) -> ServiceResult<ProfileResponse> {
        let user_id = parse_query_id(user_id, "userId")?;

        let profile = self
            .ctx
            .user_repo()
            .find_profile(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        Ok(profile.into())
    }

    /// Update the caller's custom status and avatar
    ///
    /// An empty patch succeeds without touching the store.
    #[instrument(skip(self, auth, request), fields(user_id = auth.actor_id()))]
    pub async fn update_profile(
        &self,
        auth: &AuthorizationContext,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UpdatedUserResponse> {
        request.validate()?;

        let patch = request.patch();
        let user = if patch.is_empty() {
            auth.actor().clone()
        } else {
            let user = self
                .ctx
                .user_repo()
                .update_profile(auth.actor_id(), &patch)
                .await?;
            info!("Profile updated");
            user
        };

        Ok(UpdatedUserResponse {
            success: true,
            user: UserResponse::from(user),
        })
    }
}

fn credentials(
    username: Option<String>,
    password: Option<String>,
) -> ServiceResult<(String, String)> {
    match (username, password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Ok((u, p)),
        _ => Err(ServiceError::validation("Username and password required")),
    }
}
