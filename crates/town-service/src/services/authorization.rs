//! Authorization gate
//!
//! Resolves the acting user once per request and decides whether the
//! requested operation may run. The gate only reads from the store.

use chrono::{NaiveDate, Utc};
use tracing::{debug, instrument, warn};

use town_core::{DomainError, User};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message for a missing or malformed admin id header
pub const ADMIN_ID_REQUIRED: &str = "Admin ID required";

/// Message for a missing or unknown member id
pub const USER_ID_REQUIRED: &str = "User ID required";

/// Level an operation demands of its caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredLevel {
    /// Any registered user
    Member,
    /// A user with an admin role and, unless super-admin, a live admin code
    Admin,
}

/// Outcome of a successful gate check, threaded into the operation
#[derive(Debug, Clone)]
pub struct AuthorizationContext {
    actor: User,
    level: RequiredLevel,
    super_admin: bool,
}

impl AuthorizationContext {
    /// The acting user as loaded during the check
    pub fn actor(&self) -> &User {
        &self.actor
    }

    pub fn actor_id(&self) -> i32 {
        self.actor.id
    }

    pub fn level(&self) -> RequiredLevel {
        self.level
    }

    /// Whether the admin-code check was skipped for this actor
    pub fn is_super_admin(&self) -> bool {
        self.super_admin
    }
}

/// Authorization gate
pub struct AuthorizationGate<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthorizationGate<'a> {
    /// Create a new AuthorizationGate
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check an actor against the required level, using today's UTC date for codes
    pub async fn authorize(
        &self,
        actor_id: Option<i32>,
        admin_code: Option<&str>,
        level: RequiredLevel,
    ) -> ServiceResult<AuthorizationContext> {
        self.authorize_on(actor_id, admin_code, level, Utc::now().date_naive())
            .await
    }

    /// Check an actor against the required level on a given day
    #[instrument(skip(self, admin_code))]
    pub async fn authorize_on(
        &self,
        actor_id: Option<i32>,
        admin_code: Option<&str>,
        level: RequiredLevel,
        today: NaiveDate,
    ) -> ServiceResult<AuthorizationContext> {
        match level {
            RequiredLevel::Member => self.authorize_member(actor_id).await,
            RequiredLevel::Admin => self.authorize_admin(actor_id, admin_code, today).await,
        }
    }

    async fn authorize_member(&self, actor_id: Option<i32>) -> ServiceResult<AuthorizationContext> {
        let actor_id = actor_id.ok_or_else(|| ServiceError::unauthenticated(USER_ID_REQUIRED))?;

        let actor = self
            .ctx
            .user_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| {
                debug!(actor_id, "Unknown member id");
                ServiceError::unauthenticated(USER_ID_REQUIRED)
            })?;

        Ok(AuthorizationContext {
            actor,
            level: RequiredLevel::Member,
            super_admin: false,
        })
    }

    async fn authorize_admin(
        &self,
        actor_id: Option<i32>,
        admin_code: Option<&str>,
        today: NaiveDate,
    ) -> ServiceResult<AuthorizationContext> {
        let actor_id = actor_id.ok_or_else(|| ServiceError::unauthenticated(ADMIN_ID_REQUIRED))?;

        let actor = match self.ctx.user_repo().find_by_id(actor_id).await? {
            Some(user) if user.is_admin() => user,
            _ => {
                warn!(actor_id, "Admin operation refused: not an admin");
                return Err(DomainError::NotAdmin.into());
            }
        };

        let super_admin = actor.is_super_admin(self.ctx.super_admin_username());
        if !super_admin {
            let code = admin_code
                .filter(|c| !c.is_empty())
                .ok_or(DomainError::InvalidAdminCode)?;

            let valid = self
                .ctx
                .admin_code_repo()
                .find_valid(code, today)
                .await?
                .is_some_and(|c| c.is_valid_on(today));
            if !valid {
                warn!(actor_id, "Admin operation refused: invalid or expired code");
                return Err(DomainError::InvalidAdminCode.into());
            }
        }

        Ok(AuthorizationContext {
            actor,
            level: RequiredLevel::Admin,
            super_admin,
        })
    }
}

/// Parse an actor id taken from a header; malformed values count as absent
pub fn parse_actor_id(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|s| s.trim().parse().ok())
}
