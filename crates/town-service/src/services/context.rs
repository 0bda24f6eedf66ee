//! Service context - dependency container for services
//!
//! Holds the connection pool, repositories and immutable settings needed by services.

use std::sync::Arc;

use town_common::{AdminConfig, PasswordService};
use town_core::{
    AdminCodeRepository, CommentRepository, FactionRepository, PostRepository, RoleRepository,
    UserRepository,
};
use town_db::{
    PgAdminCodeRepository, PgCommentRepository, PgFactionRepository, PgPool, PgPostRepository,
    PgRoleRepository, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Built once at startup and shared by every request. Nothing in here is
/// mutated after construction; each repository call acquires a pooled
/// connection and returns it when the call completes.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (absent when running against in-memory repositories)
    pool: Option<PgPool>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    role_repo: Arc<dyn RoleRepository>,
    faction_repo: Arc<dyn FactionRepository>,
    admin_code_repo: Arc<dyn AdminCodeRepository>,
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,

    // Settings and helpers
    admin: AdminConfig,
    passwords: PasswordService,
}

impl ServiceContext {
    /// Wire every PostgreSQL repository to one pool
    pub fn from_pool(pool: PgPool, admin: AdminConfig) -> Self {
        Self {
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            role_repo: Arc::new(PgRoleRepository::new(pool.clone())),
            faction_repo: Arc::new(PgFactionRepository::new(pool.clone())),
            admin_code_repo: Arc::new(PgAdminCodeRepository::new(pool.clone())),
            post_repo: Arc::new(PgPostRepository::new(pool.clone())),
            comment_repo: Arc::new(PgCommentRepository::new(pool.clone())),
            pool: Some(pool),
            admin,
            passwords: PasswordService::new(),
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if one is attached
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the role repository
    pub fn role_repo(&self) -> &dyn RoleRepository {
        self.role_repo.as_ref()
    }

    /// Get the faction repository
    pub fn faction_repo(&self) -> &dyn FactionRepository {
        self.faction_repo.as_ref()
    }

    /// Get the admin code repository
    pub fn admin_code_repo(&self) -> &dyn AdminCodeRepository {
        self.admin_code_repo.as_ref()
    }

    /// Get the forum post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the forum comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    // === Settings ===

    /// Username exempt from admin-code checks
    pub fn super_admin_username(&self) -> &str {
        &self.admin.super_admin_username
    }

    /// Get the password service
    pub fn passwords(&self) -> &PasswordService {
        &self.passwords
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("super_admin", &self.admin.super_admin_username)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    role_repo: Option<Arc<dyn RoleRepository>>,
    faction_repo: Option<Arc<dyn FactionRepository>>,
    admin_code_repo: Option<Arc<dyn AdminCodeRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    admin: Option<AdminConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn role_repo(mut self, repo: Arc<dyn RoleRepository>) -> Self {
        self.role_repo = Some(repo);
        self
    }

    pub fn faction_repo(mut self, repo: Arc<dyn FactionRepository>) -> Self {
        self.faction_repo = Some(repo);
        self
    }

    pub fn admin_code_repo(mut self, repo: Arc<dyn AdminCodeRepository>) -> Self {
        self.admin_code_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn admin_config(mut self, admin: AdminConfig) -> Self {
        self.admin = Some(admin);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::internal(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: self.pool,
            user_repo: required(self.user_repo, "user_repo")?,
            role_repo: required(self.role_repo, "role_repo")?,
            faction_repo: required(self.faction_repo, "faction_repo")?,
            admin_code_repo: required(self.admin_code_repo, "admin_code_repo")?,
            post_repo: required(self.post_repo, "post_repo")?,
            comment_repo: required(self.comment_repo, "comment_repo")?,
            admin: self.admin.unwrap_or_default(),
            passwords: PasswordService::new(),
        })
    }
}
