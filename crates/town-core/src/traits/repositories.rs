//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{
    AdminCode, CommentWithAuthor, Faction, FactionWithGeneral, ForumComment, ForumPost,
    NewComment, NewPost, NewRole, PostWithAuthor, ProfilePatch, Role, User, UserListing,
    UserProfile,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<User>>;

    /// Find the user whose username and password hash both match
    async fn find_by_credentials(
        &self,
        username: &str,
        password_hash: &str,
    ) -> RepoResult<Option<User>>;

    /// Create a user with store defaults
    ///
    /// Fails with `UsernameTaken` when the username is in use; nothing is written in that case.
    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<User>;

    /// Load a user with faction name/color and assigned roles
    async fn find_profile(&self, id: i32) -> RepoResult<Option<UserProfile>>;

    /// Apply a non-empty profile patch and bump `updated_at`
    async fn update_profile(&self, id: i32, patch: &ProfilePatch) -> RepoResult<User>;

    /// List all users with their faction name, newest first
    async fn list_with_factions(&self) -> RepoResult<Vec<UserListing>>;

    /// Set the ban flag (idempotent)
    async fn set_banned(&self, id: i32) -> RepoResult<()>;

    /// Set the mute flag (idempotent)
    async fn set_muted(&self, id: i32) -> RepoResult<()>;

    /// Overwrite the status text
    async fn update_status(&self, id: i32, status: &str) -> RepoResult<()>;

    /// Overwrite the faction reference (`None` clears it)
    async fn assign_faction(&self, id: i32, faction_id: Option<i32>) -> RepoResult<()>;
}

// ============================================================================
// Role Repository
// ============================================================================

#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// List all roles, built-in first, then by name
    async fn list(&self) -> RepoResult<Vec<Role>>;

    /// Create a custom role
    async fn create(&self, role: &NewRole) -> RepoResult<Role>;

    /// Give a role to a user; returns `false` when the pair already existed
    async fn assign_to_user(&self, user_id: i32, role_id: i32) -> RepoResult<bool>;
}

// ============================================================================
// Faction Repository
// ============================================================================

#[async_trait]
pub trait FactionRepository: Send + Sync {
    /// Find faction by ID
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Faction>>;

    /// List all factions with their general's username
    async fn list_with_generals(&self) -> RepoResult<Vec<FactionWithGeneral>>;
}

// ============================================================================
// Admin Code Repository
// ============================================================================

#[async_trait]
pub trait AdminCodeRepository: Send + Sync {
    /// Find a code that is still valid on `today`
    async fn find_valid(&self, code: &str, today: NaiveDate) -> RepoResult<Option<AdminCode>>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List posts with authors, newest first, optionally within one category
    async fn list(&self, category: Option<&str>) -> RepoResult<Vec<PostWithAuthor>>;

    /// Find post by ID
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<ForumPost>>;

    /// Create a new post
    async fn create(&self, post: &NewPost) -> RepoResult<ForumPost>;

    /// Atomically add one like and return the new total
    async fn increment_likes(&self, id: i32) -> RepoResult<i32>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// List a post's comments with authors, oldest first
    async fn find_by_post(&self, post_id: i32) -> RepoResult<Vec<CommentWithAuthor>>;

    /// Create a comment; fails with `PostNotFound` if the post does not exist
    async fn create(&self, comment: &NewComment) -> RepoResult<ForumComment>;
}
