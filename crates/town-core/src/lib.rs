//! # town-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AdminCode, Author, CommentWithAuthor, Faction, FactionWithGeneral, ForumComment, ForumPost,
    NewComment, NewPost, NewRole, PostWithAuthor, ProfilePatch, Role, RoleBadge, User,
    UserListing, UserProfile, DEFAULT_ROLE_COLOR,
};
pub use error::DomainError;
pub use traits::{
    AdminCodeRepository, CommentRepository, FactionRepository, PostRepository, RepoResult,
    RoleRepository, UserRepository,
};
pub use value_objects::{FactionType, DEFAULT_POST_CATEGORY};
