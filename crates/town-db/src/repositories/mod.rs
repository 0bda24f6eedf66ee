//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in town-core.
//! Each repository handles database operations for a specific domain entity.

mod admin_code;
mod comment;
mod error;
mod faction;
mod post;
mod role;
mod user;

pub use admin_code::PgAdminCodeRepository;
pub use comment::PgCommentRepository;
pub use faction::PgFactionRepository;
pub use post::PgPostRepository;
pub use role::PgRoleRepository;
pub use user::PgUserRepository;
