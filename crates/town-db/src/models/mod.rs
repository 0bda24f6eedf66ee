//! Database models - SQLx-compatible structs for PostgreSQL rows

mod admin_code;
mod faction;
mod forum;
mod role;
mod user;

pub use admin_code::AdminCodeModel;
pub use faction::{FactionModel, FactionWithGeneralModel};
pub use forum::{CommentModel, CommentWithAuthorModel, PostModel, PostWithAuthorModel};
pub use role::{RoleBadgeModel, RoleModel};
pub use user::{UserListingModel, UserModel, UserProfileModel};
