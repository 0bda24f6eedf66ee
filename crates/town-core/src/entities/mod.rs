//! Domain entities - core business objects

mod admin_code;
mod faction;
mod forum;
mod role;
mod user;

pub use admin_code::AdminCode;
pub use faction::{Faction, FactionWithGeneral};
pub use forum::{
    Author, CommentWithAuthor, ForumComment, ForumPost, NewComment, NewPost, PostWithAuthor,
};
pub use role::{NewRole, Role, RoleBadge, DEFAULT_ROLE_COLOR};
pub use user::{ProfilePatch, User, UserListing, UserProfile};
