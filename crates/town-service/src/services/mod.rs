//! Business logic services
//!
//! One service per subsystem plus the authorization gate that runs in
//! front of them. Services borrow a shared `ServiceContext`.

pub mod admin;
pub mod authorization;
pub mod context;
pub mod error;
pub mod forum;
pub mod identity;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use admin::AdminService;
pub use authorization::{
    parse_actor_id, AuthorizationContext, AuthorizationGate, RequiredLevel, ADMIN_ID_REQUIRED,
    USER_ID_REQUIRED,
};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use forum::ForumService;
pub use identity::IdentityService;
