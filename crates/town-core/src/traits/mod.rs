//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AdminCodeRepository, CommentRepository, FactionRepository, PostRepository, RepoResult,
    RoleRepository, UserRepository,
};
