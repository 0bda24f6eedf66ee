//! Data transfer objects for requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for handler inputs
//! - Response DTOs for serializing handler outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    first_validation_message, parse_query_id, AddCommentRequest, AssignFactionRequest,
    AssignRoleRequest, CreatePostRequest, CreateRoleRequest, LikePostRequest, LoginRequest,
    RegisterRequest, TargetUserRequest, UpdateProfileRequest, UpdateStatusRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, CommentResponse, CommentsResponse, CreatedCommentResponse, CreatedPostResponse,
    CreatedRoleResponse, FactionResponse, FactionsResponse, LikeResponse, MessageResponse,
    PostResponse, PostsResponse, ProfileResponse, ProfileUserResponse, RegisteredUserResponse,
    RoleBadgeResponse, RoleResponse, RolesResponse, SessionUserResponse, UpdatedUserResponse,
    UserListingResponse, UserResponse, UsersResponse,
};
