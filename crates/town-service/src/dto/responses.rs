//! Response DTOs
//!
//! Field names are snake_case, matching the column names the front end reads.
//! Mutating operations answer with `success: true` next to their payload.

use chrono::{DateTime, Utc};
use serde::Serialize;

use town_core::FactionType;

// ============================================================================
// Common Response Types
// ============================================================================

/// Acknowledgement for mutations that return no record
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

// ============================================================================
// Identity Responses
// ============================================================================

/// User fields returned right after registration
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUserResponse {
    pub id: i32,
    pub username: String,
    pub status: String,
    pub rank_level: i32,
}

/// User fields returned on login
#[derive(Debug, Clone, Serialize)]
pub struct SessionUserResponse {
    pub id: i32,
    pub username: String,
    pub admin_role: Option<String>,
    pub status: String,
    pub rank_level: i32,
    pub faction_id: Option<i32>,
    pub avatar_url: Option<String>,
    pub custom_status: Option<String>,
    pub is_banned: bool,
}

/// Register/login response with an opaque token
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse<U> {
    pub success: bool,
    pub user: U,
    pub token: String,
}

impl<U> AuthResponse<U> {
    pub fn new(user: U, token: String) -> Self {
        Self {
            success: true,
            user,
            token,
        }
    }
}

/// Every user column except the password hash
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub admin_role: Option<String>,
    pub status: String,
    pub rank_level: i32,
    pub experience: i32,
    pub is_banned: bool,
    pub is_muted: bool,
    pub faction_id: Option<i32>,
    pub avatar_url: Option<String>,
    pub custom_status: Option<String>,
    pub discord_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of a profile update
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedUserResponse {
    pub success: bool,
    pub user: UserResponse,
}

/// Public profile fields
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUserResponse {
    pub id: i32,
    pub username: String,
    pub admin_role: Option<String>,
    pub status: String,
    pub custom_status: Option<String>,
    pub rank_level: i32,
    pub experience: i32,
    pub avatar_url: Option<String>,
    pub discord_link: Option<String>,
    pub faction_name: Option<String>,
    pub faction_color: Option<String>,
}

/// Role name and color on a profile
#[derive(Debug, Clone, Serialize)]
pub struct RoleBadgeResponse {
    pub name: String,
    pub color: String,
}

/// Profile with the user's roles
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user: ProfileUserResponse,
    pub roles: Vec<RoleBadgeResponse>,
}

// ============================================================================
// Administration Responses
// ============================================================================

/// Row of the admin user listing
#[derive(Debug, Clone, Serialize)]
pub struct UserListingResponse {
    pub id: i32,
    pub username: String,
    pub admin_role: Option<String>,
    pub status: String,
    pub rank_level: i32,
    pub is_banned: bool,
    pub is_muted: bool,
    pub faction_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserListingResponse>,
}

/// Role record
#[derive(Debug, Clone, Serialize)]
pub struct RoleResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub color: String,
    pub is_custom: bool,
    pub created_by_admin_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<RoleResponse>,
}

/// Result of creating a role
#[derive(Debug, Clone, Serialize)]
pub struct CreatedRoleResponse {
    pub success: bool,
    pub role: RoleResponse,
}

/// Faction with its general's username
#[derive(Debug, Clone, Serialize)]
pub struct FactionResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub faction_type: FactionType,
    pub color: String,
    pub general_user_id: Option<i32>,
    pub general_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FactionsResponse {
    pub factions: Vec<FactionResponse>,
}

// ============================================================================
// Forum Responses
// ============================================================================

/// Forum post, with author columns when listed
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub category: String,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_role: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostsResponse {
    pub posts: Vec<PostResponse>,
}

/// Result of creating a post
#[derive(Debug, Clone, Serialize)]
pub struct CreatedPostResponse {
    pub success: bool,
    pub post: PostResponse,
}

/// Forum comment, with author columns when listed
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<CommentResponse>,
}

/// Result of adding a comment
#[derive(Debug, Clone, Serialize)]
pub struct CreatedCommentResponse {
    pub success: bool,
    pub comment: CommentResponse,
}

/// New like total
#[derive(Debug, Clone, Serialize)]
pub struct LikeResponse {
    pub success: bool,
    pub likes: i32,
}
