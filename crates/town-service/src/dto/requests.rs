//! Request DTOs for the three subsystems
//!
//! Bodies arrive as camelCase JSON. Every request derives `Deserialize` and
//! `Validate`; required text fields are `Option<String>` so that a missing field
//! and an empty one produce the same validation message.

use serde::{de, Deserialize, Deserializer};
use validator::{Validate, ValidationError, ValidationErrors};

use town_core::ProfilePatch;

use crate::services::{ServiceError, ServiceResult};

// ============================================================================
// Identity Requests
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        required(message = "Username and password required"),
        length(min = 1, message = "Username and password required"),
        custom(function = "username_fits_column")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "Username and password required"),
        length(min = 1, message = "Username and password required")
    )]
    pub password: Option<String>,
}

/// Longest username the `users.username` column holds
pub const MAX_USERNAME_CHARS: usize = 50;

fn username_fits_column(username: &str) -> Result<(), ValidationError> {
    if username.chars().count() > MAX_USERNAME_CHARS {
        return Err(ValidationError::new("length")
            .with_message("Username must be at most 50 characters".into()));
    }
    Ok(())
}

/// Login request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        required(message = "Username and password required"),
        length(min = 1, message = "Username and password required")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "Username and password required"),
        length(min = 1, message = "Username and password required")
    )]
    pub password: Option<String>,
}

/// Self-service profile update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub user_id: Option<i32>,

    #[validate(length(max = 200, message = "Custom status must be at most 200 characters"))]
    pub custom_status: Option<String>,

    pub avatar_url: Option<String>,
}

impl UpdateProfileRequest {
    /// The fields to change; absent fields stay untouched
    pub fn patch(&self) -> ProfilePatch {
        ProfilePatch {
            custom_status: self.custom_status.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}

// ============================================================================
// Administration Requests
// ============================================================================

/// Request naming a single target user (ban, mute)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TargetUserRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    #[validate(required(message = "userId is required"))]
    pub user_id: Option<i32>,
}

/// Custom role creation
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateRoleRequest {
    #[validate(
        required(message = "Role name is required"),
        length(min = 1, max = 100, message = "Role name is required")
    )]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(length(min = 1, max = 7, message = "Color must be a hex code like #FFFFFF"))]
    pub color: Option<String>,
}

/// Give a role to a user
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoleRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    #[validate(required(message = "userId and roleId required"))]
    pub user_id: Option<i32>,

    #[serde(default, deserialize_with = "lenient_id")]
    #[validate(required(message = "userId and roleId required"))]
    pub role_id: Option<i32>,
}

/// Overwrite a user's status text
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    #[validate(required(message = "userId and status required"))]
    pub user_id: Option<i32>,

    #[validate(
        required(message = "userId and status required"),
        length(max = 100, message = "Status must be at most 100 characters")
    )]
    pub status: Option<String>,
}

/// Move a user into a faction, or out of any faction with `null`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignFactionRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    #[validate(required(message = "userId is required"))]
    pub user_id: Option<i32>,

    #[serde(default, deserialize_with = "lenient_id")]
    pub faction_id: Option<i32>,
}

// ============================================================================
// Forum Requests
// ============================================================================

/// New forum post
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub user_id: Option<i32>,

    #[validate(
        required(message = "Title and content required"),
        length(min = 1, max = 255, message = "Title and content required")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "Title and content required"),
        length(min = 1, message = "Title and content required")
    )]
    pub content: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Category must be 1-50 characters"))]
    pub category: Option<String>,
}

/// New comment on a post
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub user_id: Option<i32>,

    #[serde(default, deserialize_with = "lenient_id")]
    #[validate(required(message = "postId and content required"))]
    pub post_id: Option<i32>,

    #[validate(
        required(message = "postId and content required"),
        length(min = 1, message = "postId and content required")
    )]
    pub content: Option<String>,
}

/// Like a post
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LikePostRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    #[validate(required(message = "postId is required"))]
    pub post_id: Option<i32>,
}

// ============================================================================
// Helpers
// ============================================================================

/// Accept ids sent either as JSON numbers or as numeric strings
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(n)) => i32::try_from(n).map(Some).map_err(de::Error::custom),
        Some(RawId::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawId::Text(s)) => s.trim().parse().map(Some).map_err(de::Error::custom),
    }
}

/// Parse an id taken from the query string
///
/// # Errors
/// `Validation` when the parameter is missing or not an integer
pub fn parse_query_id(raw: Option<&str>, name: &str) -> ServiceResult<i32> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ServiceError::validation(format!("{name} is required")))?;

    raw.parse()
        .map_err(|_| ServiceError::validation(format!("{name} must be an integer")))
}

/// Pick a stable, human-readable message out of a validation failure
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|e| e.message.as_ref().map(ToString::to_string))
        .unwrap_or_else(|| errors.to_string())
}
