//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i32),

    #[error("Role not found: {0}")]
    RoleNotFound(i32),

    #[error("Faction not found: {0}")]
    FactionNotFound(i32),

    #[error("Post not found: {0}")]
    PostNotFound(i32),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Authentication Errors
    // =========================================================================
    #[error("Actor identity required")]
    Unauthenticated,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not authorized")]
    NotAdmin,

    #[error("Invalid or expired admin code")]
    InvalidAdminCode,

    #[error("Account is banned")]
    UserBanned,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already exists")]
    UsernameTaken,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::RoleNotFound(_) => "UNKNOWN_ROLE",
            Self::FactionNotFound(_) => "UNKNOWN_FACTION",
            Self::PostNotFound(_) => "UNKNOWN_POST",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Authentication
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            // Authorization
            Self::NotAdmin => "NOT_ADMIN",
            Self::InvalidAdminCode => "INVALID_ADMIN_CODE",
            Self::UserBanned => "USER_BANNED",

            // Conflict
            Self::UsernameTaken => "USERNAME_TAKEN",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::RoleNotFound(_)
                | Self::FactionNotFound(_)
                | Self::PostNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this is an authentication error (who are you?)
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::InvalidCredentials)
    }

    /// Check if this is an authorization error (you may not)
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotAdmin | Self::InvalidAdminCode | Self::UserBanned
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameTaken)
    }
}
