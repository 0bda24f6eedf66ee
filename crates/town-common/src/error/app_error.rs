//! Application error types
//!
//! Unified error handling for the entire application. The `Display` text of
//! each variant is what callers see in the `error` field of a response body.

use serde::Serialize;
use std::fmt;
use town_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    Unauthenticated(String),

    // Authorization errors
    #[error("{0}")]
    Forbidden(String),

    // Validation errors
    #[error("{0}")]
    Validation(String),

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("{0}")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::Validation(_) => 400,

            // 401 Unauthorized
            Self::InvalidCredentials | Self::Unauthenticated(_) => 401,

            // 403 Forbidden
            Self::Forbidden(_) => 403,

            // 404 Not Found
            Self::NotFound(_) => 404,

            // 409 Conflict
            Self::Conflict(_) => 409,

            // 500 Internal Server Error
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,

            // Map domain errors to appropriate status codes
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_authentication() {
                    401
                } else if e.is_authorization() {
                    403
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
        }
    }

    /// Get error code for logs and structured responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthenticated(_) => "UNAUTHENTICATED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code())
    }

    /// Create a not found error
    #[must_use]
    pub fn not_found(msg: impl fmt::Display) -> Self {
        Self::NotFound(msg.to_string())
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create a forbidden error
    #[must_use]
    pub fn forbidden(msg: impl fmt::Display) -> Self {
        Self::Forbidden(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error body shared by every failing response: `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidCredentials.status_code(), 401);
        assert_eq!(AppError::Unauthenticated("Admin ID required".into()).status_code(), 401);
        assert_eq!(AppError::forbidden("Not authorized").status_code(), 403);
        assert_eq!(AppError::not_found("User not found").status_code(), 404);
        assert_eq!(AppError::validation("bad").status_code(), 400);
        assert_eq!(AppError::Conflict("taken".into()).status_code(), 409);
        assert_eq!(AppError::Database("down".into()).status_code(), 500);
    }

    #[test]
    fn test_domain_status_codes() {
        assert_eq!(AppError::from(DomainError::PostNotFound(1)).status_code(), 404);
        assert_eq!(AppError::from(DomainError::Unauthenticated).status_code(), 401);
        assert_eq!(AppError::from(DomainError::InvalidAdminCode).status_code(), 403);
        assert_eq!(AppError::from(DomainError::UserBanned).status_code(), 403);
        assert_eq!(AppError::from(DomainError::ValidationError("name".into())).status_code(), 400);
        assert_eq!(AppError::from(DomainError::UsernameTaken).status_code(), 409);
        assert_eq!(
            AppError::from(DomainError::DatabaseError("x".into())).status_code(),
            500
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::InvalidCredentials.error_code(), "INVALID_CREDENTIALS");
        assert_eq!(AppError::not_found("x").error_code(), "NOT_FOUND");
        assert_eq!(AppError::from(DomainError::NotAdmin).error_code(), "NOT_ADMIN");
    }

    #[test]
    fn test_client_server_split() {
        assert!(AppError::InvalidCredentials.is_client_error());
        assert!(!AppError::InvalidCredentials.is_server_error());
        assert!(AppError::internal(anyhow::anyhow!("boom")).is_server_error());
    }

    #[test]
    fn test_error_response_body() {
        let body = ErrorResponse::from(AppError::Conflict("Username already exists".into()));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "error": "Username already exists" })
        );
    }

    #[test]
    fn test_internal_keeps_fault_text() {
        let err = AppError::internal(anyhow::anyhow!("connection reset by peer"));
        assert_eq!(err.to_string(), "connection reset by peer");
    }
}
