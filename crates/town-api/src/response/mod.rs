//! Response envelope and handler error
//!
//! Every subsystem answers with an [`Envelope`]: a status code, a flat header
//! map, a JSON body serialized to a string, and `isBase64Encoded: false`.

use std::collections::BTreeMap;

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use town_common::ErrorResponse;
use town_service::ServiceError;

/// Message for an unrouted (method, action) pair
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";

// ============================================================================
// CORS presets
// ============================================================================

/// Preflight answer for one subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cors {
    pub allow_methods: &'static str,
    pub allow_headers: &'static str,
}

impl Cors {
    pub const IDENTITY: Cors = Cors {
        allow_methods: "GET, POST, PUT, OPTIONS",
        allow_headers: "Content-Type, X-User-Token",
    };

    pub const ADMIN: Cors = Cors {
        allow_methods: "GET, POST, PUT, DELETE, OPTIONS",
        allow_headers: "Content-Type, X-Admin-Id, X-Admin-Code",
    };

    pub const FORUM: Cors = Cors {
        allow_methods: "GET, POST, PUT, OPTIONS",
        allow_headers: "Content-Type, X-User-Id",
    };
}

// ============================================================================
// Envelope
// ============================================================================

/// Uniform handler response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl Envelope {
    /// JSON response with the standard headers
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Result<Self, HandlerError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| HandlerError::Internal(anyhow::Error::new(e)))?;
        Ok(Self::with_body(status_code, body))
    }

    /// 200 response carrying `payload`
    pub fn ok<T: Serialize>(payload: &T) -> Result<Self, HandlerError> {
        Self::json(200, payload)
    }

    /// `{"error": message}` response
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        let body = serde_json::to_string(&ErrorResponse::new(message))
            .unwrap_or_else(|_| r#"{"error":"Internal error"}"#.to_string());
        Self::with_body(status_code, body)
    }

    /// Answer to an `OPTIONS` request: empty body plus the subsystem's CORS policy
    pub fn preflight(cors: Cors) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());
        headers.insert(
            "Access-Control-Allow-Methods".to_string(),
            cors.allow_methods.to_string(),
        );
        headers.insert(
            "Access-Control-Allow-Headers".to_string(),
            cors.allow_headers.to_string(),
        );
        Self {
            status_code: 200,
            headers,
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    fn with_body(status_code: u16, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());
        Self {
            status_code,
            headers,
            body,
            is_base64_encoded: false,
        }
    }

    /// Parse the body back into JSON
    pub fn json_body(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.body)
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;

        let headers = response.headers_mut();
        for (name, value) in self.headers {
            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => warn!(header = %name, "Dropping invalid response header"),
            }
        }
        response
    }
}

// ============================================================================
// Handler error
// ============================================================================

/// Error at the handler boundary, turned into an envelope
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Endpoint not found")]
    EndpointNotFound,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Internal(#[source] anyhow::Error),
}

impl HandlerError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EndpointNotFound => 404,
            Self::InvalidBody(_) => 400,
            Self::Service(e) => e.status_code(),
            Self::Internal(_) => 500,
        }
    }

    /// Error code for logs
    pub fn error_code(&self) -> &str {
        match self {
            Self::EndpointNotFound => "ENDPOINT_NOT_FOUND",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::Service(e) => e.error_code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert into an error envelope, logging faults
    pub fn into_envelope(self) -> Envelope {
        let status = self.status_code();
        if status >= 500 {
            error!(error = %self, code = self.error_code(), "Handler fault");
        } else {
            warn!(error = %self, code = self.error_code(), status, "Request rejected");
        }
        Envelope::error(status, self.to_string())
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        self.into_envelope().into_response()
    }
}

impl From<validator::ValidationErrors> for HandlerError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Service(ServiceError::from(errors))
    }
}

/// Result type for handler dispatch
pub type HandlerResult = Result<Envelope, HandlerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope() {
        let envelope = Envelope::error(404, ENDPOINT_NOT_FOUND);
        assert_eq!(envelope.status_code, 404);
        assert!(!envelope.is_base64_encoded);
        assert_eq!(envelope.headers["Content-Type"], "application/json");
        assert_eq!(envelope.headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(envelope.json_body().unwrap()["error"], "Endpoint not found");
    }

    #[test]
    fn test_preflight_envelope() {
        let envelope = Envelope::preflight(Cors::ADMIN);
        assert_eq!(envelope.status_code, 200);
        assert!(envelope.body.is_empty());
        assert_eq!(
            envelope.headers["Access-Control-Allow-Methods"],
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert_eq!(
            envelope.headers["Access-Control-Allow-Headers"],
            "Content-Type, X-Admin-Id, X-Admin-Code"
        );
    }

    #[test]
    fn test_envelope_serializes_camel_case() {
        let envelope = Envelope::ok(&serde_json::json!({"likes": 3})).unwrap();
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["isBase64Encoded"], false);
        assert_eq!(json["body"], r#"{"likes":3}"#);
    }

    #[test]
    fn test_handler_error_status() {
        assert_eq!(HandlerError::EndpointNotFound.status_code(), 404);
        assert_eq!(HandlerError::InvalidBody("x".into()).status_code(), 400);
        assert_eq!(
            HandlerError::from(ServiceError::conflict("Username already exists")).status_code(),
            409
        );

        let envelope = HandlerError::Internal(anyhow::anyhow!("connection refused")).into_envelope();
        assert_eq!(envelope.status_code, 500);
        assert_eq!(envelope.json_body().unwrap()["error"], "connection refused");
    }

    #[test]
    fn test_handler_error_into_response() {
        let response = HandlerError::InvalidBody("length limit exceeded".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert_eq!(response.headers()["content-type"], "application/json");
    }
}
