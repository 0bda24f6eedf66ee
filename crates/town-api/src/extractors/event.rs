//! Invocation event
//!
//! The shape a subsystem handler receives: HTTP method, query string
//! parameters, headers and an optional raw body.

use std::collections::HashMap;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Query, Request},
    http::{HeaderMap, Method},
};
use serde::{Deserialize, Serialize};

use crate::response::HandlerError;

/// Inbound invocation event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    pub http_method: String,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

impl FunctionEvent {
    /// Create an event with no query, headers or body
    pub fn new(http_method: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            ..Self::default()
        }
    }

    /// Set a query string parameter
    pub fn with_query(mut self, name: &str, value: &str) -> Self {
        self.query_string_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Set the `action` query parameter
    pub fn with_action(self, action: &str) -> Self {
        self.with_query("action", action)
    }

    /// Set a header
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Set the raw body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Build an event from the parts of an HTTP request
    pub fn from_http(
        method: &Method,
        query: Option<HashMap<String, String>>,
        headers: &HeaderMap,
        body: &[u8],
    ) -> Self {
        let headers = headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        let body = (!body.is_empty()).then(|| String::from_utf8_lossy(body).into_owned());

        Self {
            http_method: method.as_str().to_string(),
            query_string_parameters: query,
            headers: Some(headers),
            body,
        }
    }

    /// Upper-cased HTTP method
    pub fn method(&self) -> String {
        self.http_method.to_ascii_uppercase()
    }

    /// Whether this is a CORS preflight
    pub fn is_preflight(&self) -> bool {
        self.http_method.eq_ignore_ascii_case("OPTIONS")
    }

    /// Query string parameter by exact name
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|q| q.get(name))
            .map(String::as_str)
    }

    /// The `action` query parameter, empty when absent
    pub fn action(&self) -> &str {
        self.query("action").unwrap_or_default()
    }

    /// Header value, matching the name case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref().and_then(|h| {
            h.iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        })
    }

    /// Raw body, with a missing or blank body read as `{}`
    pub fn body_or_empty(&self) -> &str {
        match self.body.as_deref() {
            Some(body) if !body.trim().is_empty() => body,
            _ => "{}",
        }
    }
}

#[async_trait]
impl<S> FromRequest<S> for FunctionEvent
where
    S: Send + Sync,
{
    type Rejection = HandlerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let method = req.method().clone();
        let headers = req.headers().clone();
        let query = req
            .uri()
            .query()
            .and_then(|_| Query::<HashMap<String, String>>::try_from_uri(req.uri()).ok())
            .map(|Query(params)| params);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| HandlerError::InvalidBody(e.to_string()))?;

        Ok(Self::from_http(&method, query, &headers, &bytes))
    }
}
