//! Typed request bodies
//!
//! Deserializes an event body into a request DTO and runs its `validator`
//! rules. Malformed JSON is a 400, like a failed validation.

use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::HandlerError;

use super::FunctionEvent;

/// Deserialize the event body without validating it
pub fn json_body<T: DeserializeOwned>(event: &FunctionEvent) -> Result<T, HandlerError> {
    serde_json::from_str(event.body_or_empty()).map_err(|e| HandlerError::InvalidBody(e.to_string()))
}

/// Deserialize and validate the event body
pub fn validated_body<T>(event: &FunctionEvent) -> Result<T, HandlerError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = json_body(event)?;
    value.validate()?;
    Ok(value)
}
