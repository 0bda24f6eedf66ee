//! Request extraction
//!
//! Converts inbound HTTP requests into invocation events and pulls typed,
//! validated request bodies out of them.

mod event;
mod validated;

pub use event::FunctionEvent;
pub use validated::{json_body, validated_body};
