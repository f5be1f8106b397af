//! API envelope types
//!
//! Every backend exchange uses the same wrapper:
//! ```json
//! { "data": { ... } }      // request bodies and successful responses
//! { "error": "message" }   // failed responses
//! ```
//!
//! Success is decided by the envelope, never by the HTTP status: a `400`
//! carrying `data` and no `error` is a success, a `200` carrying `error` is
//! a failure. The backend relies on this.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body wrapper: `{"data": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Decoded response envelope
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    /// No `error`; `None` when `data` is absent or null
    Success(Option<T>),
    /// The backend's `error` message
    Failure(String),
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode a parsed response body.
    ///
    /// Fails only when `data` is present but does not fit `T`.
    pub fn from_value(mut body: Value) -> Result<Self, serde_json::Error> {
        if let Some(message) = body.get("error").and_then(error_message) {
            return Ok(Self::Failure(message));
        }

        match body.get_mut("data").map(Value::take) {
            None | Some(Value::Null) => Ok(Self::Success(None)),
            Some(data) => serde_json::from_value(data).map(|d| Self::Success(Some(d))),
        }
    }
}

/// Message for an `error` field that counts as set.
///
/// Null, `false`, `0` and the empty string do not.
fn error_message(error: &Value) -> Option<String> {
    match error {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
