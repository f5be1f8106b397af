//! Client-side validation error

use thiserror::Error;

/// One or more rule violations found before a request is sent.
///
/// Messages are kept in the order the rules were checked; `Display` joins
/// them so callers can surface the error through the same path as
/// transport and application errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .messages.join(", "))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    /// Create an error with a single message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    /// `Ok(())` when no rule was violated, otherwise an error carrying every message
    pub fn check(messages: Vec<String>) -> Result<(), Self> {
        if messages.is_empty() {
            Ok(())
        } else {
            Err(Self { messages })
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|m| m == message)
    }
}
