//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every business failure of the ordering domain (inactive restaurant, wrong
/// lifecycle state, inconsistent prices, missing customer/restaurant) is reported
/// through this one type. It carries only the human-readable message, which is
/// displayed verbatim so callers can surface it unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DomainError {
    message: String,
}

impl DomainError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// An identifier could not be parsed.
    pub fn invalid_id(kind: &str, reason: impl core::fmt::Display) -> Self {
        Self::new(format!("invalid {kind}: {reason}"))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
