use thiserror::Error;

use foodorder_core::DomainError;

use crate::ports::RepositoryError;

/// Failure of an application-level use case.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Business rule failure; the message is meant for the caller as-is.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Storage failed while looking something up.
    #[error("repository failure: {0}")]
    Repository(#[from] RepositoryError),

    /// The state change was stored but the event could not be handed over.
    #[error("event publication failed: {0}")]
    Publish(String),
}

impl ApplicationError {
    /// Domain message, if this is a business rule failure.
    pub fn domain_message(&self) -> Option<&str> {
        match self {
            ApplicationError::Domain(err) => Some(err.message()),
            _ => None,
        }
    }
}
