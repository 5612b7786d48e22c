//! Unified error taxonomy for the roster core.
//!
//! Rules, ports, and use cases signal failures by returning these values;
//! nothing in the core constructs wire-shaped error objects. A single
//! translator in [`crate::wire`] converts a [`CoreError`] at the boundary.

use thiserror::Error;

use crate::application::ports::StorageError;
use crate::domain::validation::{Attributes, ValidationError};

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;

/// Root error type for core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// One or more business rules rejected the command.
    ///
    /// Always the complete list, never truncated to the first violation, so
    /// a caller can fix everything in one round trip.
    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<ValidationError>),

    /// The lookup target does not exist.
    #[error("{kind} not found")]
    NotFound {
        kind: &'static str,
        attributes: Attributes,
    },

    /// A unique key clashed on write.
    #[error("{kind} is duplicated")]
    Duplicated {
        kind: &'static str,
        attributes: Attributes,
    },

    /// The optimistic version check failed on write; a concurrent writer
    /// got there first. Never retried by the core.
    #[error("the record was modified by a concurrent writer")]
    OutdatedVersion { attributes: Attributes },

    /// Access denied by policy.
    #[error("{message}")]
    Forbidden {
        message: String,
        attributes: Attributes,
    },

    /// Structurally invalid input that slipped past the transport layer.
    #[error("{message}")]
    BadRequest {
        message: String,
        attributes: Attributes,
    },

    /// Anything unanticipated. Detail is logged at the boundary and never
    /// leaves the process in a response body.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl From<StorageError> for CoreError {
    fn from(err: StorageError) -> Self {
        match err {
            // The create path maps DuplicateKey itself to attach entity
            // context; reaching this arm means a read path saw it.
            StorageError::DuplicateKey => Self::Internal {
                message: "duplicate key reported outside a write".to_string(),
            },
            StorageError::StaleVersion => Self::OutdatedVersion {
                attributes: Attributes::new(),
            },
            StorageError::Backend(message) => Self::Internal { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_failures_become_internal() {
        let err: CoreError = StorageError::Backend("io".into()).into();
        assert!(matches!(err, CoreError::Internal { .. }));
    }

    #[test]
    fn stale_version_becomes_outdated_version() {
        let err: CoreError = StorageError::StaleVersion.into();
        assert!(matches!(err, CoreError::OutdatedVersion { .. }));
    }
}
