//! Contract error types for catalog service
//!
//! These errors are transport-agnostic; the REST layer decides status codes.

use thiserror::Error;

/// Catalog service errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Request input has the wrong shape or misses required fields
    #[error("Validation error: {message}")]
    Validation {
        /// Client-facing description of the problem
        message: String,
    },
    /// Storage backend failed (connectivity, constraint, timeout)
    #[error("Storage error: {message}")]
    Storage {
        /// Underlying error chain, never shown to clients in production
        message: String,
    },
}

impl CatalogError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Keep the full `anyhow` context chain as the message
    pub fn storage(error: &anyhow::Error) -> Self {
        Self::Storage {
            message: format!("{error:#}"),
        }
    }
}
