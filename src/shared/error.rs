//! Shared Error Types
//!
//! This module defines error types that are shared between the API surface and
//! the backend services. They carry no HTTP details, so the same validation
//! failures can be rendered as JSON or re-displayed on an HTML form.
//!
//! # Usage
//!
//! ```rust
//! use todoapp::shared::error::SharedError;
//!
//! let error = SharedError::validation("priority", "Priority must be between 1 and 5");
//! assert_eq!(error.field(), Some("priority"));
//! ```
use thiserror::Error;

/// Shared error types that can occur in both the API and the services
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
        }
    }
}
