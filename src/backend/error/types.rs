/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in services and HTTP handlers and can be converted
 * to HTTP responses.
 *
 * # Error Categories
 *
 * ## Request Errors
 *
 * Caused by the caller and reported with a 4xx status:
 * - Validation failures (field constraints, malformed request bodies)
 * - Unknown or foreign records (not found)
 * - Missing, invalid or expired credentials (unauthorized)
 * - Duplicate usernames or emails (conflict)
 *
 * ## Internal Errors
 *
 * Anything raised by the database, the password hasher, the token encoder or
 * the template engine. These are logged and reported as a generic 500.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::{ConfigError, SharedError};

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use todoapp::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("ToDo item not found.");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Internal token Invalid.");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (e.g. bad internal token header)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// No row matches the requested id (and owner, when scoped)
    #[error("Not found: {message}")]
    NotFound {
        message: String,
    },

    /// Missing, malformed, expired or tampered credentials
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
    },

    /// Unique constraint on username or email would be violated
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// Field validation error, from a service or a rejected request body
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error at startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Password hashing or verification error
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token encoding error
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Template loading or rendering error
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Invalid configuration detected while building the application state
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `NotFound` - 404 Not Found
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Conflict` - 409 Conflict
    /// - `SharedError` - 400 Bad Request
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Database(_)
            | Self::Migration(_)
            | Self::PasswordHash(_)
            | Self::Token(_)
            | Self::Template(_)
            | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error is the caller's fault
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Get the error message shown to the caller
    ///
    /// Internal errors are not described to the caller; their details only go
    /// to the log.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. }
            | Self::NotFound { message }
            | Self::Unauthorized { message }
            | Self::Conflict { message } => message.clone(),
            Self::SharedError(SharedError::ValidationError { message, .. }) => message.clone(),
            _ => "Internal server error".to_string(),
        }
    }

    /// Name of the field a validation error refers to
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::SharedError(err) => err.field(),
            _ => None,
        }
    }
}
