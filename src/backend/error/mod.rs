//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in services and HTTP handlers and can be converted
//! to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! ├── conversion.rs - IntoResponse implementation
//! └── rejection.rs  - Body extractors that reject with BackendError
//! ```
//!
//! # Error Types
//!
//! - `NotFound` - No to-do matches the id (and owner)
//! - `Unauthorized` - Missing, invalid or expired credentials
//! - `Conflict` - Duplicate username or email on registration
//! - `SharedError` - Validation errors with field detail
//! - `Database`, `PasswordHash`, `Token`, `Template`, ... - internal failures
//!
//! The HTML pages do not return these as JSON; they map them back onto the
//! originating template (see `backend::pages`).

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

/// JSON and form extractors with structured rejections
pub mod rejection;

// Re-export commonly used types
pub use rejection::{ApiForm, ApiJson};
pub use types::BackendError;

/// Result alias used across services and handlers
pub type BackendResult<T> = Result<T, BackendError>;
