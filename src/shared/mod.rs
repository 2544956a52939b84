//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the JSON API, the HTML pages and the backend services. Nothing here depends
//! on the HTTP stack, so these types compile without the `ssr` feature.

/// To-do record and request types
pub mod todo;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use todo::{Todo, TodoRequest, TransactionResponse};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
