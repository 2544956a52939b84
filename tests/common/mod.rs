//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Database test fixtures
//! - Test server and user helpers
//! - Custom assertion macros


// Re-export commonly used utilities
pub use auth_helpers::*;
pub use database::*;
