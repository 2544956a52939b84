//! Backend Module
//!
//! This module contains all server-side code for the to-do application: an
//! Axum HTTP server exposing a JSON API and server-rendered HTML pages over
//! one SQLite database.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - User registration, bcrypt password hashing and JWT tokens
//! - Owner-scoped to-do CRUD
//! - Tera-rendered login, registration and to-do pages
//! - Route configuration and middleware
//! - Database persistence (SQLite with embedded migrations)
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Authentication, JWT tokens, user management
//! - **`todos`** - To-do persistence, service and JSON handlers
//! - **`pages`** - HTML templates and form handlers
//! - **`company`** - Internal company endpoints
//! - **`middleware`** - Identity resolution and internal token checks
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── todos/          - To-do CRUD
//! ├── pages/          - HTML pages
//! ├── company/        - Company endpoints
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! request → (optional) identity from the bearer header or `access_token`
//! cookie → one service call on a pooled connection → JSON or rendered page.
//!
//! # Error Handling
//!
//! - `BackendError` for every failure, with `status_code()` and `message()`
//! - JSON handlers return it directly (`IntoResponse`)
//! - Page handlers turn validation and not-found errors into re-rendered forms
//!   or redirects

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Authentication and user management
#[cfg(feature = "ssr")]
pub mod auth;

/// To-do CRUD
#[cfg(feature = "ssr")]
pub mod todos;

/// Server-rendered HTML pages
#[cfg(feature = "ssr")]
pub mod pages;

/// Internal company endpoints
#[cfg(feature = "ssr")]
pub mod company;

/// Middleware for request processing
#[cfg(feature = "ssr")]
pub mod middleware;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use server::{create_app, AppState};
#[cfg(feature = "ssr")]
pub use error::BackendError;
