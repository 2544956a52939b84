//! Middleware Module
//!
//! This module contains all HTTP middleware for the backend server.
//! Middleware functions process requests before they reach handlers.
//!
//! # Architecture
//!
//! - **`auth`** - Identity resolution for JSON routes (401) and HTML pages
//!   (302 to `/auth`), plus the `AuthUser` extractor
//! - **`internal_token`** - `internal-token` header check for the company API
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use todoapp::backend::middleware::require_identity;
//! use todoapp::backend::server::AppState;
//!
//! fn protected(state: AppState) -> Router<AppState> {
//!     Router::new()
//!         .route("/todo", get(todoapp::backend::todos::read_all))
//!         .route_layer(from_fn_with_state(state, require_identity))
//! }
//! ```

pub mod auth;
pub mod internal_token;

pub use auth::{require_identity, require_page_identity, AuthUser, LOGIN_PATH};
pub use internal_token::{require_internal_token, INTERNAL_TOKEN_HEADER, INTERNAL_TOKEN_INVALID};
