//! To-do App - Main Library
//!
//! A multi-user to-do list web application: user registration, cookie and
//! bearer-token authentication, and CRUD on to-do items scoped to their owner,
//! exposed both as a JSON API and as server-rendered HTML pages.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared by every layer
//!   - To-do record, request payload and field constraints
//!   - Application configuration
//!   - Error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routes and middleware
//!   - Auth and to-do services over SQLite
//!   - Tera-rendered pages
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use todoapp::backend::server::init::create_app;
//! use todoapp::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.server_port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - Custom error types in `shared::error` and `backend::error`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
