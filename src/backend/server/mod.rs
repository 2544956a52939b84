//! Server Module
//!
//! This module contains all server-side code for initializing and configuring
//! the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Database connection and migrations
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - SQLite pool and migrations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Database**: Opens the pool and applies embedded migrations
//! 2. **State Creation**: Builds `AuthService`, `TodoService` and templates
//! 3. **Router Creation**: Configures all routes and middleware
//!
//! # Example
//!
//! ```rust,no_run
//! use todoapp::backend::server::create_app;
//! use todoapp::shared::AppConfig;
//!
//! # async fn example() {
//! let config = AppConfig::from_env().unwrap();
//! let app = create_app(&config).await.unwrap();
//! # }
//! ```

/// Application state management
pub mod state;

/// Database configuration
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::{build_app, create_app};
