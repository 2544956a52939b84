//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by surface into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── api_routes.rs   - JSON API and company routes
//! └── page_routes.rs  - Server-rendered HTML routes
//! ```
//!
//! # Route Types
//!
//! ## API Routes
//!
//! - `POST /auth/token` - Bearer token
//! - `POST /auth/create/user` - User registration
//! - `GET /auth/me` - Current user
//! - `GET /todo`, `GET /todo/{id}`, `POST /create-todo`,
//!   `PUT /update-todo/{id}`, `DELETE /delete-todo/{id}` - To-do CRUD
//! - `GET /companyapis/`, `GET /companyapis/employees` - Company info
//!
//! ## Page Routes
//!
//! - `/auth`, `/auth/logout`, `/auth/register` - Login and registration
//! - `/todos`, `/todos/add-todo`, `/todos/edit-todo/{id}`,
//!   `/todos/delete/{id}`, `/todos/complete/{id}` - To-do pages
//!
//! # Example
//!
//! ```rust,no_run
//! use todoapp::backend::routes::create_router;
//! use todoapp::backend::server::{config::connect_in_memory, AppState};
//! use todoapp::shared::AppConfig;
//!
//! # async fn example() {
//! let config = AppConfig::default();
//! let pool = connect_in_memory().await.unwrap();
//! let router = create_router(AppState::new(pool, &config).unwrap());
//! # }
//! ```

/// Main router creation
pub mod router;

/// JSON API routes
pub mod api_routes;

/// HTML page routes
pub mod page_routes;

// Re-export commonly used functions
pub use router::create_router;
