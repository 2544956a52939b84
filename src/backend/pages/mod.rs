//! Pages Module
//!
//! Server-rendered HTML surface. Handlers here call the same `AuthService`
//! and `TodoService` as the JSON API; they answer with rendered templates or
//! 302 redirects instead of JSON.
//!
//! # Module Structure
//!
//! ```text
//! pages/
//! ├── mod.rs         - Redirect helper and exports
//! ├── templates.rs   - Embedded Tera templates
//! ├── auth_pages.rs  - Login, logout and registration forms
//! └── todo_pages.rs  - To-do list and forms
//! ```

pub mod templates;
pub mod auth_pages;
pub mod todo_pages;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

pub use templates::Templates;

/// Path of the to-do list page
pub const TODOS_PATH: &str = "/todos";

/// 302 Found redirect to `location`
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
