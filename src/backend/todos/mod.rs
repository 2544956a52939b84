//! To-do Module
//!
//! To-do persistence, the `TodoService` shared by both surfaces, and the JSON
//! handlers.

pub mod db;
pub mod service;
pub mod handlers;

pub use handlers::*;
pub use service::{TodoService, TODO_NOT_FOUND};
