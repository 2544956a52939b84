//! API integration tests
//!
//! Integration tests for all HTTP endpoints

mod auth_test;
mod pages_test;
mod todo_test;
