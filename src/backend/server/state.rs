/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The SQLite connection pool
 * - The auth and to-do services built on that pool
 * - The parsed page templates
 * - The application configuration
 *
 * # Thread Safety
 *
 * Every field is cheap to clone and shareable across tasks: the pool and the
 * services are reference counted internally, templates and config sit behind
 * `Arc`.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`.
 *
 * # Example
 *
 * ```rust
 * use todoapp::backend::todos::TodoService;
 * use axum::extract::State;
 *
 * async fn handler(State(todos): State<TodoService>) {
 *     let _ = todos.list(None).await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::{AuthConfig, AuthService};
use crate::backend::error::BackendResult;
use crate::backend::pages::Templates;
use crate::backend::todos::TodoService;
use crate::shared::AppConfig;

/// Application state shared by every handler and middleware
///
/// # Fields
///
/// * `db_pool` - SQLite connection pool
/// * `auth` - Registration, credential checks and tokens
/// * `todos` - To-do CRUD
/// * `templates` - Parsed HTML templates
/// * `config` - Application configuration
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub auth: AuthService,
    pub todos: TodoService,
    pub templates: Templates,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build the services over `db_pool`
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Config` if the JWT settings are unusable and
    /// `BackendError::Template` if a page template fails to parse.
    pub fn new(db_pool: SqlitePool, config: &AppConfig) -> BackendResult<Self> {
        let auth_config = AuthConfig::from_app_config(config)?;

        Ok(Self {
            auth: AuthService::new(db_pool.clone(), auth_config),
            todos: TodoService::new(db_pool.clone()),
            templates: Templates::load()?,
            config: Arc::new(config.clone()),
            db_pool,
        })
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for TodoService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.todos.clone()
    }
}

impl FromRef<AppState> for Templates {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.templates.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
