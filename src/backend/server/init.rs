/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the database pool and apply migrations
 * 2. Build the services and templates into `AppState`
 * 3. Create and configure the router
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::error::BackendResult;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::connect_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Validated application configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Fails if the database cannot be opened or migrated, or if the auth
/// settings or templates are invalid. The server does not start without them.
pub async fn create_app(config: &AppConfig) -> BackendResult<Router<()>> {
    tracing::info!("Initializing to-do backend server");

    let db_pool = connect_database(&config.database_url).await?;
    build_app(db_pool, config)
}

/// Build the router over an existing, migrated pool
pub fn build_app(db_pool: SqlitePool, config: &AppConfig) -> BackendResult<Router<()>> {
    let app_state = AppState::new(db_pool, config)?;
    tracing::info!("Application state initialized");

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
