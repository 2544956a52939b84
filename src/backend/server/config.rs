/**
 * Database Configuration
 *
 * This module opens the SQLite connection pool and applies the embedded
 * migrations.
 *
 * # Connection Sources
 *
 * - A file URL such as `sqlite://todos.db` opens (or creates) that file
 * - `sqlite::memory:` opens a private in-memory database, used by tests
 *
 * # Error Handling
 *
 * Unlike optional services, the database is required: connection and
 * migration failures are returned to the caller and stop startup.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::backend::error::BackendResult;

/// URL of a private in-memory database
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Open the connection pool for `database_url` and run migrations
///
/// # Arguments
///
/// * `database_url` - SQLite URL (`sqlite://path.db` or `sqlite::memory:`)
///
/// # Errors
///
/// Returns `BackendError::Database` if the URL is invalid or the file cannot
/// be opened, and `BackendError::Migration` if a migration fails.
pub async fn connect_database(database_url: &str) -> BackendResult<SqlitePool> {
    if database_url == IN_MEMORY_URL {
        return connect_in_memory().await;
    }

    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Open a migrated in-memory database
///
/// Every connection to `sqlite::memory:` is a separate database, so the pool
/// holds exactly one connection and never recycles it.
pub async fn connect_in_memory() -> BackendResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(IN_MEMORY_URL)?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply the migrations embedded from `migrations/`
pub async fn run_migrations(pool: &SqlitePool) -> BackendResult<()> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
