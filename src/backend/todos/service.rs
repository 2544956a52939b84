/**
 * To-do Service
 *
 * CRUD over the `todos` table, shared by the JSON handlers and the HTML
 * pages. Each operation acquires one pooled connection and releases it when
 * it returns.
 *
 * # Ownership
 *
 * `owner_id: Option<i64>` narrows every lookup to one owner. Both surfaces
 * pass the caller's user id, so a to-do owned by someone else behaves exactly
 * like a missing one (`NotFound`).
 */

use sqlx::SqlitePool;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::todos::db;
use crate::shared::{Todo, TodoRequest};

/// Message returned when no to-do matches the id (and owner)
pub const TODO_NOT_FOUND: &str = "ToDo item not found.";

#[derive(Clone)]
pub struct TodoService {
    pool: SqlitePool,
}

impl TodoService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List to-dos, ordered by id
    pub async fn list(&self, owner_id: Option<i64>) -> BackendResult<Vec<Todo>> {
        let mut conn = self.pool.acquire().await?;
        Ok(db::list_todos(&mut *conn, owner_id).await?)
    }

    /// Get one to-do
    ///
    /// # Errors
    /// `NotFound` if the id does not exist or belongs to another owner
    pub async fn get(&self, id: i64, owner_id: Option<i64>) -> BackendResult<Todo> {
        let mut conn = self.pool.acquire().await?;
        db::get_todo(&mut *conn, id, owner_id)
            .await?
            .ok_or_else(|| BackendError::not_found(TODO_NOT_FOUND))
    }

    /// Validate and insert a to-do for `owner_id`
    pub async fn create(&self, request: TodoRequest, owner_id: i64) -> BackendResult<Todo> {
        let request = normalize(request);
        request.validate()?;

        let mut conn = self.pool.acquire().await?;
        let todo = db::insert_todo(&mut *conn, &request, owner_id).await?;

        tracing::info!("Created todo {} for user {}", todo.id, owner_id);
        Ok(todo)
    }

    /// Validate and overwrite a to-do
    ///
    /// Validation runs before the lookup, so an invalid request against a
    /// missing id reports the validation error.
    pub async fn update(
        &self,
        id: i64,
        request: TodoRequest,
        owner_id: Option<i64>,
    ) -> BackendResult<Todo> {
        let request = normalize(request);
        request.validate()?;

        let mut conn = self.pool.acquire().await?;
        let todo = db::update_todo(&mut *conn, id, &request, owner_id)
            .await?
            .ok_or_else(|| BackendError::not_found(TODO_NOT_FOUND))?;

        tracing::info!("Updated todo {}", todo.id);
        Ok(todo)
    }

    /// Delete a to-do
    pub async fn delete(&self, id: i64, owner_id: Option<i64>) -> BackendResult<()> {
        let mut conn = self.pool.acquire().await?;

        if db::delete_todo(&mut *conn, id, owner_id).await? == 0 {
            return Err(BackendError::not_found(TODO_NOT_FOUND));
        }

        tracing::info!("Deleted todo {}", id);
        Ok(())
    }

    /// Flip the `complete` flag of a to-do
    pub async fn toggle_complete(&self, id: i64, owner_id: Option<i64>) -> BackendResult<Todo> {
        let mut conn = self.pool.acquire().await?;
        db::toggle_todo(&mut *conn, id, owner_id)
            .await?
            .ok_or_else(|| BackendError::not_found(TODO_NOT_FOUND))
    }
}

/// Store blank descriptions as NULL
fn normalize(mut request: TodoRequest) -> TodoRequest {
    request.description = request
        .description
        .filter(|description| !description.trim().is_empty());
    request
}
