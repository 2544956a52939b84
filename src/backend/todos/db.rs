//! Database operations for to-dos
//!
//! Every query that takes `owner_id: Option<i64>` filters with
//! `(? IS NULL OR owner_id = ?)`: `None` matches any owner, `Some(id)` only
//! rows owned by `id`.

use sqlx::SqliteConnection;

use crate::shared::{Todo, TodoRequest};

/// List to-dos, ordered by id
pub async fn list_todos(
    conn: &mut SqliteConnection,
    owner_id: Option<i64>,
) -> Result<Vec<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        r#"
        SELECT id, title, description, priority, complete, owner_id
        FROM todos
        WHERE (? IS NULL OR owner_id = ?)
        ORDER BY id
        "#,
    )
    .bind(owner_id)
    .bind(owner_id)
    .fetch_all(conn)
    .await
}

/// Get a to-do by id
pub async fn get_todo(
    conn: &mut SqliteConnection,
    id: i64,
    owner_id: Option<i64>,
) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        r#"
        SELECT id, title, description, priority, complete, owner_id
        FROM todos
        WHERE id = ? AND (? IS NULL OR owner_id = ?)
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(owner_id)
    .fetch_optional(conn)
    .await
}

/// Insert a to-do for `owner_id`
pub async fn insert_todo(
    conn: &mut SqliteConnection,
    request: &TodoRequest,
    owner_id: i64,
) -> Result<Todo, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        r#"
        INSERT INTO todos (title, description, priority, complete, owner_id)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, title, description, priority, complete, owner_id
        "#,
    )
    .bind(&request.title)
    .bind(&request.description)
    .bind(request.priority)
    .bind(request.complete.unwrap_or(false))
    .bind(owner_id)
    .fetch_one(conn)
    .await
}

/// Overwrite a to-do's fields
///
/// `complete` keeps its stored value when the request omits it.
pub async fn update_todo(
    conn: &mut SqliteConnection,
    id: i64,
    request: &TodoRequest,
    owner_id: Option<i64>,
) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        r#"
        UPDATE todos
        SET title = ?, description = ?, priority = ?, complete = COALESCE(?, complete)
        WHERE id = ? AND (? IS NULL OR owner_id = ?)
        RETURNING id, title, description, priority, complete, owner_id
        "#,
    )
    .bind(&request.title)
    .bind(&request.description)
    .bind(request.priority)
    .bind(request.complete)
    .bind(id)
    .bind(owner_id)
    .bind(owner_id)
    .fetch_optional(conn)
    .await
}

/// Delete a to-do, returning the number of rows removed
pub async fn delete_todo(
    conn: &mut SqliteConnection,
    id: i64,
    owner_id: Option<i64>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM todos WHERE id = ? AND (? IS NULL OR owner_id = ?)")
        .bind(id)
        .bind(owner_id)
        .bind(owner_id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected())
}

/// Flip a to-do's `complete` flag
pub async fn toggle_todo(
    conn: &mut SqliteConnection,
    id: i64,
    owner_id: Option<i64>,
) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        r#"
        UPDATE todos
        SET complete = NOT complete
        WHERE id = ? AND (? IS NULL OR owner_id = ?)
        RETURNING id, title, description, priority, complete, owner_id
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(owner_id)
    .fetch_optional(conn)
    .await
}
