//! To-do HTTP Handlers
//!
//! JSON handlers for the to-do endpoints. All of them sit behind the identity
//! middleware and scope every call to the caller's user id.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::backend::error::{ApiJson, BackendResult};
use crate::backend::middleware::AuthUser;
use crate::backend::todos::service::TodoService;
use crate::shared::{Todo, TodoRequest, TransactionResponse};

/// `GET /todo` - the caller's to-dos
pub async fn read_all(
    State(todos): State<TodoService>,
    AuthUser(identity): AuthUser,
) -> BackendResult<Json<Vec<Todo>>> {
    let items = todos.list(Some(identity.user_id)).await?;
    Ok(Json(items))
}

/// `GET /todo/{id}`
pub async fn read_todo(
    State(todos): State<TodoService>,
    AuthUser(identity): AuthUser,
    Path(todo_id): Path<i64>,
) -> BackendResult<Json<Todo>> {
    let todo = todos.get(todo_id, Some(identity.user_id)).await?;
    Ok(Json(todo))
}

/// `POST /create-todo`
pub async fn create_todo(
    State(todos): State<TodoService>,
    AuthUser(identity): AuthUser,
    ApiJson(request): ApiJson<TodoRequest>,
) -> BackendResult<(StatusCode, Json<Todo>)> {
    let todo = todos.create(request, identity.user_id).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// `PUT /update-todo/{id}`
pub async fn update_todo(
    State(todos): State<TodoService>,
    AuthUser(identity): AuthUser,
    Path(todo_id): Path<i64>,
    ApiJson(request): ApiJson<TodoRequest>,
) -> BackendResult<Json<Todo>> {
    let todo = todos.update(todo_id, request, Some(identity.user_id)).await?;
    Ok(Json(todo))
}

/// `DELETE /delete-todo/{id}`
pub async fn delete_todo(
    State(todos): State<TodoService>,
    AuthUser(identity): AuthUser,
    Path(todo_id): Path<i64>,
) -> BackendResult<Json<TransactionResponse>> {
    todos.delete(todo_id, Some(identity.user_id)).await?;
    Ok(Json(TransactionResponse::successful(StatusCode::OK.as_u16())))
}
