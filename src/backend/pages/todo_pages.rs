/**
 * To-do Pages
 *
 * List, create, edit, delete and complete to-dos through HTML forms. Every
 * handler runs behind the page identity middleware and scopes its service
 * call to the logged-in user.
 *
 * # Outcomes
 *
 * - Success: 302 back to `/todos` (or the rendered page for GETs)
 * - Validation failure: the form is rendered again with the message (400)
 * - Missing or foreign to-do: 302 back to `/todos`
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use tera::Context;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::AuthUser;
use crate::backend::pages::templates::{message_context, Templates, ADD_TODO, EDIT_TODO, HOME};
use crate::backend::pages::{found, TODOS_PATH};
use crate::backend::auth::sessions::Identity;
use crate::backend::todos::TodoService;
use crate::shared::{SharedError, TodoRequest};

/// Fields posted by the add and edit forms
#[derive(Deserialize, Debug)]
pub struct TodoForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: String,
}

impl TodoForm {
    /// Convert to a request; an unparsable priority fails range validation
    fn into_request(self) -> TodoRequest {
        TodoRequest {
            title: self.title,
            description: Some(self.description),
            priority: self.priority.trim().parse().unwrap_or(0),
            complete: None,
        }
    }
}

fn page_context(identity: &Identity, message: &str) -> Context {
    let mut context = message_context(message);
    context.insert("user", identity);
    context
}

/// Redirect to the list when the to-do does not exist for this user
fn or_back_to_list(result: BackendResult<Response>) -> BackendResult<Response> {
    match result {
        Err(BackendError::NotFound { message }) => {
            tracing::debug!("{}; redirecting to {}", message, TODOS_PATH);
            Ok(found(TODOS_PATH))
        }
        other => other,
    }
}

/// `GET /todos`
pub async fn list_page(
    State(todos): State<TodoService>,
    State(templates): State<Templates>,
    AuthUser(identity): AuthUser,
) -> BackendResult<Html<String>> {
    let items = todos.list(Some(identity.user_id)).await?;

    let mut context = page_context(&identity, "");
    context.insert("todos", &items);
    templates.render(HOME, &context)
}

/// `GET /todos/add-todo`
pub async fn add_page(
    State(templates): State<Templates>,
    AuthUser(identity): AuthUser,
) -> BackendResult<Html<String>> {
    templates.render(ADD_TODO, &page_context(&identity, ""))
}

/// `POST /todos/add-todo`
pub async fn add_todo(
    State(todos): State<TodoService>,
    State(templates): State<Templates>,
    AuthUser(identity): AuthUser,
    Form(form): Form<TodoForm>,
) -> BackendResult<Response> {
    match todos.create(form.into_request(), identity.user_id).await {
        Ok(_) => Ok(found(TODOS_PATH)),
        Err(BackendError::SharedError(SharedError::ValidationError { message, .. })) => {
            let page = templates.render(ADD_TODO, &page_context(&identity, &message))?;
            Ok((StatusCode::BAD_REQUEST, page).into_response())
        }
        Err(e) => Err(e),
    }
}

/// Render the edit form for a to-do owned by `identity`
async fn render_edit(
    todos: &TodoService,
    templates: &Templates,
    identity: &Identity,
    todo_id: i64,
    message: &str,
) -> BackendResult<Response> {
    let todo = todos.get(todo_id, Some(identity.user_id)).await?;

    let mut context = page_context(identity, message);
    context.insert("todo", &todo);
    Ok(templates.render(EDIT_TODO, &context)?.into_response())
}

/// `GET /todos/edit-todo/{id}`
pub async fn edit_page(
    State(todos): State<TodoService>,
    State(templates): State<Templates>,
    AuthUser(identity): AuthUser,
    Path(todo_id): Path<i64>,
) -> BackendResult<Response> {
    or_back_to_list(render_edit(&todos, &templates, &identity, todo_id, "").await)
}

/// `POST /todos/edit-todo/{id}`
pub async fn edit_todo(
    State(todos): State<TodoService>,
    State(templates): State<Templates>,
    AuthUser(identity): AuthUser,
    Path(todo_id): Path<i64>,
    Form(form): Form<TodoForm>,
) -> BackendResult<Response> {
    match todos.update(todo_id, form.into_request(), Some(identity.user_id)).await {
        Ok(_) => Ok(found(TODOS_PATH)),
        Err(BackendError::SharedError(SharedError::ValidationError { message, .. })) => {
            match render_edit(&todos, &templates, &identity, todo_id, &message).await {
                Ok(page) => Ok((StatusCode::BAD_REQUEST, page).into_response()),
                Err(e) => or_back_to_list(Err(e)),
            }
        }
        Err(e) => or_back_to_list(Err(e)),
    }
}

/// `GET /todos/delete/{id}`
pub async fn delete_todo(
    State(todos): State<TodoService>,
    AuthUser(identity): AuthUser,
    Path(todo_id): Path<i64>,
) -> BackendResult<Response> {
    or_back_to_list(
        todos
            .delete(todo_id, Some(identity.user_id))
            .await
            .map(|_| found(TODOS_PATH)),
    )
}

/// `GET /todos/complete/{id}`
pub async fn complete_todo(
    State(todos): State<TodoService>,
    AuthUser(identity): AuthUser,
    Path(todo_id): Path<i64>,
) -> BackendResult<Response> {
    or_back_to_list(
        todos
            .toggle_complete(todo_id, Some(identity.user_id))
            .await
            .map(|_| found(TODOS_PATH)),
    )
}
