/**
 * Page Routes
 *
 * HTML routes. The login and registration forms are public; everything under
 * `/todos` goes through `require_page_identity`, which redirects anonymous
 * visitors to `/auth`.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::get,
    Router,
};

use crate::backend::middleware::require_page_identity;
use crate::backend::pages::auth_pages::{login, login_page, logout, register, register_page};
use crate::backend::pages::todo_pages::{
    add_page, add_todo, complete_todo, delete_todo, edit_page, edit_todo, list_page,
};
use crate::backend::server::state::AppState;

/// Configure the HTML page routes
pub fn configure_page_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let todo_pages = Router::new()
        .route("/todos", get(list_page))
        .route("/todos/", get(list_page))
        .route("/todos/add-todo", get(add_page).post(add_todo))
        .route("/todos/edit-todo/{todo_id}", get(edit_page).post(edit_todo))
        .route("/todos/delete/{todo_id}", get(delete_todo))
        .route("/todos/complete/{todo_id}", get(complete_todo))
        .route_layer(from_fn_with_state(app_state.clone(), require_page_identity));

    router
        .route("/auth", get(login_page).post(login))
        .route("/auth/", get(login_page).post(login))
        .route("/auth/logout", get(logout))
        .route("/auth/register", get(register_page).post(register))
        .merge(todo_pages)
}
