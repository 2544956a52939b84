/**
 * API Route Handlers
 *
 * This module defines the JSON API routes:
 * - Authentication endpoints (register, token, current user)
 * - To-do CRUD endpoints
 * - Company endpoints (internal token)
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /auth/token` - Bearer token for a username and password (form)
 * - `POST /auth/create/user` - User registration
 * - `GET /auth/me` - Current user info
 *
 * ## To-dos (identity required)
 * - `GET /todo`, `GET /todo/{todo_id}`
 * - `POST /create-todo`
 * - `PUT /update-todo/{todo_id}`
 * - `DELETE /delete-todo/{todo_id}`
 *
 * ## Company (`internal-token` header required)
 * - `GET /companyapis/`
 * - `GET /companyapis/employees`
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::auth::{create_new_user, get_me, login_for_access_token};
use crate::backend::company::{get_company_name, number_of_employees};
use crate::backend::middleware::{require_identity, require_internal_token};
use crate::backend::server::state::AppState;
use crate::backend::todos::{create_todo, delete_todo, read_all, read_todo, update_todo};

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the route middleware
///
/// # Authentication
///
/// Public routes:
/// - `/auth/token` - Returns a JWT
/// - `/auth/create/user` - Creates a new user
///
/// Every other auth and to-do route requires a JWT in the `Authorization`
/// header or the `access_token` cookie.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/auth/me", get(get_me))
        .route("/todo", get(read_all))
        .route("/todo/{todo_id}", get(read_todo))
        .route("/create-todo", post(create_todo))
        .route("/update-todo/{todo_id}", put(update_todo))
        .route("/delete-todo/{todo_id}", delete(delete_todo))
        .route_layer(from_fn_with_state(app_state.clone(), require_identity));

    router
        .route("/auth/token", post(login_for_access_token))
        .route("/auth/create/user", post(create_new_user))
        .merge(protected)
}

/// Configure the company routes
pub fn configure_company_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let company = Router::new()
        .route("/companyapis", get(get_company_name))
        .route("/companyapis/", get(get_company_name))
        .route("/companyapis/employees", get(number_of_employees))
        .route_layer(from_fn_with_state(app_state.clone(), require_internal_token));

    router.merge(company)
}
