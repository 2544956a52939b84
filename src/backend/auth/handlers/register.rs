/**
 * Registration Handler
 *
 * This module implements `POST /auth/create/user`.
 *
 * # Registration Process
 *
 * 1. Reject blank usernames or passwords
 * 2. Reject a username or email that is already registered (409)
 * 3. Hash the password with bcrypt and insert the user
 * 4. Return the user without its password hash (201)
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{CreateUserRequest, UserResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::{ApiJson, BackendResult};

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - blank username or password, or a malformed body
/// * `409 Conflict` - username or email already registered
/// * `500 Internal Server Error` - hashing or database failure
pub async fn create_new_user(
    State(auth): State<AuthService>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> BackendResult<(StatusCode, Json<UserResponse>)> {
    tracing::info!("Registration request for username: {}", request.username);

    let user = auth.register(request.into()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
