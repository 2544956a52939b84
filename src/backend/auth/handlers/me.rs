/**
 * Get Current User Handler
 *
 * `GET /auth/me` returns the user behind the request's token. The identity
 * middleware has already resolved the token; this handler only loads the row.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendResult;
use crate::backend::middleware::AuthUser;

pub async fn get_me(
    State(auth): State<AuthService>,
    AuthUser(identity): AuthUser,
) -> BackendResult<Json<UserResponse>> {
    let user = auth.current_user(&identity).await?;
    Ok(Json(UserResponse::from(user)))
}
