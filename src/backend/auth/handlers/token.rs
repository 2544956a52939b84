/**
 * Token Handler
 *
 * This module implements `POST /auth/token`, the OAuth2 password flow of the
 * JSON API.
 *
 * # Authentication Process
 *
 * 1. Read `username` and `password` from the form body
 * 2. Verify them with bcrypt against the stored hash
 * 3. Issue a bearer token with the configured bearer lifetime
 *
 * Unknown users and wrong passwords both answer 401 with the same message.
 */
use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{TokenRequest, TokenResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::{ApiForm, BackendResult};

/// Token handler
///
/// # Example Request
///
/// ```http
/// POST /auth/token HTTP/1.1
/// Content-Type: application/x-www-form-urlencoded
///
/// username=alice&password=secret
/// ```
///
/// # Example Response
///
/// ```json
/// { "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...", "token_type": "bearer" }
/// ```
pub async fn login_for_access_token(
    State(auth): State<AuthService>,
    ApiForm(form): ApiForm<TokenRequest>,
) -> BackendResult<Json<TokenResponse>> {
    tracing::info!("Token request for: {}", form.username);

    let user = auth.authenticate(&form.username, &form.password).await?;
    let token = auth.issue_bearer_token(&user)?;

    Ok(Json(TokenResponse::bearer(token)))
}
