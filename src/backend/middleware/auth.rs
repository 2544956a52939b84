/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * an authenticated user. It reads the JWT from the `Authorization: Bearer`
 * header or the `access_token` cookie, resolves it to an `Identity` and
 * attaches that identity to the request extensions.
 *
 * # Variants
 *
 * - `require_identity` - JSON routes; rejects with 401 and a JSON body
 * - `require_page_identity` - HTML routes; redirects to the login page
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::backend::auth::cookies::request_token;
use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::{Identity, CREDENTIALS_REJECTED};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::pages::found;

/// Path unauthenticated page requests are sent to
pub const LOGIN_PATH: &str = "/auth";

/// Resolve a token taken from the request to the identity of an active user
async fn identify(auth: &AuthService, token: Option<String>) -> BackendResult<Identity> {
    let token = token.ok_or_else(|| {
        tracing::debug!("No bearer header or access_token cookie");
        BackendError::unauthorized(CREDENTIALS_REJECTED)
    })?;

    let identity = auth.resolve_identity(&token)?;
    auth.current_user(&identity).await?;
    Ok(identity)
}

/// Authentication middleware for JSON routes
///
/// This middleware:
/// 1. Extracts the token from the bearer header or the cookie
/// 2. Verifies the signature and expiry
/// 3. Checks that the user still exists and is active
/// 4. Attaches the `Identity` to request extensions for use in handlers
///
/// Returns 401 Unauthorized if any step fails.
pub async fn require_identity(
    State(auth): State<AuthService>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request_token(request.headers());
    match identify(&auth, token).await {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(e) => {
            tracing::warn!("Rejected API request to {}: {}", request.uri().path(), e);
            e.into_response()
        }
    }
}

/// Authentication middleware for HTML pages
///
/// Same checks as `require_identity`, but a failure redirects (302) to the
/// login page instead of answering 401.
pub async fn require_page_identity(
    State(auth): State<AuthService>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request_token(request.headers());
    match identify(&auth, token).await {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(e) => {
            tracing::info!("Redirecting unauthenticated page request {}: {}", request.uri().path(), e);
            found(LOGIN_PATH)
        }
    }
}

/// Axum extractor for the authenticated user
///
/// Reads the `Identity` placed in the request extensions by one of the
/// middlewares above. Used on a route without them, it rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = parts
            .extensions
            .get::<Identity>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("Identity not found in request extensions");
                BackendError::unauthorized(CREDENTIALS_REJECTED)
            })?;

        Ok(AuthUser(identity))
    }
}
