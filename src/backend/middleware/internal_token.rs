/**
 * Internal Token Middleware
 *
 * Guards the company endpoints: every request must carry an `internal-token`
 * header equal to the configured internal token.
 */

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::backend::error::BackendError;
use crate::shared::AppConfig;

/// Header carrying the internal token
pub const INTERNAL_TOKEN_HEADER: &str = "internal-token";

/// Message returned for a missing or wrong token
pub const INTERNAL_TOKEN_INVALID: &str = "Internal token Invalid.";

/// Reject requests whose `internal-token` header is missing or wrong (400)
pub async fn require_internal_token(
    State(config): State<Arc<AppConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let supplied = request
        .headers()
        .get(INTERNAL_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    if supplied != Some(config.internal_token.as_str()) {
        tracing::warn!("Invalid internal token for {}", request.uri().path());
        return BackendError::handler(StatusCode::BAD_REQUEST, INTERNAL_TOKEN_INVALID).into_response();
    }

    next.run(request).await
}
