/**
 * Access Token Cookie
 *
 * The HTML pages keep the JWT in an http-only `access_token` cookie. These
 * helpers build the `Set-Cookie` values and read tokens back from requests,
 * preferring an `Authorization: Bearer` header when both are present.
 */

use axum::http::{header, HeaderMap, HeaderValue};
use chrono::Duration;

/// Name of the cookie holding the access token
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Build the `Set-Cookie` value that stores a token
pub fn access_cookie(token: &str, max_age: Duration) -> Option<HeaderValue> {
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        ACCESS_TOKEN_COOKIE,
        token,
        max_age.num_seconds().max(0)
    );
    HeaderValue::from_str(&cookie).ok()
}

/// Build the `Set-Cookie` value that removes the token cookie
pub fn clear_access_cookie() -> HeaderValue {
    HeaderValue::from_static("access_token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Read a cookie value from all `Cookie` headers of a request
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Extract the bearer token from the `Authorization` header
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Find the request's access token: bearer header first, then the cookie
pub fn request_token(headers: &HeaderMap) -> Option<String> {
    bearer_token(headers).or_else(|| read_cookie(headers, ACCESS_TOKEN_COOKIE))
}
