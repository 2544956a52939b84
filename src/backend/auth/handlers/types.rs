/**
 * Authentication Handler Types
 *
 * Request and response types used by the JSON authentication endpoints.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::{NewUser, User};

/// Registration request for `POST /auth/create/user`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    /// Optional; unique when present
    #[serde(default)]
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    /// Plain-text password (hashed before storage)
    pub password: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            username: request.username,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            password: request.password,
        }
    }
}

/// OAuth2 password-flow form for `POST /auth/token`
///
/// Extra form fields such as `grant_type` or `scope` are accepted and ignored.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Bearer token response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// User response (without the password hash)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            is_active: user.is_active,
        }
    }
}
