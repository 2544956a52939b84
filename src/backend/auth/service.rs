/**
 * Auth Service
 *
 * Registration, credential checks and token issuance on top of the `users`
 * queries and `SessionKeys`. Both the JSON API and the HTML pages go through
 * this type.
 *
 * # Database Handles
 *
 * Each operation acquires its own pooled connection and
 * releases it when the value is dropped, whether the operation succeeds,
 * fails validation or hits a database error.
 */

use std::sync::Arc;

use bcrypt::{hash, verify};
use chrono::Duration;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::{AuthConfig, Identity, SessionKeys, CREDENTIALS_REJECTED};
use crate::backend::auth::users::{
    create_user, get_user_by_email, get_user_by_id, get_user_by_username, NewUser, User,
};
use crate::backend::error::{BackendError, BackendResult};
use crate::shared::SharedError;

/// Message returned for unknown users and wrong passwords alike
pub const INVALID_CREDENTIALS: &str = "Incorrect username or password.";

#[derive(Clone)]
pub struct AuthService {
    pool: SqlitePool,
    keys: Arc<SessionKeys>,
    config: Arc<AuthConfig>,
}

impl AuthService {
    pub fn new(pool: SqlitePool, config: AuthConfig) -> Self {
        Self {
            pool,
            keys: Arc::new(SessionKeys::new(&config)),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Register a new user
    ///
    /// The password is hashed before the database is touched, and no
    /// transaction is held open. A concurrent insert of the same username or
    /// email trips the unique index and is reported as a conflict.
    ///
    /// # Errors
    /// * Validation error if the username or password is blank
    /// * `Conflict` if the username or email is already registered
    pub async fn register(&self, mut new_user: NewUser) -> BackendResult<User> {
        new_user.username = new_user.username.trim().to_string();
        new_user.email = new_user
            .email
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty());

        if new_user.username.is_empty() {
            return Err(SharedError::validation("username", "Username is required").into());
        }
        if new_user.password.is_empty() {
            return Err(SharedError::validation("password", "Password is required").into());
        }

        let hashed_password = hash_password(&new_user.password, self.config.bcrypt_cost)?;

        let mut conn = self.pool.acquire().await?;

        if get_user_by_username(&mut *conn, &new_user.username).await?.is_some() {
            tracing::warn!("Username already exists: {}", new_user.username);
            return Err(BackendError::conflict("Username already taken"));
        }
        if let Some(email) = &new_user.email {
            if get_user_by_email(&mut *conn, email).await?.is_some() {
                tracing::warn!("Email already exists: {}", email);
                return Err(BackendError::conflict("Email already registered"));
            }
        }

        let user = create_user(&mut *conn, &new_user, &hashed_password)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db) = &e {
                    if db.is_unique_violation() {
                        tracing::warn!("Registration raced with another insert: {}", db);
                        return BackendError::conflict("Username or email already registered");
                    }
                }
                BackendError::Database(e)
            })?;

        tracing::info!("User created successfully: {} (id {})", user.username, user.id);
        Ok(user)
    }

    /// Check a username and password
    ///
    /// Unknown users, wrong passwords and inactive accounts all produce the
    /// same `Unauthorized` error.
    pub async fn authenticate(&self, username: &str, password: &str) -> BackendResult<User> {
        let mut conn = self.pool.acquire().await?;

        let user = get_user_by_username(&mut *conn, username)
            .await?
            .ok_or_else(|| {
                tracing::warn!("User not found: {}", username);
                BackendError::unauthorized(INVALID_CREDENTIALS)
            })?;

        if !verify_password(password, &user.hashed_password)? {
            tracing::warn!("Invalid password for user: {}", username);
            return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
        }
        if !user.is_active {
            tracing::warn!("Login attempt for inactive user: {}", username);
            return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
        }

        tracing::info!("User authenticated: {}", user.username);
        Ok(user)
    }

    /// Issue a token with an explicit lifetime
    pub fn issue_token(&self, username: &str, user_id: i64, ttl: Duration) -> BackendResult<String> {
        Ok(self.keys.issue_token(username, user_id, ttl)?)
    }

    /// Issue a token for the bearer flow
    pub fn issue_bearer_token(&self, user: &User) -> BackendResult<String> {
        self.issue_token(&user.username, user.id, self.config.bearer_ttl)
    }

    /// Issue a token for the cookie flow
    pub fn issue_cookie_token(&self, user: &User) -> BackendResult<String> {
        self.issue_token(&user.username, user.id, self.config.cookie_ttl)
    }

    /// Resolve a token to `{username, user_id}`
    pub fn resolve_identity(&self, token: &str) -> BackendResult<Identity> {
        self.keys.resolve_identity(token)
    }

    /// Load the active user behind an identity
    pub async fn current_user(&self, identity: &Identity) -> BackendResult<User> {
        let mut conn = self.pool.acquire().await?;

        match get_user_by_id(&mut *conn, identity.user_id).await? {
            Some(user) if user.is_active && user.username == identity.username => Ok(user),
            _ => {
                tracing::warn!("Token refers to unknown or inactive user {}", identity.user_id);
                Err(BackendError::unauthorized(CREDENTIALS_REJECTED))
            }
        }
    }
}

/// Hash a password with bcrypt
pub fn hash_password(password: &str, cost: u32) -> BackendResult<String> {
    Ok(hash(password, cost)?)
}

/// Verify a password against a stored bcrypt hash
pub fn verify_password(password: &str, hashed_password: &str) -> BackendResult<bool> {
    Ok(verify(password, hashed_password)?)
}
