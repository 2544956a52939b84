/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user sessions.
 * Signing parameters are not read from globals: an `AuthConfig` is built from
 * the application configuration and handed to `SessionKeys` at construction.
 *
 * # Claims
 *
 * - `sub` - username
 * - `id` - numeric user id
 * - `iat` / `exp` - issue and expiry times (Unix seconds)
 */

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::error::{BackendError, BackendResult};
use crate::shared::config::{AppConfig, ConfigError};

/// Message returned for every token that cannot be resolved to an identity
pub const CREDENTIALS_REJECTED: &str = "could not validate credentials.";

/// Authentication settings
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC signing secret
    pub secret: String,
    /// Signing algorithm (HMAC family)
    pub algorithm: Algorithm,
    /// Lifetime of bearer tokens returned by `POST /auth/token`
    pub bearer_ttl: Duration,
    /// Lifetime of tokens stored in the `access_token` cookie
    pub cookie_ttl: Duration,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
    /// Clock skew tolerated when checking `exp`, in seconds
    pub leeway_secs: u64,
}

impl AuthConfig {
    /// Build the auth settings from the application configuration
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let algorithm = Algorithm::from_str(&config.jwt_algorithm)
            .ok()
            .filter(|alg| matches!(alg, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512))
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "JWT_ALGORITHM",
                value: config.jwt_algorithm.clone(),
            })?;

        Ok(Self {
            secret: config.jwt_secret.clone(),
            algorithm,
            bearer_ttl: Duration::minutes(config.token_ttl_minutes),
            cookie_ttl: Duration::minutes(config.cookie_ttl_minutes),
            bcrypt_cost: config.bcrypt_cost,
            leeway_secs: 0,
        })
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("bearer_ttl", &self.bearer_ttl)
            .field("cookie_ttl", &self.cookie_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username
    pub sub: String,
    /// User ID
    pub id: i64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// The identity a token resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub user_id: i64,
}

/// Signing and verification keys derived from an `AuthConfig`
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
    leeway_secs: u64,
}

impl SessionKeys {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            algorithm: config.algorithm,
            leeway_secs: config.leeway_secs,
        }
    }

    /// Create a signed token for a user
    ///
    /// # Arguments
    /// * `username` - Stored as the `sub` claim
    /// * `user_id` - Stored as the `id` claim
    /// * `ttl` - Time until expiry; negative values produce an already expired token
    pub fn issue_token(
        &self,
        username: &str,
        user_id: i64,
        ttl: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            id: user_id,
            iat: now.timestamp().max(0) as u64,
            exp: (now + ttl).timestamp().max(0) as u64,
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding)
    }

    /// Verify and decode a token
    ///
    /// Fails on a bad signature, a different algorithm, an expired token or
    /// claims that do not match `Claims`.
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = self.leeway_secs;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data = decode::<Claims>(token, &self.decoding, &validation)?;
        Ok(token_data.claims)
    }

    /// Resolve a token to the identity it was issued for
    pub fn resolve_identity(&self, token: &str) -> BackendResult<Identity> {
        let claims = self.verify_token(token).map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e);
            BackendError::unauthorized(CREDENTIALS_REJECTED)
        })?;

        if claims.sub.is_empty() || claims.id <= 0 {
            tracing::warn!("Token is missing its subject or user id");
            return Err(BackendError::unauthorized(CREDENTIALS_REJECTED));
        }

        Ok(Identity {
            username: claims.sub,
            user_id: claims.id,
        })
    }
}
