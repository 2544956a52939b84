//! Application configuration module
//!
//! Provides the settings the server is built from. Values come from the
//! environment (optionally a `.env` file loaded by the binary) and fall back to
//! defaults suitable for local development.
//!
//! | Variable | Default |
//! |---|---|
//! | `DATABASE_URL` | `sqlite://todos.db?mode=rwc` |
//! | `SERVER_PORT` | `3000` |
//! | `JWT_SECRET` | development secret |
//! | `JWT_ALGORITHM` | `HS256` |
//! | `TOKEN_TTL_MINUTES` | `20` |
//! | `COOKIE_TTL_MINUTES` | `60` |
//! | `INTERNAL_TOKEN` | `allowed` |
//! | `STATIC_DIR` | `static` |
//! | `BCRYPT_COST` | `12` |

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://todos.db?mode=rwc";
const DEFAULT_JWT_SECRET: &str = "dev-secret-change-me";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// sqlx connection string for the relational store
    pub database_url: String,
    /// Port the HTTP server binds on
    pub server_port: u16,
    /// HMAC secret used to sign access tokens
    pub jwt_secret: String,
    /// JWT algorithm name (HS256, HS384 or HS512)
    pub jwt_algorithm: String,
    /// Lifetime of bearer tokens issued by `POST /auth/token`
    pub token_ttl_minutes: i64,
    /// Lifetime of the `access_token` cookie set by the login form
    pub cookie_ttl_minutes: i64,
    /// Expected value of the `internal-token` header on company APIs
    pub internal_token: String,
    /// Directory served under `/static`
    pub static_dir: String,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            server_port: 3000,
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            jwt_algorithm: "HS256".to_string(),
            token_ttl_minutes: 20,
            cookie_ttl_minutes: 60,
            internal_token: "allowed".to_string(),
            static_dir: "static".to_string(),
            bcrypt_cost: 12,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables keep their default; set but unparsable values are an
    /// error rather than being silently replaced.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            builder = builder.server_port(parse_value("SERVER_PORT", &port)?);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        } else {
            tracing::warn!("JWT_SECRET not set. Using the development secret.");
        }
        if let Some(algorithm) = lookup("JWT_ALGORITHM") {
            builder = builder.jwt_algorithm(algorithm);
        }
        if let Some(ttl) = lookup("TOKEN_TTL_MINUTES") {
            builder = builder.token_ttl_minutes(parse_value("TOKEN_TTL_MINUTES", &ttl)?);
        }
        if let Some(ttl) = lookup("COOKIE_TTL_MINUTES") {
            builder = builder.cookie_ttl_minutes(parse_value("COOKIE_TTL_MINUTES", &ttl)?);
        }
        if let Some(token) = lookup("INTERNAL_TOKEN") {
            builder = builder.internal_token(token);
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            builder = builder.static_dir(dir);
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_value("BCRYPT_COST", &cost)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !matches!(self.jwt_algorithm.as_str(), "HS256" | "HS384" | "HS512") {
            return Err(ConfigError::InvalidValue {
                key: "JWT_ALGORITHM",
                value: self.jwt_algorithm.clone(),
            });
        }
        if self.token_ttl_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_MINUTES",
                value: self.token_ttl_minutes.to_string(),
            });
        }
        if self.cookie_ttl_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "COOKIE_TTL_MINUTES",
                value: self.cookie_ttl_minutes.to_string(),
            });
        }
        // bcrypt accepts work factors 4..=31
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    server_port: Option<u16>,
    jwt_secret: Option<String>,
    jwt_algorithm: Option<String>,
    token_ttl_minutes: Option<i64>,
    cookie_ttl_minutes: Option<i64>,
    internal_token: Option<String>,
    static_dir: Option<String>,
    bcrypt_cost: Option<u32>,
}

impl AppConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the server port
    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Set the JWT signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the JWT algorithm name
    pub fn jwt_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.jwt_algorithm = Some(algorithm.into());
        self
    }

    /// Set the bearer token lifetime in minutes
    pub fn token_ttl_minutes(mut self, minutes: i64) -> Self {
        self.token_ttl_minutes = Some(minutes);
        self
    }

    /// Set the cookie token lifetime in minutes
    pub fn cookie_ttl_minutes(mut self, minutes: i64) -> Self {
        self.cookie_ttl_minutes = Some(minutes);
        self
    }

    /// Set the expected internal token
    pub fn internal_token(mut self, token: impl Into<String>) -> Self {
        self.internal_token = Some(token.into());
        self
    }

    /// Set the static file directory
    pub fn static_dir(mut self, dir: impl Into<String>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            database_url: self.database_url.unwrap_or(defaults.database_url),
            server_port: self.server_port.unwrap_or(defaults.server_port),
            jwt_secret: self.jwt_secret.unwrap_or(defaults.jwt_secret),
            jwt_algorithm: self.jwt_algorithm.unwrap_or(defaults.jwt_algorithm),
            token_ttl_minutes: self.token_ttl_minutes.unwrap_or(defaults.token_ttl_minutes),
            cookie_ttl_minutes: self.cookie_ttl_minutes.unwrap_or(defaults.cookie_ttl_minutes),
            internal_token: self.internal_token.unwrap_or(defaults.internal_token),
            static_dir: self.static_dir.unwrap_or(defaults.static_dir),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(defaults.bcrypt_cost),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
