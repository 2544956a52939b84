//! Authentication Module
//!
//! This module handles user registration, credential checks and JWT tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - AuthConfig, JWT issuance and validation
//! ├── service.rs      - AuthService (register, authenticate, tokens)
//! ├── cookies.rs      - access_token cookie and bearer header helpers
//! └── handlers/       - JSON handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: fields → uniqueness checks → bcrypt hash → row inserted
//! 2. **Token**: username + password → verified → JWT returned as a bearer token
//!    (20 minutes) or stored in the `access_token` cookie (60 minutes)
//! 3. **Resolve**: JWT → signature and expiry checked → `{username, user_id}`
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Invalid credentials return 401 (no distinction between unknown user and
//!   wrong password)
//! - Tokens are signed with the secret from `AuthConfig`, never a constant

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Auth service shared by the JSON and HTML surfaces
pub mod service;

/// Token cookie helpers
pub mod cookies;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{CreateUserRequest, TokenRequest, TokenResponse, UserResponse};
pub use handlers::{create_new_user, get_me, login_for_access_token};
pub use service::AuthService;
pub use sessions::{AuthConfig, Identity};
