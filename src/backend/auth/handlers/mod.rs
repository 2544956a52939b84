//! Authentication Handlers Module
//!
//! JSON handlers for the authentication endpoints. The HTML login and
//! registration forms live in `backend::pages::auth_pages` and share the same
//! `AuthService`.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── token.rs    - Bearer token handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`create_new_user`** - POST /auth/create/user - User registration
//! - **`login_for_access_token`** - POST /auth/token - Bearer token issuance
//! - **`get_me`** - GET /auth/me - Current user info

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Token handler
pub mod token;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{CreateUserRequest, TokenRequest, TokenResponse, UserResponse};

// Re-export handlers
pub use register::create_new_user;
pub use token::login_for_access_token;
pub use me::get_me;
