//! Authentication Module
//!
//! Session-based authentication for the marketplace:
//!
//! - **`users`** - Queries against the `users` collection
//! - **`sessions`** - JWT creation and validation (id, email, role claims)
//! - **`handlers`** - Register, login, profile, and contractor directory
//!
//! Passwords are hashed with bcrypt before storage and never serialized
//! back to clients. Tokens are accepted from an `Authorization: Bearer`
//! header or a `token` cookie; see [`crate::middleware::auth`].

/// User database operations
pub mod users;

/// JWT session tokens
pub mod sessions;

/// HTTP handlers
pub mod handlers;

// Re-export commonly used items
pub use handlers::{get_contractors, get_profile, login, put_profile, register};
pub use sessions::{create_token, verify_token, Claims};
