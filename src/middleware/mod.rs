//! Middleware Module
//!
//! Request-processing middleware for the HTTP server. Currently only
//! authentication: session-gated routes are wrapped with
//! [`auth::auth_middleware`], and handlers read the verified identity
//! through the [`auth::AuthUser`] extractor.

/// Authentication middleware and extractor
pub mod auth;

// Re-export commonly used types
pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
