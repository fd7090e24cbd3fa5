//! Authentication Handlers
//!
//! HTTP handlers for registration, login, the caller's profile, and the
//! contractor directory.
//!
//! # Routes
//!
//! - `POST /api/auth/register` - User registration (public)
//! - `POST /api/auth/login` - User login (public)
//! - `GET /api/users/profile` - Get current user
//! - `PUT /api/users/profile` - Update current user
//! - `GET /api/contractors` - List contractors and builders

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Profile handlers
pub mod profile;

/// Contractor directory handler
pub mod contractors;

// Re-export the handler functions
pub use contractors::get_contractors;
pub use login::login;
pub use profile::{get_profile, put_profile};
pub use register::register;
