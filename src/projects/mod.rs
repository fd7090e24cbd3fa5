//! Projects Module
//!
//! Owner-scoped project CRUD: database operations over the `projects`
//! collection and the HTTP handlers for `/api/projects`.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

// Re-export the handler functions
pub use handlers::{get_projects, post_project};
