//! Upload Module
//!
//! Multipart file uploads stored on local disk and served back through
//! the static `/uploads` route.

/// HTTP handlers and storage helper
pub mod handlers;

// Re-export the handler function
pub use handlers::post_upload;
