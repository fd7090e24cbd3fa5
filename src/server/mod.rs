//! Server Module
//!
//! Configuration loading, shared application state, and the assembly of
//! the Axum application.

/// Environment-driven configuration
pub mod config;

/// Application assembly
pub mod init;

/// Shared state and `FromRef` extraction
pub mod state;

// Re-exports used by main and tests
pub use init::create_app;
pub use state::AppState;
