//! Routes Module
//!
//! Route tables and router assembly.

/// API route tables
pub mod api_routes;

/// Final router assembly
pub mod router;

// Re-export the router constructor
pub use router::create_router;
