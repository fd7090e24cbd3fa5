//! Plots Module
//!
//! Land plot browsing: database queries over the `plots` collection and
//! the HTTP handler for `/api/plots`, with zoning and bounding-box filters.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

// Re-export the handler function
pub use handlers::get_plots;
