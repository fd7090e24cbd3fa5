//! Bids Module
//!
//! Contractor bidding on projects: database operations over the `bids`
//! collection and the HTTP handlers for `/api/bids`. Listing is
//! role-dependent: contractors see bids they placed, owners see bids
//! against their projects.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

// Re-export the handler functions
pub use handlers::{get_bids, post_bid};
