//! Document Models
//!
//! This module defines the four MongoDB collections used by BuildConnect:
//!
//! - **`user`** - Accounts with a marketplace role (buyer, builder, contractor)
//! - **`project`** - Construction projects owned by a user
//! - **`bid`** - Contractor bids against a project
//! - **`plot`** - Land plots browsed on the map page
//!
//! Each model struct maps 1:1 onto a collection document (bson field names in
//! camelCase, `_id` as `ObjectId`) and has a response counterpart that is safe
//! to serialize to clients: ids become hex strings and sensitive fields such
//! as the password hash are never present.
//!
//! Schema validation is intentionally thin: required fields plus the enums
//! defined here. Cross-document writes are not transactional.

/// User accounts and roles
pub mod user;

/// Construction projects
pub mod project;

/// Contractor bids
pub mod bid;

/// Land plots
pub mod plot;

// Re-export commonly used types
pub use bid::{Bid, BidResponse, BidStatus};
pub use plot::{Plot, PlotResponse, Utility, Zoning};
pub use project::{Project, ProjectResponse, ProjectStatus};
pub use user::{Role, User, UserResponse};
