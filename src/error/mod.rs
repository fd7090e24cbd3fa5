//! API Error Module
//!
//! This module defines the error type used by every HTTP handler and its
//! conversion into HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definition and constructors
//! - **`conversion`** - `IntoResponse` implementation
//!
//! # Taxonomy
//!
//! - Missing/invalid session token → 401
//! - Duplicate email on registration → 400
//! - Validation or database failure → 500 with a generic message
//! - Database not configured → 503
//!
//! All failures are caught at the handler boundary and converted to a JSON
//! error body; none are retried.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
