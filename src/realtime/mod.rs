//! Realtime Module
//!
//! Server-Sent Events project feed for dashboards. The browser keeps one
//! EventSource open and receives the caller's project list every poll
//! period; chat uses WebSockets instead (see [`crate::chat`]).

/// SSE project feed
pub mod feed;

// Re-export the handler function
pub use feed::sse_project_feed;
