//! Chat Module
//!
//! Room-based chat over WebSockets. Connections authenticate during the
//! HTTP upgrade, join and leave rooms with JSON events, and receive
//! messages fanned out through per-room broadcast channels.

/// Per-room broadcast channel registry
pub mod state;

/// WebSocket upgrade and connection loop
pub mod handlers;

// Re-exports used by state wiring and routing
pub use handlers::ws_handler;
pub use state::{ChatRooms, RoomMessage};
