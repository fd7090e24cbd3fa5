//! BuildConnect - Main Library
//!
//! BuildConnect is the backend for a construction marketplace: property
//! owners post projects, contractors find work and place bids, and both
//! sides coordinate in real time.
//!
//! # Overview
//!
//! This library provides:
//! - User registration, login, and JWT sessions
//! - Owner-scoped project listings with a live SSE feed
//! - Contractor discovery and role-scoped bidding
//! - Land plot browsing with zoning and bounding-box filters
//! - Room-based chat over WebSockets
//! - Multipart file uploads served back as static files
//!
//! # Module Structure
//!
//! - **`models`** - Document types for the `users`, `projects`, `bids`,
//!   and `plots` collections, plus their client-facing response types
//! - **`auth`** - Registration, login, sessions, profile, contractors
//! - **`middleware`** - Session verification for protected routes
//! - **`projects`** / **`bids`** / **`plots`** - Marketplace domain routes
//! - **`realtime`** - Server-Sent Events project feed
//! - **`chat`** - WebSocket chat with per-room broadcast channels
//! - **`upload`** - Multipart upload handling
//! - **`server`** - Configuration, shared state, application assembly
//! - **`routes`** - Route tables and router construction
//! - **`error`** - The API error type and its HTTP mapping

pub mod auth;
pub mod bids;
pub mod chat;
pub mod error;
pub mod middleware;
pub mod models;
pub mod plots;
pub mod projects;
pub mod realtime;
pub mod routes;
pub mod server;
pub mod upload;
