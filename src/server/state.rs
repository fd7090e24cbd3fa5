/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The optional MongoDB database handle
 * - The chat room broadcast registry
 * - The upload directory
 *
 * # Thread Safety
 *
 * `Database` is internally reference-counted and cheap to clone;
 * `ChatRooms` wraps its registry in `Arc<Mutex<_>>`. Cloning `AppState`
 * for each connection is intentional and inexpensive.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part of
 * the state they need, e.g. `State<Option<Database>>` instead of the
 * whole `AppState`.
 */

use std::path::PathBuf;

use axum::extract::FromRef;
use mongodb::Database;

use crate::chat::state::ChatRooms;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Database handle
    ///
    /// `None` when `MONGODB_URI` is not set or the connection failed at
    /// startup. Handlers answer 503 in that case.
    pub db: Option<Database>,

    /// Per-room chat broadcast registry
    pub chat_rooms: ChatRooms,

    /// Directory uploaded files are written to
    pub upload_dir: PathBuf,
}

/// Extract the optional database handle directly
impl FromRef<AppState> for Option<Database> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

/// Extract the chat room registry directly
impl FromRef<AppState> for ChatRooms {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.chat_rooms.clone()
    }
}

/// Extract the upload directory directly
impl FromRef<AppState> for PathBuf {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.upload_dir.clone()
    }
}
