/**
 * Server Initialization
 *
 * This module assembles the Axum application: it loads configuration,
 * connects to the database, builds the shared state, wires the routes,
 * and spawns the background chat-room cleanup task.
 *
 * # Initialization Process
 *
 * 1. Load optional services (database)
 * 2. Resolve the upload directory
 * 3. Build `AppState` and the router
 * 4. Spawn the periodic room cleanup task
 *
 * # Error Handling
 *
 * Startup is resilient: a missing or unreachable database leaves `db`
 * as `None` and the server runs in degraded mode.
 */

use std::time::Duration;

use axum::Router;

use crate::chat::state::ChatRooms;
use crate::routes::router::create_router;
use crate::server::config::{load_database, load_upload_dir};
use crate::server::state::AppState;

/// How often empty chat rooms are reaped
const ROOM_CLEANUP_PERIOD: Duration = Duration::from_secs(300);

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing BuildConnect backend server");

    let db = load_database().await;
    let upload_dir = load_upload_dir();
    tracing::info!(upload_dir = %upload_dir.display(), "Upload directory configured");

    let app_state = AppState {
        db,
        chat_rooms: ChatRooms::new(),
        upload_dir,
    };

    let app = create_router(app_state.clone());

    // Reap chat rooms whose subscribers have all disconnected
    let cleanup_rooms = app_state.chat_rooms.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(ROOM_CLEANUP_PERIOD);
        loop {
            interval.tick().await;
            cleanup_rooms.cleanup_inactive_rooms();
            tracing::debug!("Cleaned up inactive chat rooms");
        }
    });

    tracing::info!("Router configured with periodic cleanup task");

    app
}
