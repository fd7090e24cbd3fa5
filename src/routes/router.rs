/**
 * Router Configuration
 *
 * This module combines the route tables into the final Axum router.
 *
 * # Route Order
 *
 * 1. Public API routes (register, login)
 * 2. Protected API routes behind the auth middleware
 * 3. WebSocket chat endpoint (authenticates itself during the upgrade)
 * 4. Static serving of uploaded files
 * 5. Fallback handler (404)
 */

use axum::{middleware, routing, Router};
use tower_http::services::ServeDir;

use crate::chat::ws_handler;
use crate::middleware::auth::auth_middleware;
use crate::routes::api_routes::{protected_routes, public_routes};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state shared by every handler
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let protected = protected_routes().layer(middleware::from_fn_with_state(
        app_state.clone(),
        auth_middleware,
    ));

    Router::new()
        .merge(public_routes())
        .merge(protected)
        // The WebSocket route authenticates during the upgrade; wrapping it
        // in the middleware would reject browser clients that pass the
        // token as a query parameter.
        .route("/ws", routing::get(ws_handler))
        .nest_service("/uploads", ServeDir::new(app_state.upload_dir.clone()))
        .fallback(|| async { "404 Not Found" })
        .with_state(app_state)
}
