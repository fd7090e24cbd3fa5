/**
 * API Route Handlers
 *
 * This module defines the API route tables, split into public routes
 * and session-gated routes.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 *
 * ## Session-gated (auth middleware applied in the router)
 * - `GET/POST /api/projects` - Owner-scoped project listing and creation
 * - `GET/POST /api/bids` - Role-scoped bid listing and creation
 * - `GET /api/contractors` - Contractor directory
 * - `GET/PUT /api/users/profile` - Profile read and update
 * - `GET /api/plots` - Plot browsing with zoning/bounding-box filters
 * - `POST /api/upload` - Multipart file upload
 * - `GET /api/sse` - Project feed (Server-Sent Events)
 */

use axum::{routing, Router};

use crate::auth::handlers::{get_contractors, get_profile, login, put_profile, register};
use crate::bids::{get_bids, post_bid};
use crate::plots::get_plots;
use crate::projects::{get_projects, post_project};
use crate::realtime::sse_project_feed;
use crate::server::state::AppState;
use crate::upload::post_upload;

/// Routes reachable without a session
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", routing::post(register))
        .route("/api/auth/login", routing::post(login))
}

/// Routes that require a verified session
///
/// The auth middleware is layered on in [`crate::routes::router`]; every
/// handler here can assume [`crate::middleware::AuthenticatedUser`] is in
/// the request extensions.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/projects",
            routing::get(get_projects).post(post_project),
        )
        .route("/api/bids", routing::get(get_bids).post(post_bid))
        .route("/api/contractors", routing::get(get_contractors))
        .route(
            "/api/users/profile",
            routing::get(get_profile).put(put_profile),
        )
        .route("/api/plots", routing::get(get_plots))
        .route("/api/upload", routing::post(post_upload))
        .route("/api/sse", routing::get(sse_project_feed))
}
