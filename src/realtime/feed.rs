/**
 * Project Feed
 *
 * This module implements GET /api/sse, a Server-Sent Events stream that
 * pushes the caller's project list every five seconds. The first snapshot
 * is sent immediately on connect so dashboards render without waiting a
 * full poll period.
 *
 * The connection is authenticated like any other protected route; the
 * feed is always scoped to the session user and never takes a user id
 * from the client.
 */

use std::future::Future;
use std::time::Duration;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream::{self, Stream, StreamExt};
use mongodb::Database;
use tokio::time::{interval, Interval, MissedTickBehavior};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::models::ProjectResponse;
use crate::projects::db::list_projects_for_user;

/// Poll period between snapshots
const FEED_PERIOD: Duration = Duration::from_secs(5);

/// Build a polling stream of serialized snapshots
///
/// Every `period`, `fetch` is awaited and its payload yielded; the first
/// fetch happens immediately. A failed fetch is logged and skipped, and
/// the stream keeps polling. The stream ends only when the client drops it.
pub fn feed_stream<F, Fut>(period: Duration, fetch: F) -> impl Stream<Item = String>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<String, ApiError>>,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    stream::unfold(
        (ticker, fetch),
        |(mut ticker, mut fetch): (Interval, F)| async move {
            loop {
                ticker.tick().await;
                match fetch().await {
                    Ok(payload) => return Some((payload, (ticker, fetch))),
                    Err(error) => {
                        tracing::warn!(error = %error.message(), "feed snapshot failed, retrying next tick");
                    }
                }
            }
        },
    )
}

/// Stream the caller's projects (GET /api/sse)
///
/// # Errors
/// * `503 Service Unavailable` - Database not configured
pub async fn sse_project_feed(
    State(db): State<Option<Database>>,
    AuthUser(user): AuthUser,
) -> Result<Sse<impl Stream<Item = Result<Event, std::convert::Infallible>>>, ApiError> {
    let db = db.ok_or_else(ApiError::database_not_configured)?;
    let user_id = user.user_id;

    tracing::info!(user_id = %user_id.to_hex(), "project feed subscription opened");

    let fetch = move || {
        let db = db.clone();
        async move {
            let projects = list_projects_for_user(&db, user_id).await?;
            let responses: Vec<ProjectResponse> =
                projects.into_iter().map(ProjectResponse::from).collect();
            serde_json::to_string(&responses).map_err(ApiError::from)
        }
    };

    let stream = feed_stream(FEED_PERIOD, fetch)
        .map(|payload| Ok(Event::default().data(payload)));

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
