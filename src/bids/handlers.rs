/**
 * Bid Handlers
 *
 * This module implements GET and POST /api/bids, scoped by role:
 *
 * - Only contractors may create bids, and `contractorId` is stamped from
 *   the session, never from the request body.
 * - A contractor's listing contains exactly the bids they placed; any other
 *   role sees exactly the bids on projects they own.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use serde::{Deserialize, Serialize};

use crate::bids::db::{bids_for_contractor, bids_for_projects, create_bid};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::models::{BidResponse, Role};
use crate::projects::db::owned_project_ids;

/// Bid creation request
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBidRequest {
    /// Target project id (hex string)
    pub project_id: String,
    /// Offered amount
    pub amount: f64,
    /// Optional free-text pitch
    pub description: Option<String>,
}

/// Create a bid as the calling contractor (POST /api/bids)
///
/// # Errors
/// * `401 Unauthorized` - Caller is not a contractor
/// * `400 Bad Request` - Malformed project id
pub async fn post_bid(
    State(db): State<Option<Database>>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateBidRequest>,
) -> Result<(StatusCode, Json<BidResponse>), ApiError> {
    let db = db.ok_or_else(ApiError::database_not_configured)?;

    if user.role != Role::Contractor {
        tracing::warn!(role = %user.role, "non-contractor tried to create a bid");
        return Err(ApiError::unauthorized("Unauthorized"));
    }

    let project_id = ObjectId::parse_str(&request.project_id).map_err(|_| {
        ApiError::handler(StatusCode::BAD_REQUEST, "Invalid project id")
    })?;

    tracing::info!(
        contractor_id = %user.user_id.to_hex(),
        project_id = %project_id.to_hex(),
        "creating bid"
    );

    let bid = create_bid(
        &db,
        project_id,
        user.user_id,
        request.amount,
        request.description,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(BidResponse::from(bid))))
}

/// List bids visible to the caller (GET /api/bids)
///
/// Contractors see the bids they placed; everyone else sees the bids on
/// the projects they own, resolved with a two-step id query.
pub async fn get_bids(
    State(db): State<Option<Database>>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<BidResponse>>, ApiError> {
    let db = db.ok_or_else(ApiError::database_not_configured)?;

    let bids = if user.role == Role::Contractor {
        bids_for_contractor(&db, user.user_id).await?
    } else {
        let project_ids = owned_project_ids(&db, user.user_id).await?;
        bids_for_projects(&db, &project_ids).await?
    };

    Ok(Json(bids.into_iter().map(BidResponse::from).collect()))
}
