/**
 * Contractor Directory Handler
 *
 * This module implements GET /api/contractors: the directory of users whose
 * role is contractor or builder, shown to buyers looking for someone to
 * build with. Passwords are stripped by the response mapping.
 */

use axum::{extract::State, response::Json};
use mongodb::Database;

use crate::auth::users::list_contractors;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::models::UserResponse;

/// List contractors and builders (GET /api/contractors)
pub async fn get_contractors(
    State(db): State<Option<Database>>,
    AuthUser(_user): AuthUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let db = db.ok_or_else(ApiError::database_not_configured)?;

    let contractors = list_contractors(&db).await?;
    tracing::debug!(count = contractors.len(), "contractor directory fetched");

    Ok(Json(
        contractors.into_iter().map(UserResponse::from).collect(),
    ))
}
