/**
 * Profile Handlers
 *
 * This module implements GET and PUT /api/users/profile. Both operate on
 * the caller's own record, resolved from the session token; there is no
 * way to read or edit another user's profile.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use mongodb::Database;

use crate::auth::handlers::types::ProfileUpdateRequest;
use crate::auth::users::{get_user_by_id, update_profile};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::models::UserResponse;

/// Get the caller's profile (GET /api/users/profile)
pub async fn get_profile(
    State(db): State<Option<Database>>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let db = db.ok_or_else(ApiError::database_not_configured)?;

    let record = get_user_by_id(&db, user.user_id)
        .await?
        .ok_or_else(|| ApiError::handler(StatusCode::NOT_FOUND, "User not found"))?;

    Ok(Json(UserResponse::from(record)))
}

/// Update the caller's profile (PUT /api/users/profile)
///
/// Only `name` and `image` are mutable; anything else in the body is
/// rejected by deserialization into [`ProfileUpdateRequest`].
pub async fn put_profile(
    State(db): State<Option<Database>>,
    AuthUser(user): AuthUser,
    Json(request): Json<ProfileUpdateRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let db = db.ok_or_else(ApiError::database_not_configured)?;
    tracing::info!(user_id = %user.user_id.to_hex(), "profile update");

    let record = update_profile(&db, user.user_id, request.name, request.image)
        .await?
        .ok_or_else(|| ApiError::handler(StatusCode::NOT_FOUND, "User not found"))?;

    Ok(Json(UserResponse::from(record)))
}
