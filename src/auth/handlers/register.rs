/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Check that no user exists with the requested email
 * 2. Hash the password with bcrypt
 * 3. Insert the user document
 * 4. Return the created user with the password stripped
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt (DEFAULT_COST)
 * - Passwords are never returned in responses
 * - There are deliberately no password-strength or email-format rules;
 *   uniqueness of the email is the only registration constraint
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use mongodb::Database;

use crate::auth::handlers::types::RegisterRequest;
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::ApiError;
use crate::models::UserResponse;

/// Register handler
///
/// # Arguments
/// * `State(db)` - Optional database handle
/// * `Json(request)` - Registration request
///
/// # Returns
/// 201 with the created user (no password field), or an error
///
/// # Errors
/// * `400 Bad Request` - Email is already registered
/// * `503 Service Unavailable` - Database is not configured
/// * `500 Internal Server Error` - Hashing or insert failed
pub async fn register(
    State(db): State<Option<Database>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let db = db.ok_or_else(ApiError::database_not_configured)?;
    tracing::info!(email = %request.email, role = %request.user_type, "registration request");

    if get_user_by_email(&db, &request.email).await?.is_some() {
        tracing::warn!(email = %request.email, "email already registered");
        return Err(ApiError::conflict("User already exists"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!(error = ?e, "failed to hash password");
        ApiError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Error creating user")
    })?;

    let user = create_user(
        &db,
        request.email,
        password_hash,
        request.name,
        request.user_type,
    )
    .await?;

    tracing::info!(user_id = %user.id.map(|id| id.to_hex()).unwrap_or_default(), "user created");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
