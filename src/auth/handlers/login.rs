/**
 * Login Handler
 *
 * This module implements the login handler for POST /api/auth/login.
 *
 * # Login Process
 *
 * 1. Look up the user by email
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a session token carrying id, email, and role
 * 4. Return the token in the body and as an `HttpOnly` cookie
 *
 * A wrong email and a wrong password produce the same 401 response so the
 * endpoint does not reveal which accounts exist.
 */

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use bcrypt::verify;
use mongodb::Database;

use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::models::UserResponse;

/// Session cookie lifetime in seconds (30 days, matching the token expiry)
const COOKIE_MAX_AGE: u64 = 30 * 24 * 60 * 60;

/// Login handler
///
/// # Errors
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `503 Service Unavailable` - Database is not configured
/// * `500 Internal Server Error` - Token generation failed
pub async fn login(
    State(db): State<Option<Database>>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let db = db.ok_or_else(ApiError::database_not_configured)?;
    tracing::info!(email = %request.email, "login request");

    let user = get_user_by_email(&db, &request.email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let password_ok = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!(error = ?e, "password verification failed");
        ApiError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    if !password_ok {
        tracing::warn!(email = %request.email, "wrong password");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let user_id = user
        .id
        .ok_or_else(|| ApiError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error"))?;

    let token = create_token(user_id, user.email.clone(), user.user_type).map_err(|e| {
        tracing::error!(error = ?e, "failed to create token");
        ApiError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    let cookie = format!(
        "token={token}; HttpOnly; Path=/; Max-Age={COOKIE_MAX_AGE}; SameSite=Strict"
    );

    tracing::info!(user_id = %user_id.to_hex(), "login successful");

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse {
            token,
            user: UserResponse::from(user),
        }),
    )
        .into_response())
}
