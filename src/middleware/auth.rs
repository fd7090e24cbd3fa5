/**
 * Authentication Middleware
 *
 * This module provides the middleware that guards session-gated routes.
 * It extracts the session token, verifies it, and attaches the
 * authenticated identity to request extensions for use in handlers.
 *
 * # Token Sources
 *
 * Tokens are accepted from, in order:
 * 1. `Authorization: Bearer <token>` header
 * 2. `token` cookie (set by the login handler)
 *
 * The WebSocket handler additionally accepts a `token` query parameter,
 * because browsers cannot set headers on WebSocket upgrades; it reuses
 * [`authenticate_token`] from this module.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{
        header::{AUTHORIZATION, COOKIE},
        HeaderMap, StatusCode,
    },
    middleware::Next,
    response::Response,
};
use mongodb::bson::oid::ObjectId;

use crate::auth::sessions::verify_token;
use crate::auth::users::get_user_by_id;
use crate::models::Role;
use crate::server::state::AppState;

/// Authenticated identity extracted from the session token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    /// User ID from the token's `sub` claim
    pub user_id: ObjectId,
    /// Email from the token claims
    pub email: String,
    /// Marketplace role from the token claims
    pub role: Role,
}

/// Pull the session token out of the request headers
///
/// Checks the Authorization header first, then the `token` cookie.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok()) {
        if let Some(token) = value.strip_prefix("Bearer ") {
            return Some(token.to_string());
        }
    }

    headers
        .get(COOKIE)
        .and_then(|h| h.to_str().ok())?
        .split(';')
        .map(|s| s.trim())
        .find_map(|s| s.strip_prefix("token="))
        .map(|s| s.to_string())
}

/// Verify a token string and build the authenticated identity
pub fn authenticate_token(token: &str) -> Result<AuthenticatedUser, StatusCode> {
    let claims = verify_token(token).map_err(|e| {
        tracing::warn!(error = ?e, "invalid session token");
        StatusCode::UNAUTHORIZED
    })?;

    let user_id = ObjectId::parse_str(&claims.sub).map_err(|e| {
        tracing::error!(error = ?e, "invalid user id in token");
        StatusCode::UNAUTHORIZED
    })?;

    Ok(AuthenticatedUser {
        user_id,
        email: claims.email,
        role: claims.role,
    })
}

/// Authentication middleware
///
/// 1. Extracts the session token from header or cookie
/// 2. Verifies it and parses the user id
/// 3. Confirms the user still exists when a database is configured
/// 4. Attaches [`AuthenticatedUser`] to request extensions
///
/// Returns 401 Unauthorized if the token is missing or invalid.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = token_from_headers(request.headers()).ok_or_else(|| {
        tracing::warn!("missing session token");
        StatusCode::UNAUTHORIZED
    })?;

    let user = authenticate_token(&token)?;

    // The token may outlive the account; re-check when we can.
    if let Some(db) = &app_state.db {
        match get_user_by_id(db, user.user_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                tracing::warn!(user_id = %user.user_id.to_hex(), "token for unknown user");
                return Err(StatusCode::UNAUTHORIZED);
            }
            Err(e) => {
                tracing::error!(error = ?e, "user lookup failed during auth");
                return Err(StatusCode::INTERNAL_SERVER_ERROR);
            }
        }
    }

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Handlers behind [`auth_middleware`] take `AuthUser(user)` as a parameter
/// to get the identity attached by the middleware.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                StatusCode::UNAUTHORIZED
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sessions::create_token;
    use axum::http::HeaderValue;

    #[test]
    fn test_token_from_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(token_from_headers(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; token=abc.def.ghi; lang=en"),
        );
        assert_eq!(token_from_headers(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_header_takes_precedence_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer header-token"));
        headers.insert(COOKIE, HeaderValue::from_static("token=cookie-token"));
        assert_eq!(token_from_headers(&headers).unwrap(), "header-token");
    }

    #[test]
    fn test_missing_token() {
        assert!(token_from_headers(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_authenticate_token_round_trip() {
        let user_id = ObjectId::new();
        let token = create_token(user_id, "a@b.com".to_string(), Role::Contractor).unwrap();

        let user = authenticate_token(&token).unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.role, Role::Contractor);
    }

    #[test]
    fn test_authenticate_garbage_token() {
        assert_eq!(
            authenticate_token("not-a-jwt").unwrap_err(),
            StatusCode::UNAUTHORIZED
        );
    }
}
