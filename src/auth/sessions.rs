/**
 * Session Tokens
 *
 * This module handles JWT generation and validation for user sessions.
 * The token carries the user id, email, and marketplace role so handlers
 * can scope queries without an extra lookup.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::Role;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (ObjectId hex)
    pub sub: String,
    /// Email
    pub email: String,
    /// Marketplace role
    pub role: Role,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Get JWT secret from environment
fn get_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|err| {
        tracing::warn!("Missing JWT_SECRET ({err}), using development default");
        "buildconnect-dev-secret-change-in-production".to_string()
    })
}

/// Create a session token for a user
///
/// # Arguments
/// * `user_id` - User ID
/// * `email` - User email
/// * `role` - Marketplace role
///
/// # Returns
/// Signed JWT string, valid for 30 days
pub fn create_token(
    user_id: ObjectId,
    email: String,
    role: Role,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    // Token expires in 30 days
    let exp = now + (30 * 24 * 60 * 60);

    let claims = Claims {
        sub: user_id.to_hex(),
        email,
        role,
        exp,
        iat: now,
    };

    let secret = get_jwt_secret();
    let key = EncodingKey::from_secret(secret.as_ref());

    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token
///
/// # Arguments
/// * `token` - JWT string
///
/// # Returns
/// Decoded claims or error
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let secret = get_jwt_secret();
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_token() {
        let user_id = ObjectId::new();
        let token = create_token(user_id, "test@example.com".to_string(), Role::Buyer);
        assert!(token.is_ok());
        assert!(!token.unwrap().is_empty());
    }

    #[test]
    fn test_verify_token() {
        let user_id = ObjectId::new();
        let token =
            create_token(user_id, "test@example.com".to_string(), Role::Contractor).unwrap();

        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_hex());
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.role, Role::Contractor);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_invalid_token() {
        let result = verify_token("invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_claims_sub_parses_back_to_object_id() {
        let user_id = ObjectId::new();
        let token = create_token(user_id, "a@b.com".to_string(), Role::Builder).unwrap();
        let claims = verify_token(&token).unwrap();
        assert_eq!(ObjectId::parse_str(&claims.sub).unwrap(), user_id);
    }
}
