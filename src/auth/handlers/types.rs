/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers. These types are shared across register, login,
 * and profile handlers.
 */

use serde::{Deserialize, Serialize};

use crate::models::{Role, UserResponse};

/// Registration request
///
/// Contains the email, password, optional display name, and marketplace
/// role for user registration. `userType` deserializes into the role enum,
/// so unknown roles are rejected before the handler runs.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
    /// Optional display name
    pub name: Option<String>,
    /// Marketplace role
    pub user_type: Role,
}

/// Login request
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Auth response returned by login
///
/// Contains the session token and user information for immediate
/// authentication. The token is also set as an `HttpOnly` cookie.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Session token (30-day expiration)
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// Profile update request
///
/// Only the mutable profile fields; email, role, and password are not
/// changeable through the profile endpoint.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileUpdateRequest {
    /// New display name
    pub name: Option<String>,
    /// New avatar image filename
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_uses_user_type_key() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"email":"a@b.com","password":"x","name":"A","userType":"buyer"}"#,
        )
        .unwrap();
        assert_eq!(request.user_type, Role::Buyer);
        assert_eq!(request.password, "x");
    }

    #[test]
    fn test_register_request_rejects_unknown_role() {
        let result = serde_json::from_str::<RegisterRequest>(
            r#"{"email":"a@b.com","password":"x","userType":"admin"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_profile_update_rejects_unknown_fields() {
        let result =
            serde_json::from_str::<ProfileUpdateRequest>(r#"{"name":"A","email":"x@y.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_register_request_name_is_optional() {
        let request: RegisterRequest =
            serde_json::from_str(r#"{"email":"a@b.com","password":"x","userType":"contractor"}"#)
                .unwrap();
        assert!(request.name.is_none());
    }
}
