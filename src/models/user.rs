/**
 * User Model
 *
 * This module defines the user document stored in the `users` collection
 * and the marketplace role enum that scopes resource access.
 */

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Marketplace role attached to every account
///
/// The role governs which resources a session may access: only contractors
/// may create bids, and the contractor directory lists contractors and
/// builders. Serialized in lowercase (`"buyer"`, `"builder"`, `"contractor"`)
/// to match the `userType` field of the original collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Builder,
    Contractor,
}

impl Role {
    /// Wire/bson representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Builder => "builder",
            Self::Contractor => "contractor",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buyer" => Ok(Self::Buyer),
            "builder" => Ok(Self::Builder),
            "contractor" => Ok(Self::Contractor),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// User document in the `users` collection
///
/// The password is stored only as a bcrypt hash. This struct is never
/// serialized to clients directly; use [`UserResponse`] for that.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Optional display name
    pub name: Option<String>,
    /// Marketplace role
    pub user_type: Role,
    /// Optional avatar image filename
    pub image: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// User representation returned to clients
///
/// Contains user information that is safe to return. It has no password
/// field of any kind, hashed or plain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User's unique ID (hex string)
    pub id: String,
    /// User's email address
    pub email: String,
    /// User's display name
    pub name: Option<String>,
    /// Marketplace role
    pub user_type: Role,
    /// Avatar image filename
    pub image: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: user.email,
            name: user.name,
            user_type: user.user_type,
            image: user.image,
            created_at: user.created_at,
        }
    }
}
