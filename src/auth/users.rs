/**
 * User Database Operations
 *
 * This module contains the queries against the `users` collection. Each
 * operation is a single find or write; there are no transactions.
 */

use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Collection, Database};

use crate::models::{Role, User};

/// Name of the users collection
const COLLECTION: &str = "users";

fn users(db: &Database) -> Collection<User> {
    db.collection::<User>(COLLECTION)
}

/// Create a new user
///
/// # Arguments
/// * `db` - Database handle
/// * `email` - User email (uniqueness is checked by the caller)
/// * `password_hash` - Hashed password
/// * `name` - Optional display name
/// * `role` - Marketplace role
///
/// # Returns
/// Created user with its assigned id
pub async fn create_user(
    db: &Database,
    email: String,
    password_hash: String,
    name: Option<String>,
    role: Role,
) -> Result<User, mongodb::error::Error> {
    let now = Utc::now();
    let mut user = User {
        id: None,
        email,
        password_hash,
        name,
        user_type: role,
        image: None,
        created_at: now,
        updated_at: now,
    };

    let result = users(db).insert_one(&user, None).await?;
    user.id = result.inserted_id.as_object_id();
    Ok(user)
}

/// Get user by email
pub async fn get_user_by_email(
    db: &Database,
    email: &str,
) -> Result<Option<User>, mongodb::error::Error> {
    users(db).find_one(doc! { "email": email }, None).await
}

/// Get user by ID
pub async fn get_user_by_id(
    db: &Database,
    id: ObjectId,
) -> Result<Option<User>, mongodb::error::Error> {
    users(db).find_one(doc! { "_id": id }, None).await
}

/// Update a user's mutable profile fields
///
/// Only `name` and `image` can be changed here; email, role, and the
/// password hash are not reachable through the profile endpoint.
///
/// # Returns
/// The updated user, or `None` if the id does not exist
pub async fn update_profile(
    db: &Database,
    id: ObjectId,
    name: Option<String>,
    image: Option<String>,
) -> Result<Option<User>, mongodb::error::Error> {
    let mut set = doc! { "updatedAt": Utc::now().to_rfc3339() };
    if let Some(name) = name {
        set.insert("name", name);
    }
    if let Some(image) = image {
        set.insert("image", image);
    }

    let options = FindOneAndUpdateOptions::builder()
        .return_document(ReturnDocument::After)
        .build();

    users(db)
        .find_one_and_update(doc! { "_id": id }, doc! { "$set": set }, options)
        .await
}

/// List users with a contractor or builder role
///
/// Backs the contractor directory; passwords are stripped by the response
/// mapping, not here.
pub async fn list_contractors(db: &Database) -> Result<Vec<User>, mongodb::error::Error> {
    let cursor = users(db)
        .find(
            doc! { "userType": { "$in": [Role::Contractor.as_str(), Role::Builder.as_str()] } },
            None,
        )
        .await?;
    cursor.try_collect().await
}
