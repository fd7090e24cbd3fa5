//! Database operations for projects
//!
//! Every query is scoped to an owner id; there is no way to list another
//! user's projects through this module.

use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use crate::models::{Project, ProjectStatus};

const COLLECTION: &str = "projects";

fn projects(db: &Database) -> Collection<Project> {
    db.collection::<Project>(COLLECTION)
}

/// Insert a new project owned by `owner`
pub async fn create_project(
    db: &Database,
    owner: ObjectId,
    name: String,
    description: Option<String>,
    status: ProjectStatus,
    progress: i32,
) -> Result<Project, mongodb::error::Error> {
    let now = Utc::now();
    let mut project = Project {
        id: None,
        name,
        description,
        status,
        progress,
        user_id: owner,
        created_at: now,
        updated_at: now,
    };

    let result = projects(db).insert_one(&project, None).await?;
    project.id = result.inserted_id.as_object_id();
    Ok(project)
}

/// List all projects owned by `owner`
pub async fn list_projects_for_user(
    db: &Database,
    owner: ObjectId,
) -> Result<Vec<Project>, mongodb::error::Error> {
    let cursor = projects(db).find(doc! { "userId": owner }, None).await?;
    cursor.try_collect().await
}

/// Collect the ids of all projects owned by `owner`
///
/// Used by the bid listing to scope bids to owned projects without a join.
pub async fn owned_project_ids(
    db: &Database,
    owner: ObjectId,
) -> Result<Vec<ObjectId>, mongodb::error::Error> {
    let ids = projects(db)
        .distinct("_id", doc! { "userId": owner }, None)
        .await?;
    Ok(ids
        .into_iter()
        .filter_map(|value| value.as_object_id())
        .collect())
}
