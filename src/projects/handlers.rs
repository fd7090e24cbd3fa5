/**
 * Project Handlers
 *
 * This module implements GET and POST /api/projects. Both are scoped to
 * the authenticated caller: listing returns only the caller's projects,
 * and creation stamps the owner from the session, never from the body.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use mongodb::Database;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::models::{ProjectResponse, ProjectStatus};
use crate::projects::db::{create_project, list_projects_for_user};

/// Project creation request
///
/// Status and progress are optional and default to `Planning` / 0,
/// mirroring the collection's schema defaults.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Project name
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Lifecycle status
    #[serde(default)]
    pub status: ProjectStatus,
    /// Completion percentage, 0-100
    #[serde(default)]
    pub progress: i32,
}

/// List the caller's projects (GET /api/projects)
pub async fn get_projects(
    State(db): State<Option<Database>>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let db = db.ok_or_else(ApiError::database_not_configured)?;

    let projects = list_projects_for_user(&db, user.user_id).await?;
    Ok(Json(
        projects.into_iter().map(ProjectResponse::from).collect(),
    ))
}

/// Create a project owned by the caller (POST /api/projects)
///
/// # Errors
/// * `400 Bad Request` - Progress outside 0-100
pub async fn post_project(
    State(db): State<Option<Database>>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    let db = db.ok_or_else(ApiError::database_not_configured)?;

    if !(0..=100).contains(&request.progress) {
        return Err(ApiError::handler(
            StatusCode::BAD_REQUEST,
            "Progress must be between 0 and 100",
        ));
    }

    tracing::info!(user_id = %user.user_id.to_hex(), name = %request.name, "creating project");

    let project = create_project(
        &db,
        user.user_id,
        request.name,
        request.description,
        request.status,
        request.progress,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(ProjectResponse::from(project))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults() {
        let request: CreateProjectRequest =
            serde_json::from_str(r#"{"name":"House"}"#).unwrap();
        assert_eq!(request.status, ProjectStatus::Planning);
        assert_eq!(request.progress, 0);
    }

    #[test]
    fn test_create_request_with_status() {
        let request: CreateProjectRequest =
            serde_json::from_str(r#"{"name":"House","status":"In Progress","progress":40}"#)
                .unwrap();
        assert_eq!(request.status, ProjectStatus::InProgress);
        assert_eq!(request.progress, 40);
    }
}
