/**
 * Project Model
 *
 * This module defines the project document stored in the `projects`
 * collection. Projects are created by a user, updated by their owner, and
 * queried by owner id.
 */

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Project lifecycle status
///
/// Serialized exactly as the original enum values, including the space in
/// `"In Progress"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Planning
    }
}

/// Project document in the `projects` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Project name
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Lifecycle status (defaults to Planning)
    pub status: ProjectStatus,
    /// Completion percentage, 0-100 (defaults to 0)
    pub progress: i32,
    /// Owning user reference
    pub user_id: ObjectId,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Project representation returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    /// Project's unique ID (hex string)
    pub id: String,
    /// Project name
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
    /// Lifecycle status
    pub status: ProjectStatus,
    /// Completion percentage, 0-100
    pub progress: i32,
    /// Owning user ID (hex string)
    pub user_id: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: project.name,
            description: project.description,
            status: project.status,
            progress: project.progress,
            user_id: project.user_id.to_hex(),
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_with_space() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Planning).unwrap(),
            "\"Planning\""
        );
    }

    #[test]
    fn test_status_round_trip() {
        let status: ProjectStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(status, ProjectStatus::InProgress);
    }

    #[test]
    fn test_status_defaults_to_planning() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::Planning);
    }

    #[test]
    fn test_project_response_ids_are_hex() {
        let owner = ObjectId::new();
        let project = Project {
            id: Some(ObjectId::new()),
            name: "House".to_string(),
            description: None,
            status: ProjectStatus::default(),
            progress: 0,
            user_id: owner,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let response = ProjectResponse::from(project);
        assert_eq!(response.user_id, owner.to_hex());
        assert_eq!(response.id.len(), 24);
    }
}
