/**
 * Upload Handlers
 *
 * This module implements POST /api/upload. The request is multipart form
 * data with a single `file` field; the file is written under the configured
 * upload directory with a millisecond-timestamp prefix so repeated uploads
 * of the same name never collide. The stored name is returned to the client,
 * which composes the public `/uploads/<name>` URL itself.
 */

use std::path::{Path, PathBuf};

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Upload response carrying the stored file name
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub file_name: String,
}

/// Strip directory components from a client-supplied file name
///
/// Only the final path segment survives, so names like `../../etc/passwd`
/// collapse to `passwd` and cannot escape the upload directory.
fn sanitize_file_name(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name)
        .trim();
    if base.is_empty() {
        "upload".to_string()
    } else {
        base.to_string()
    }
}

/// Write `bytes` into `dir` under a timestamp-prefixed name
///
/// Creates the directory if it does not exist and returns the stored
/// file name.
pub async fn save_upload(
    dir: &Path,
    original_name: &str,
    bytes: &[u8],
) -> std::io::Result<String> {
    tokio::fs::create_dir_all(dir).await?;
    let file_name = format!(
        "{}-{}",
        Utc::now().timestamp_millis(),
        sanitize_file_name(original_name)
    );
    tokio::fs::write(dir.join(&file_name), bytes).await?;
    Ok(file_name)
}

/// Accept a file upload (POST /api/upload)
///
/// # Errors
/// * `400 Bad Request` - No `file` field in the form data
pub async fn post_upload(
    State(upload_dir): State<PathBuf>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(|error| {
        tracing::warn!(%error, "malformed multipart upload");
        ApiError::handler(StatusCode::BAD_REQUEST, "Malformed form data")
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let bytes = field.bytes().await.map_err(|error| {
            tracing::warn!(%error, "failed reading upload body");
            ApiError::handler(StatusCode::BAD_REQUEST, "Malformed form data")
        })?;

        let file_name = save_upload(&upload_dir, &original_name, &bytes)
            .await
            .map_err(|error| {
                tracing::error!(%error, dir = %upload_dir.display(), "failed to store upload");
                ApiError::handler(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to store file",
                )
            })?;

        tracing::info!(%file_name, size = bytes.len(), "stored upload");
        return Ok(Json(UploadResponse { file_name }));
    }

    Err(ApiError::handler(
        StatusCode::BAD_REQUEST,
        "No file provided",
    ))
}
