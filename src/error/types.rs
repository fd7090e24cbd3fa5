/**
 * API Error Types
 *
 * This module defines the error type returned by HTTP handlers. Each variant
 * carries enough context to pick an HTTP status code and a client-safe
 * message; database and serialization failures are logged with their full
 * detail but surfaced to clients generically.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by HTTP handlers
///
/// Constructors cover the common cases; `Database` and `Serialization` are
/// converted automatically via `?`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Handler error with an explicit status code
    #[error("{message}")]
    Handler {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Missing or invalid session token
    #[error("{message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Resource conflict, e.g. registering an email that already exists
    ///
    /// Mapped to 400 rather than 409: the original API signalled duplicate
    /// registration with 400.
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Database operation failure
    #[error("Database error")]
    Database(#[from] mongodb::error::Error),

    /// JSON serialization failure
    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Create a handler error with an explicit status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Handler {
            status,
            message: message.into(),
        }
    }

    /// Create an unauthorized error (HTTP 401)
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a conflict error (HTTP 400)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Error returned when the server started without a database
    pub fn database_not_configured() -> Self {
        Self::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Handler { status, .. } => *status,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-safe error message
    ///
    /// Internal failures return a generic message; the underlying error is
    /// logged where it occurs, not leaked to clients.
    pub fn message(&self) -> String {
        match self {
            Self::Handler { message, .. }
            | Self::Unauthorized { message }
            | Self::Conflict { message } => message.clone(),
            Self::Database(_) => "Database error".to_string(),
            Self::Serialization(_) => "Serialization error".to_string(),
        }
    }
}
