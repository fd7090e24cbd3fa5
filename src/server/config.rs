/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables,
 * focusing on the optional MongoDB connection and the upload directory.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * When the database cannot be reached the server runs in degraded mode
 * and data-backed routes answer 503.
 */

use std::path::PathBuf;

use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client, Database};

/// Default database name when MONGODB_DB is not set
const DEFAULT_DB_NAME: &str = "buildconnect";

/// Default upload directory when UPLOAD_DIR is not set
const DEFAULT_UPLOAD_DIR: &str = "public/uploads";

/// Database configuration result
pub type DatabaseConfig = Option<Database>;

/// Load and initialize the MongoDB database handle
///
/// Reads `MONGODB_URI` and `MONGODB_DB` from the environment, connects,
/// and verifies the connection with a ping.
///
/// # Returns
///
/// - `Some(Database)` if the database is reachable
/// - `None` if `MONGODB_URI` is not set or the connection fails
pub async fn load_database() -> DatabaseConfig {
    let uri = match std::env::var("MONGODB_URI") {
        Ok(uri) => uri,
        Err(_) => {
            tracing::warn!("MONGODB_URI not set. Database features will be disabled.");
            return None;
        }
    };

    let db_name =
        std::env::var("MONGODB_DB").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string());

    tracing::info!(db = %db_name, "Connecting to database...");

    let options = match ClientOptions::parse(&uri).await {
        Ok(options) => options,
        Err(e) => {
            tracing::error!("Failed to parse MONGODB_URI: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    let client = match Client::with_options(options) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create database client: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    let db = client.database(&db_name);

    // Ping so a bad URI fails at startup, not on the first request
    if let Err(e) = db.run_command(doc! { "ping": 1 }, None).await {
        tracing::error!("Database ping failed: {:?}", e);
        tracing::warn!("Database features will be disabled.");
        return None;
    }

    tracing::info!("Database connection established");
    Some(db)
}

/// Resolve the directory uploaded files are stored in
///
/// Reads `UPLOAD_DIR` from the environment, defaulting to `public/uploads`
/// relative to the working directory. The directory is created lazily on
/// the first upload.
pub fn load_upload_dir() -> PathBuf {
    let dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string());
    PathBuf::from(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_upload_dir() {
        std::env::remove_var("UPLOAD_DIR");
        assert_eq!(load_upload_dir(), PathBuf::from("public/uploads"));
    }
}
