use crate::config::AppConfig;
use crate::error::{ApiError, Result};
use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client, Database};
use tracing::info;

/// Database name used when the connection string does not name one.
const FALLBACK_DB_NAME: &str = "propertyhub";

/// Connect to MongoDB and verify the server is actually reachable.
///
/// The driver connects lazily, so without the `ping` a dead server would only
/// surface on the first query. Startup wants to fail fast instead; the caller
/// treats any error here as fatal.
pub async fn connect(config: &AppConfig) -> Result<Database> {
    let mut options = ClientOptions::parse(&config.mongo_uri)
        .await
        .map_err(|e| ApiError::Database {
            message: format!("Invalid MONGO_URI: {e}"),
        })?;
    options.app_name = Some("propertyhub-api".to_string());

    let client = Client::with_options(options).map_err(|e| ApiError::Database {
        message: format!("Failed to create MongoDB client: {e}"),
    })?;

    let db = client
        .default_database()
        .unwrap_or_else(|| client.database(FALLBACK_DB_NAME));

    db.run_command(doc! { "ping": 1 }, None)
        .await
        .map_err(|e| ApiError::Database {
            message: format!("Failed to connect to MongoDB: {e}"),
        })?;

    info!("MongoDB connected, using database '{}'", db.name());
    Ok(db)
}
