use crate::error::{ApiError, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_UPLOADS_DIR: &str = "uploads";

/// Runtime configuration, sourced from the environment (a `.env` file is
/// loaded by `main` before this runs).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Production frontend origin, if deployed. Kept verbatim here;
    /// `OriginPolicy` owns origin normalization.
    pub frontend_url: Option<String>,
    /// MongoDB connection string. Required.
    pub mongo_uri: String,
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Directory served as static files under `/uploads`.
    pub uploads_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// All environment access goes through `get`, so parsing is testable
    /// without mutating process-global state.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mongo_uri = get("MONGO_URI")
            .ok_or_else(|| ApiError::Config("MONGO_URI environment variable not set".to_string()))?;

        let frontend_url = get("FRONTEND_URL").filter(|url| !url.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                ApiError::Config(format!("PORT must be a number between 1 and 65535, got '{raw}'"))
            })?,
            None => DEFAULT_PORT,
        };

        let uploads_dir = get("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOADS_DIR));

        Ok(Self {
            frontend_url,
            mongo_uri,
            port,
            uploads_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn missing_mongo_uri_is_a_startup_error() {
        let err = AppConfig::from_lookup(env(&[])).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn port_and_uploads_dir_have_defaults() {
        let config =
            AppConfig::from_lookup(env(&[("MONGO_URI", "mongodb://localhost:27017")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.uploads_dir, PathBuf::from(DEFAULT_UPLOADS_DIR));
        assert!(config.frontend_url.is_none());
    }

    #[test]
    fn non_numeric_port_is_a_startup_error() {
        let vars = [
            ("MONGO_URI", "mongodb://localhost:27017"),
            ("PORT", "not-a-port"),
        ];
        let err = AppConfig::from_lookup(env(&vars)).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn out_of_range_port_is_a_startup_error() {
        let vars = [("MONGO_URI", "mongodb://localhost:27017"), ("PORT", "70000")];
        let err = AppConfig::from_lookup(env(&vars)).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn empty_frontend_url_is_treated_as_unset() {
        let vars = [
            ("MONGO_URI", "mongodb://localhost:27017"),
            ("FRONTEND_URL", ""),
        ];
        let config = AppConfig::from_lookup(env(&vars)).unwrap();
        assert!(config.frontend_url.is_none());
    }

    #[test]
    fn explicit_values_are_honored() {
        let vars = [
            ("MONGO_URI", "mongodb://db.internal:27017/propertyhub"),
            ("FRONTEND_URL", "https://app.propertyhub.example/"),
            ("PORT", "8080"),
            ("UPLOADS_DIR", "/srv/uploads"),
        ];
        let config = AppConfig::from_lookup(env(&vars)).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.frontend_url.as_deref(),
            Some("https://app.propertyhub.example/")
        );
        assert_eq!(config.uploads_dir, PathBuf::from("/srv/uploads"));
    }
}
