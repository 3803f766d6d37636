use crate::shared::errors::{AppError, AppResult};
use std::env;

pub const DEFAULT_STORAGE_BUCKET: &str = "csv-imports";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Runtime settings for the database, the hosted project and its services.
///
/// Read from the process environment (after loading `.env`) by
/// [`AppConfig::from_env`], or from any key lookup by
/// [`AppConfig::from_lookup`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub project_url: String,
    pub api_key: String,
    pub access_token: Option<String>,
    pub storage_bucket: String,
    pub http_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| {
                    AppError::ConfigError(format!("{} environment variable not found", key))
                })
        };

        let database_url = required("DATABASE_URL")?;
        if !database_url.starts_with("postgres://") && !database_url.starts_with("postgresql://")
        {
            return Err(AppError::ConfigError(
                "Invalid database URL format. Must start with postgres:// or postgresql://"
                    .to_string(),
            ));
        }

        let project_url = required("PROJECT_URL")?.trim_end_matches('/').to_string();
        if !project_url.starts_with("http://") && !project_url.starts_with("https://") {
            return Err(AppError::ConfigError(format!(
                "PROJECT_URL must be an http(s) URL, got '{}'",
                project_url
            )));
        }

        let api_key = required("PROJECT_API_KEY")?;

        let access_token = lookup("ACCESS_TOKEN")
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        let storage_bucket = lookup("STORAGE_BUCKET")
            .map(|bucket| bucket.trim().to_string())
            .filter(|bucket| !bucket.is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_BUCKET.to_string());

        let http_timeout_secs = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                AppError::ConfigError(format!("HTTP_TIMEOUT_SECS is not a number: {}", e))
            })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url,
            project_url,
            api_key,
            access_token,
            storage_bucket,
            http_timeout_secs,
        })
    }

    /// Host part of the database URL, for logging without credentials
    pub fn database_host(&self) -> &str {
        self.database_url
            .rsplit('@')
            .next()
            .unwrap_or("unknown_host")
    }
}
