use crate::shared::errors::{AppError, AppResult};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;

pub const USER_AGENT: &str = "Client-Registry/0.1";

/// Build the shared HTTP client used by the hosted-service adapters
pub fn create_http_client(timeout_secs: u64, user_agent: &str) -> AppResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(user_agent)
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))
}

/// Headers the hosted project expects on every request: the project key plus
/// a bearer token (the user's session token, or the key itself)
pub fn project_headers(api_key: &str, bearer: &str) -> AppResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "apikey",
        HeaderValue::from_str(api_key)
            .map_err(|_| AppError::ConfigError("API key contains invalid characters".to_string()))?,
    );
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", bearer)).map_err(|_| {
            AppError::ConfigError("Access token contains invalid characters".to_string())
        })?,
    );
    Ok(headers)
}
