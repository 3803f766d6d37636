use crate::modules::data_import::domain::{OwnerId, SessionProvider};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::http_client::{create_http_client, project_headers, USER_AGENT};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: OwnerId,
}

/// Session lookup against the hosted auth API (`GET /auth/v1/user`).
///
/// Without an access token nobody is signed in.
pub struct HttpSessionProvider {
    client: Client,
    user_url: String,
    api_key: String,
    access_token: Option<String>,
}

impl HttpSessionProvider {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        Self {
            client,
            user_url: format!("{}/auth/v1/user", config.project_url),
            api_key: config.api_key.clone(),
            access_token: config.access_token.clone(),
        }
    }

    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let client = create_http_client(config.http_timeout_secs, USER_AGENT)?;
        Ok(Self::new(client, config))
    }
}

#[async_trait]
impl SessionProvider for HttpSessionProvider {
    async fn current_owner(&self) -> AppResult<Option<OwnerId>> {
        let Some(token) = self.access_token.as_deref() else {
            debug!("No access token configured, no active session");
            return Ok(None);
        };

        let response = self
            .client
            .get(&self.user_url)
            .headers(project_headers(&self.api_key, token)?)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                debug!("Access token rejected by auth service");
                Ok(None)
            }
            status if status.is_success() => {
                let user = response.json::<AuthUser>().await.map_err(|e| {
                    AppError::ApiError(format!("Failed to parse auth user response: {}", e))
                })?;
                Ok(Some(user.id))
            }
            status => Err(AppError::ExternalServiceError(format!(
                "Auth service returned HTTP {}",
                status
            ))),
        }
    }
}
