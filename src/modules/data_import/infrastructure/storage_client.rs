use crate::modules::data_import::domain::BlobStore;
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::http_client::{create_http_client, project_headers, USER_AGENT};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, warn};

/// Blob store backed by the hosted project's storage API.
///
/// Objects are written with `POST /storage/v1/object/{bucket}/{path}` and are
/// never overwritten.
pub struct HttpBlobStore {
    client: Client,
    base_url: String,
    bucket: String,
    headers: HeaderMap,
}

impl HttpBlobStore {
    pub fn new(client: Client, config: &AppConfig) -> AppResult<Self> {
        let bearer = config.access_token.as_deref().unwrap_or(&config.api_key);
        Ok(Self {
            client,
            base_url: format!("{}/storage/v1", config.project_url),
            bucket: config.storage_bucket.clone(),
            headers: project_headers(&config.api_key, bearer)?,
        })
    }

    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let client = create_http_client(config.http_timeout_secs, USER_AGENT)?;
        Self::new(client, config)
    }

    pub fn object_url(&self, path: &str) -> String {
        format!(
            "{}/object/{}/{}",
            self.base_url,
            urlencoding::encode(&self.bucket),
            encode_object_path(path)
        )
    }
}

/// Percent-encode each segment of an object key, keeping the `/` separators
pub fn encode_object_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    async fn upload(&self, path: &str, bytes: &[u8], content_type: &str) -> AppResult<()> {
        let url = self.object_url(path);
        debug!("Uploading {} bytes to {}", bytes.len(), url);

        let content_type = HeaderValue::from_str(content_type)
            .map_err(|_| AppError::InvalidInput(format!("Invalid content type: {}", content_type)))?;

        let response = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes.to_vec())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!("Storage upload to {} failed with {}: {}", url, status, body);
        Err(AppError::StorageError(format!(
            "Upload of '{}' failed with HTTP {}: {}",
            path, status, body
        )))
    }
}
