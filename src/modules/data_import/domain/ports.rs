use crate::modules::data_import::domain::entities::OwnerId;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Object storage the raw upload is archived to
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn upload(&self, path: &str, bytes: &[u8], content_type: &str) -> AppResult<()>;
}

/// Resolves the authenticated user an import belongs to
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// `Ok(None)` when nobody is signed in
    async fn current_owner(&self) -> AppResult<Option<OwnerId>>;
}
