use crate::modules::clients::domain::ClientRepository;
use crate::modules::data_import::domain::{
    BlobStore, ImportError, ImportRun, ImportRunRepository, ImportSummary, OwnerId,
    SessionProvider, UploadedFile,
};
use crate::shared::errors::AppResult;

use std::sync::Arc;

use super::import_components::ImportCoordinator;

/// Import service - clean interface over the import components
#[derive(Clone)]
pub struct ImportService {
    client_repo: Arc<dyn ClientRepository>,
    run_repo: Arc<dyn ImportRunRepository>,
    blob_store: Arc<dyn BlobStore>,
    session: Arc<dyn SessionProvider>,
}

impl ImportService {
    pub fn new(
        client_repo: Arc<dyn ClientRepository>,
        run_repo: Arc<dyn ImportRunRepository>,
        blob_store: Arc<dyn BlobStore>,
        session: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            client_repo,
            run_repo,
            blob_store,
            session,
        }
    }

    /// Import one uploaded CSV file, reporting progress (0..=100) as it goes
    pub async fn import_csv<F>(
        &self,
        file: UploadedFile,
        on_progress: F,
    ) -> Result<ImportSummary, ImportError>
    where
        F: FnMut(u8) + Send,
    {
        let coordinator = ImportCoordinator::new(
            self.client_repo.clone(),
            self.run_repo.clone(),
            self.blob_store.clone(),
            self.session.clone(),
        );

        coordinator.import_file(&file, on_progress).await
    }

    /// Import history for an owner, newest first
    pub async fn recent_runs(&self, owner_id: OwnerId, limit: i64) -> AppResult<Vec<ImportRun>> {
        self.run_repo.find_by_owner(owner_id, limit).await
    }

    /// The signed-in owner, if any
    pub async fn current_owner(&self) -> AppResult<Option<OwnerId>> {
        self.session.current_owner().await
    }
}
