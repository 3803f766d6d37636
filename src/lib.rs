pub mod modules;
mod schema;
pub mod shared;

use modules::{
    clients::{ClientRepository, ClientRepositoryImpl, ClientService},
    data_import::{
        BlobStore, HttpBlobStore, HttpSessionProvider, ImportRunRepository,
        ImportRunRepositoryImpl, ImportService, SessionProvider,
    },
};
use shared::errors::AppResult;
use shared::infrastructure::http_client::{create_http_client, USER_AGENT};
use shared::{AppConfig, Database};
use std::sync::Arc;

/// Services wired against Postgres and the hosted project APIs
#[derive(Clone)]
pub struct AppServices {
    pub clients: Arc<ClientService>,
    pub imports: Arc<ImportService>,
}

impl AppServices {
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let database = Arc::new(Database::new(config)?);

        let client_repo: Arc<dyn ClientRepository> =
            Arc::new(ClientRepositoryImpl::new(database.clone()));
        let run_repo: Arc<dyn ImportRunRepository> =
            Arc::new(ImportRunRepositoryImpl::new(database));

        // One reqwest client is shared by both HTTP adapters
        let http = create_http_client(config.http_timeout_secs, USER_AGENT)?;
        let blob_store: Arc<dyn BlobStore> = Arc::new(HttpBlobStore::new(http.clone(), config)?);
        let session: Arc<dyn SessionProvider> = Arc::new(HttpSessionProvider::new(http, config));

        log_info!(
            "Services initialized for project {} (bucket '{}')",
            config.project_url,
            config.storage_bucket
        );

        Ok(Self::from_parts(client_repo, run_repo, blob_store, session))
    }

    pub fn from_parts(
        client_repo: Arc<dyn ClientRepository>,
        run_repo: Arc<dyn ImportRunRepository>,
        blob_store: Arc<dyn BlobStore>,
        session: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            clients: Arc::new(ClientService::new(client_repo.clone())),
            imports: Arc::new(ImportService::new(client_repo, run_repo, blob_store, session)),
        }
    }
}
