/// Repository trait for import run persistence
use crate::modules::data_import::domain::entities::{
    ImportRun, ImportRunId, NewImportRun, OwnerId, RunProgress,
};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImportRunRepository: Send + Sync {
    /// Insert a run in `processing` with zeroed counters
    async fn create(&self, run: NewImportRun) -> AppResult<ImportRun>;

    /// Record the expected candidate count
    async fn set_total(&self, run_id: ImportRunId, total: u32) -> AppResult<()>;

    /// Write back the running counters and status
    async fn update_progress(&self, run_id: ImportRunId, progress: RunProgress) -> AppResult<()>;

    /// Runs started by an owner, newest first
    async fn find_by_owner(&self, owner_id: OwnerId, limit: i64) -> AppResult<Vec<ImportRun>>;
}
