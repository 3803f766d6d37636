use crate::modules::data_import::domain::{
    ImportRun, ImportRunId, ImportRunRepository, NewImportRun, OwnerId, RunProgress,
};
use crate::shared::errors::AppResult;
use crate::{log_debug, log_error};
use std::sync::Arc;

/// Keeps the persisted run record in step with the import.
///
/// Only creation can fail the import. Later updates are best effort: a
/// failure is logged and reported as `false`.
#[derive(Clone)]
pub struct ImportRunTracker {
    run_repo: Arc<dyn ImportRunRepository>,
}

impl ImportRunTracker {
    pub fn new(run_repo: Arc<dyn ImportRunRepository>) -> Self {
        Self { run_repo }
    }

    pub async fn create(&self, file_name: &str, owner_id: OwnerId) -> AppResult<ImportRun> {
        let run = self
            .run_repo
            .create(NewImportRun {
                file_name: file_name.to_string(),
                owner_id,
            })
            .await?;

        log_debug!("Created import run {} for '{}'", run.id, run.file_name);
        Ok(run)
    }

    pub async fn set_total(&self, run_id: ImportRunId, total: u32) -> bool {
        match self.run_repo.set_total(run_id, total).await {
            Ok(()) => true,
            Err(e) => {
                log_error!("Failed to record total for import run {}: {}", run_id, e);
                false
            }
        }
    }

    pub async fn report_progress(
        &self,
        run_id: ImportRunId,
        imported: u32,
        errors: u32,
        total: u32,
    ) -> bool {
        let progress = RunProgress::new(imported, errors, total);
        match self.run_repo.update_progress(run_id, progress).await {
            Ok(()) => true,
            Err(e) => {
                log_error!("Failed to update progress for import run {}: {}", run_id, e);
                false
            }
        }
    }
}
