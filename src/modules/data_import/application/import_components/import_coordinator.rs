use crate::modules::clients::domain::ClientRepository;
use crate::modules::data_import::domain::{
    decode_latin1, BlobStore, CsvAggregator, ImportError, ImportRunId, ImportRunRepository,
    ImportSummary, OwnerId, SessionProvider, UploadedFile,
};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::{log_debug, log_info};
use chrono::Utc;
use std::sync::Arc;

use super::client_persister::ClientPersister;
use super::progress_emitter::{
    persisting_progress, ProgressEmitter, PROGRESS_DONE, PROGRESS_FILE_ARCHIVED, PROGRESS_PARSED,
    PROGRESS_RUN_CREATED,
};
use super::progress_tracker::ImportRunTracker;

/// Stages of one run. There are no transitions back; a failure before
/// `FileArchived` aborts the run and leaves its record in `processing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStage {
    Created,
    FileArchived,
    Parsed,
    Persisting,
    Completed,
}

/// Object key the raw upload is archived under
pub fn archive_path(owner_id: OwnerId, timestamp_millis: i64, file_name: &str) -> String {
    format!("{}/{}_{}", owner_id, timestamp_millis, file_name)
}

/// Orchestrates one CSV import from upload to final tally
#[derive(Clone)]
pub struct ImportCoordinator {
    session: Arc<dyn SessionProvider>,
    blob_store: Arc<dyn BlobStore>,
    tracker: ImportRunTracker,
    persister: ClientPersister,
    aggregator: CsvAggregator,
}

impl ImportCoordinator {
    pub fn new(
        client_repo: Arc<dyn ClientRepository>,
        run_repo: Arc<dyn ImportRunRepository>,
        blob_store: Arc<dyn BlobStore>,
        session: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            session,
            blob_store,
            tracker: ImportRunTracker::new(run_repo),
            persister: ClientPersister::new(client_repo),
            aggregator: CsvAggregator::default(),
        }
    }

    /// Run the whole pipeline for one uploaded file.
    ///
    /// Candidates are persisted one at a time, in first-seen order; a failed
    /// candidate only bumps the error count. Progress goes 10, 30, 40, then
    /// one step per candidate, then 100.
    pub async fn import_file<F>(
        &self,
        file: &UploadedFile,
        on_progress: F,
    ) -> Result<ImportSummary, ImportError>
    where
        F: FnMut(u8) + Send,
    {
        let timer = TimedOperation::new("import_csv_file");
        let mut progress = ProgressEmitter::new(on_progress);

        let owner_id = self
            .session
            .current_owner()
            .await
            .map_err(ImportError::Session)?
            .ok_or(ImportError::Authentication)?;

        let run = self
            .tracker
            .create(&file.name, owner_id)
            .await
            .map_err(ImportError::RunCreation)?;
        self.enter(run.id, ImportStage::Created);
        progress.emit(PROGRESS_RUN_CREATED);

        let path = archive_path(owner_id, Utc::now().timestamp_millis(), &file.name);
        self.blob_store
            .upload(&path, &file.bytes, &file.content_type)
            .await
            .map_err(|e| {
                LogContext::error_with_context(&e, &format!("Error uploading file {}", path));
                ImportError::Archive(e)
            })?;
        self.enter(run.id, ImportStage::FileArchived);
        progress.emit(PROGRESS_FILE_ARCHIVED);

        let text = decode_latin1(&file.bytes);
        let candidates = self.aggregator.aggregate(&text);
        let total = candidates.len();
        let total_u32 = u32::try_from(total).unwrap_or(u32::MAX);
        self.enter(run.id, ImportStage::Parsed);
        progress.emit(PROGRESS_PARSED);
        log_info!(
            "Parsed '{}': {} candidates ({} lines without a name skipped)",
            file.name,
            total,
            candidates.skipped_lines()
        );

        self.tracker.set_total(run.id, total_u32).await;
        if total == 0 {
            // Nothing to persist; close the run now
            self.tracker.report_progress(run.id, 0, 0, 0).await;
        }

        self.enter(run.id, ImportStage::Persisting);
        let mut summary = ImportSummary::default();
        for (index, candidate) in candidates.iter().enumerate() {
            LogContext::import_progress(index + 1, total, &candidate.name);

            if self.persister.persist(candidate).await.is_imported() {
                summary.imported += 1;
            } else {
                summary.errors += 1;
            }

            progress.emit(persisting_progress(index + 1, total));
            self.tracker
                .report_progress(run.id, summary.imported, summary.errors, total_u32)
                .await;
        }

        self.enter(run.id, ImportStage::Completed);
        progress.emit(PROGRESS_DONE);

        timer.finish_with_info(&format!("run {}: {}", run.id, summary));
        log_info!("Import of '{}' finished: {}", file.name, summary);
        Ok(summary)
    }

    fn enter(&self, run_id: ImportRunId, stage: ImportStage) {
        log_debug!("Import run {} entered stage {:?}", run_id, stage);
    }
}
