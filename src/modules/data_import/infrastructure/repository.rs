/// Diesel-based implementation of ImportRunRepository
use crate::modules::data_import::domain::{
    ImportRun, ImportRunId, ImportRunRepository, ImportRunStatus, NewImportRun, OwnerId,
    RunProgress,
};
use crate::modules::data_import::infrastructure::models::{
    count_to_db, ImportRunModel, NewImportRunModel,
};
use crate::schema::import_runs;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::{Database, DbConnection};
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;

pub struct ImportRunRepositoryImpl {
    db: Arc<Database>,
}

impl ImportRunRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn get_conn(&self) -> AppResult<DbConnection> {
        self.db.get_connection()
    }
}

#[async_trait]
impl ImportRunRepository for ImportRunRepositoryImpl {
    async fn create(&self, run: NewImportRun) -> AppResult<ImportRun> {
        let mut conn = self.get_conn()?;

        let new_run = NewImportRunModel {
            file_name: &run.file_name,
            status: ImportRunStatus::Processing.as_str(),
            imported_count: Some(0),
            error_count: Some(0),
            owner_id: run.owner_id,
        };

        let inserted: ImportRunModel = diesel::insert_into(import_runs::table)
            .values(&new_run)
            .returning(ImportRunModel::as_returning())
            .get_result(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to create import run: {}", e)))?;

        inserted.to_domain()
    }

    async fn set_total(&self, run_id: ImportRunId, total: u32) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        diesel::update(import_runs::table.find(run_id))
            .set((
                import_runs::total_records.eq(Some(count_to_db(total))),
                import_runs::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to set import total: {}", e)))?;

        Ok(())
    }

    async fn update_progress(&self, run_id: ImportRunId, progress: RunProgress) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        diesel::update(import_runs::table.find(run_id))
            .set((
                import_runs::imported_count.eq(Some(count_to_db(progress.imported))),
                import_runs::error_count.eq(Some(count_to_db(progress.errors))),
                import_runs::status.eq(progress.status.as_str()),
                import_runs::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to update import progress: {}", e))
            })?;

        Ok(())
    }

    async fn find_by_owner(&self, owner_id: OwnerId, limit: i64) -> AppResult<Vec<ImportRun>> {
        let mut conn = self.get_conn()?;

        let runs: Vec<ImportRunModel> = import_runs::table
            .filter(import_runs::owner_id.eq(owner_id))
            .order((import_runs::created_at.desc(), import_runs::id.desc()))
            .limit(limit)
            .select(ImportRunModel::as_select())
            .load(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to list import runs: {}", e)))?;

        runs.into_iter().map(ImportRunModel::to_domain).collect()
    }
}
