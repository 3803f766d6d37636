/// Diesel models for the import_runs table
use crate::modules::data_import::domain::{ImportRun, ImportRunStatus};
use crate::schema::import_runs;
use crate::shared::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Insertable, Debug)]
#[diesel(table_name = import_runs)]
pub struct NewImportRunModel<'a> {
    pub file_name: &'a str,
    pub status: &'a str,
    pub imported_count: Option<i32>,
    pub error_count: Option<i32>,
    pub owner_id: Uuid,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = import_runs)]
pub struct ImportRunModel {
    pub id: i64,
    pub file_name: String,
    pub status: String,
    pub total_records: Option<i32>,
    pub imported_count: Option<i32>,
    pub error_count: Option<i32>,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ImportRunModel {
    /// Convert to domain ImportRun
    pub fn to_domain(self) -> AppResult<ImportRun> {
        let status = self
            .status
            .parse::<ImportRunStatus>()
            .map_err(AppError::DatabaseError)?;

        Ok(ImportRun {
            id: self.id,
            file_name: self.file_name,
            status,
            total_records: self.total_records.map(count_from_db),
            imported_count: self.imported_count.map_or(0, count_from_db),
            error_count: self.error_count.map_or(0, count_from_db),
            owner_id: self.owner_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

pub fn count_from_db(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

pub fn count_to_db(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
