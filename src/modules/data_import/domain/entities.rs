/// Domain entities for CSV bulk import
///
/// An import run is the persisted, auditable record of one upload. Candidates
/// are the transient, deduplicated-by-name rows the file aggregates to.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

pub type ImportRunId = i64;
pub type OwnerId = Uuid;

/// Run status as stored in the `import_runs.status` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportRunStatus {
    Processing,
    Completed,
}

impl ImportRunStatus {
    /// Completed once every candidate has been attempted
    pub fn for_counts(imported: u32, errors: u32, total: u32) -> Self {
        if imported.saturating_add(errors) == total {
            ImportRunStatus::Completed
        } else {
            ImportRunStatus::Processing
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImportRunStatus::Processing => "processing",
            ImportRunStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for ImportRunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ImportRunStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "processing" => Ok(ImportRunStatus::Processing),
            "completed" => Ok(ImportRunStatus::Completed),
            _ => Err(format!("Invalid import status: {}", s)),
        }
    }
}

/// Import run record (with metadata)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRun {
    pub id: ImportRunId,
    pub file_name: String,
    pub status: ImportRunStatus,
    pub total_records: Option<u32>,
    pub imported_count: u32,
    pub error_count: u32,
    pub owner_id: OwnerId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New run to be created (before insertion)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewImportRun {
    pub file_name: String,
    pub owner_id: OwnerId,
}

/// Counters written back after each candidate attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunProgress {
    pub imported: u32,
    pub errors: u32,
    pub status: ImportRunStatus,
}

impl RunProgress {
    pub fn new(imported: u32, errors: u32, total: u32) -> Self {
        Self {
            imported,
            errors,
            status: ImportRunStatus::for_counts(imported, errors, total),
        }
    }
}

/// One client's prospective row plus its merged contacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportCandidate {
    pub name: String,
    pub emails: BTreeSet<String>,
    pub phones: BTreeSet<String>,
}

impl ImportCandidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emails: BTreeSet::new(),
            phones: BTreeSet::new(),
        }
    }

    /// Union non-empty contact values into the candidate
    pub fn merge_contacts(&mut self, email: Option<&str>, phone: Option<&str>) {
        if let Some(email) = email.filter(|e| !e.is_empty()) {
            self.emails.insert(email.to_string());
        }
        if let Some(phone) = phone.filter(|p| !p.is_empty()) {
            self.phones.insert(phone.to_string());
        }
    }
}

/// Raw upload as received from the caller
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn csv(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: "text/csv".to_string(),
            bytes,
        }
    }
}

/// Final tally handed back to the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub imported: u32,
    pub errors: u32,
}

impl ImportSummary {
    pub fn total(&self) -> u32 {
        self.imported + self.errors
    }
}

impl std::fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} records imported, {} errors",
            self.imported, self.errors
        )
    }
}
