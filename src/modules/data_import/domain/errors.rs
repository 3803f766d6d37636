use crate::shared::errors::AppError;
use thiserror::Error;

/// Fatal import failures. Per-candidate failures are never surfaced here;
/// they only show up in the final error count.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("No authenticated user")]
    Authentication,

    #[error("Failed to resolve the current session: {0}")]
    Session(#[source] AppError),

    #[error("Failed to create import record: {0}")]
    RunCreation(#[source] AppError),

    #[error("Failed to archive uploaded file: {0}")]
    Archive(#[source] AppError),
}
