pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::import_components::{ImportCoordinator, PersistOutcome};
pub use application::service::ImportService;
pub use domain::{
    BlobStore, ImportCandidate, ImportError, ImportRun, ImportRunRepository, ImportRunStatus,
    ImportSummary, OwnerId, SessionProvider, UploadedFile,
};
pub use infrastructure::{HttpBlobStore, HttpSessionProvider, ImportRunRepositoryImpl};
