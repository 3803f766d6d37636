pub mod entities;
pub mod errors;
pub mod ports;
pub mod repository;
pub mod services;

pub use entities::{
    ImportCandidate, ImportRun, ImportRunId, ImportRunStatus, ImportSummary, NewImportRun,
    OwnerId, RunProgress, UploadedFile,
};
pub use errors::ImportError;
pub use ports::{BlobStore, SessionProvider};
pub use repository::ImportRunRepository;
pub use services::{decode_latin1, CandidateSet, CsvAggregator, FieldParser};
