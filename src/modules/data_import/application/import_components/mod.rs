pub mod client_persister;
pub mod import_coordinator;
pub mod progress_emitter;
pub mod progress_tracker;

// Re-export main types for public API
pub use client_persister::{ClientPersister, PersistOutcome};
pub use import_coordinator::{archive_path, ImportCoordinator, ImportStage};
pub use progress_emitter::{persisting_progress, ProgressEmitter};
pub use progress_tracker::ImportRunTracker;
