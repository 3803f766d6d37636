pub mod models;
pub mod repository;
pub mod session_client;
pub mod storage_client;

pub use repository::ImportRunRepositoryImpl;
pub use session_client::HttpSessionProvider;
pub use storage_client::HttpBlobStore;
