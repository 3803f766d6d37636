pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::ClientService;
pub use domain::{Client, ClientId, ClientRepository, ClientWithContacts, SaveClientRequest};
pub use infrastructure::ClientRepositoryImpl;
