pub mod service;

pub use service::ClientService;
