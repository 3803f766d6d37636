pub mod import_components;
pub mod service;

pub use service::ImportService;
