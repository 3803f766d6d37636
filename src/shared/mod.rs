// Shared kernel used by the clients and data_import modules

pub mod config;
pub mod errors;
pub mod infrastructure;
pub mod utils;

pub use config::AppConfig;
pub use infrastructure::database::Database;
