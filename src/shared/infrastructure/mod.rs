/// Shared infrastructure concerns
///
/// This module contains infrastructure implementations that are shared across
/// multiple bounded contexts (modules).
pub mod database;
pub mod http_client;

// Re-exports for convenience
pub use database::Database;
pub use http_client::create_http_client;
