pub mod clients;
pub mod data_import;
