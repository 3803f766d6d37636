pub mod entities;
pub mod repository;

pub use entities::{
    Client, ClientEmail, ClientId, ClientPhone, ClientWithContacts, SaveClientRequest,
};
pub use repository::ClientRepository;
