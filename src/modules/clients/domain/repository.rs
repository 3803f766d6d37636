/// Repository trait for client persistence
///
/// Every child operation is keyed by the owning client's id.
use crate::modules::clients::domain::entities::{Client, ClientId, ClientWithContacts};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Insert a client row and return it with its generated id
    async fn insert_client(&self, name: &str) -> AppResult<Client>;

    /// Bulk insert one email row per value; returns the number of rows written
    async fn insert_emails(&self, client_id: ClientId, emails: &[String]) -> AppResult<usize>;

    /// Bulk insert one phone row per value; returns the number of rows written
    async fn insert_phones(&self, client_id: ClientId, phones: &[String]) -> AppResult<usize>;

    /// Rename a client; NotFound if the id does not exist
    async fn update_name(&self, client_id: ClientId, name: &str) -> AppResult<()>;

    async fn delete_emails(&self, client_id: ClientId) -> AppResult<usize>;

    async fn delete_phones(&self, client_id: ClientId) -> AppResult<usize>;

    /// Delete one client and its contact rows
    async fn delete_client(&self, client_id: ClientId) -> AppResult<()>;

    /// Delete every email, phone and client row, children first
    async fn delete_all(&self) -> AppResult<usize>;

    async fn find_by_id(&self, client_id: ClientId) -> AppResult<Option<ClientWithContacts>>;

    /// Clients with contacts, ordered by name. `search` keeps only names
    /// containing the term, ignoring case
    async fn find_all(&self, search: Option<String>) -> AppResult<Vec<ClientWithContacts>>;
}
