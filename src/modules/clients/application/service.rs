use crate::modules::clients::domain::{
    ClientId, ClientRepository, ClientWithContacts, SaveClientRequest,
};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};
use std::sync::Arc;

/// Manual registry operations behind the client form and list.
///
/// Unlike the bulk importer, a failed email or phone write here fails the
/// whole save.
pub struct ClientService {
    client_repo: Arc<dyn ClientRepository>,
}

impl ClientService {
    pub fn new(client_repo: Arc<dyn ClientRepository>) -> Self {
        Self { client_repo }
    }

    pub async fn save_client(&self, request: SaveClientRequest) -> AppResult<ClientId> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Client name cannot be empty".to_string(),
            ));
        }

        let emails = non_blank(&request.emails);
        let phones = non_blank(&request.phones);

        let client_id = match request.id {
            Some(id) => {
                self.client_repo.update_name(id, name).await?;
                self.client_repo.delete_emails(id).await?;
                self.client_repo.delete_phones(id).await?;
                log_debug!("Replacing contacts for client {}", id);
                id
            }
            None => self.client_repo.insert_client(name).await?.id,
        };

        self.client_repo.insert_emails(client_id, &emails).await?;
        self.client_repo.insert_phones(client_id, &phones).await?;

        log_info!(
            "Saved client '{}' ({}) with {} emails and {} phones",
            name,
            client_id,
            emails.len(),
            phones.len()
        );
        Ok(client_id)
    }

    pub async fn get_client(&self, id: ClientId) -> AppResult<Option<ClientWithContacts>> {
        self.client_repo.find_by_id(id).await
    }

    /// All clients, or those whose name contains `search` (case-insensitive)
    pub async fn list_clients(&self, search: Option<&str>) -> AppResult<Vec<ClientWithContacts>> {
        let search = search
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_string);
        self.client_repo.find_all(search).await
    }

    pub async fn delete_client(&self, id: ClientId) -> AppResult<()> {
        self.client_repo.delete_client(id).await?;
        log_info!("Deleted client {}", id);
        Ok(())
    }

    pub async fn delete_all_clients(&self) -> AppResult<usize> {
        let deleted = self.client_repo.delete_all().await?;
        log_info!("Deleted all {} clients", deleted);
        Ok(deleted)
    }
}

fn non_blank(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}
