use crate::modules::clients::domain::{ClientId, ClientRepository};
use crate::modules::data_import::domain::ImportCandidate;
use crate::shared::utils::logger::LogContext;
use crate::{log_debug, log_warn};
use std::sync::Arc;

/// Result of writing one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// The client row exists; contact writes may still have failed
    Imported {
        client_id: ClientId,
        emails_saved: bool,
        phones_saved: bool,
    },
    /// The client row could not be inserted; nothing was written
    Failed { reason: String },
}

impl PersistOutcome {
    pub fn is_imported(&self) -> bool {
        matches!(self, PersistOutcome::Imported { .. })
    }
}

/// Writes a candidate as client → emails → phones.
///
/// Only the client insert decides the outcome. Email and phone batches are
/// best effort and independent of each other: their failures are logged and
/// the client still counts as imported.
#[derive(Clone)]
pub struct ClientPersister {
    client_repo: Arc<dyn ClientRepository>,
}

impl ClientPersister {
    pub fn new(client_repo: Arc<dyn ClientRepository>) -> Self {
        Self { client_repo }
    }

    pub async fn persist(&self, candidate: &ImportCandidate) -> PersistOutcome {
        let client = match self.client_repo.insert_client(&candidate.name).await {
            Ok(client) => client,
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    &format!("Error inserting client {}", candidate.name),
                );
                return PersistOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let mut emails_saved = true;
        if !candidate.emails.is_empty() {
            let emails: Vec<String> = candidate.emails.iter().cloned().collect();
            if let Err(e) = self.client_repo.insert_emails(client.id, &emails).await {
                log_warn!("Error inserting emails for client {}: {}", candidate.name, e);
                emails_saved = false;
            }
        }

        let mut phones_saved = true;
        if !candidate.phones.is_empty() {
            let phones: Vec<String> = candidate.phones.iter().cloned().collect();
            if let Err(e) = self.client_repo.insert_phones(client.id, &phones).await {
                log_warn!("Error inserting phones for client {}: {}", candidate.name, e);
                phones_saved = false;
            }
        }

        log_debug!(
            "Persisted client '{}' as {} ({} emails, {} phones)",
            candidate.name,
            client.id,
            candidate.emails.len(),
            candidate.phones.len()
        );

        PersistOutcome::Imported {
            client_id: client.id,
            emails_saved,
            phones_saved,
        }
    }
}
