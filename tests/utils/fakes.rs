/// In-memory stand-ins for the store, blob store and session
///
/// Each fake keeps its state behind a std Mutex and can be told to fail
/// specific calls.
use async_trait::async_trait;
use chrono::Utc;
use client_registry_lib::modules::clients::domain::{
    Client, ClientEmail, ClientId, ClientPhone, ClientRepository, ClientWithContacts,
};
use client_registry_lib::modules::data_import::domain::{
    BlobStore, ImportRun, ImportRunId, ImportRunRepository, ImportRunStatus, NewImportRun,
    OwnerId, RunProgress, SessionProvider,
};
use client_registry_lib::shared::errors::{AppError, AppResult};
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Default)]
struct ClientTables {
    next_id: i64,
    clients: Vec<Client>,
    emails: Vec<ClientEmail>,
    phones: Vec<ClientPhone>,
}

#[derive(Default)]
pub struct InMemoryClientRepository {
    tables: Mutex<ClientTables>,
    failing_names: Mutex<HashSet<String>>,
    fail_emails: Mutex<bool>,
    fail_phones: Mutex<bool>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `insert_client` fail for this exact name
    pub fn fail_insert_for(&self, name: &str) {
        self.failing_names.lock().unwrap().insert(name.to_string());
    }

    pub fn fail_email_inserts(&self) {
        *self.fail_emails.lock().unwrap() = true;
    }

    pub fn fail_phone_inserts(&self) {
        *self.fail_phones.lock().unwrap() = true;
    }

    pub fn client_names(&self) -> Vec<String> {
        let tables = self.tables.lock().unwrap();
        tables.clients.iter().map(|c| c.name.clone()).collect()
    }

    pub fn emails_for(&self, name: &str) -> Vec<String> {
        let tables = self.tables.lock().unwrap();
        let ids: Vec<ClientId> = tables
            .clients
            .iter()
            .filter(|c| c.name == name)
            .map(|c| c.id)
            .collect();
        tables
            .emails
            .iter()
            .filter(|e| ids.contains(&e.client_id))
            .map(|e| e.email.clone())
            .collect()
    }

    pub fn phones_for(&self, name: &str) -> Vec<String> {
        let tables = self.tables.lock().unwrap();
        let ids: Vec<ClientId> = tables
            .clients
            .iter()
            .filter(|c| c.name == name)
            .map(|c| c.id)
            .collect();
        tables
            .phones
            .iter()
            .filter(|p| ids.contains(&p.client_id))
            .map(|p| p.phone.clone())
            .collect()
    }

    pub fn email_count(&self) -> usize {
        self.tables.lock().unwrap().emails.len()
    }

    pub fn phone_count(&self) -> usize {
        self.tables.lock().unwrap().phones.len()
    }

    /// Every child row points at an existing client
    pub fn children_are_consistent(&self) -> bool {
        let tables = self.tables.lock().unwrap();
        let ids: HashSet<ClientId> = tables.clients.iter().map(|c| c.id).collect();
        tables.emails.iter().all(|e| ids.contains(&e.client_id))
            && tables.phones.iter().all(|p| ids.contains(&p.client_id))
    }

    fn contacts(tables: &ClientTables, client: &Client) -> ClientWithContacts {
        ClientWithContacts {
            client: client.clone(),
            emails: tables
                .emails
                .iter()
                .filter(|e| e.client_id == client.id)
                .cloned()
                .collect(),
            phones: tables
                .phones
                .iter()
                .filter(|p| p.client_id == client.id)
                .cloned()
                .collect(),
        }
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn insert_client(&self, name: &str) -> AppResult<Client> {
        if self.failing_names.lock().unwrap().contains(name) {
            return Err(AppError::DatabaseError(format!(
                "insert rejected for '{}'",
                name
            )));
        }

        let mut tables = self.tables.lock().unwrap();
        tables.next_id += 1;
        let client = Client {
            id: tables.next_id,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        tables.clients.push(client.clone());
        Ok(client)
    }

    async fn insert_emails(&self, client_id: ClientId, emails: &[String]) -> AppResult<usize> {
        if *self.fail_emails.lock().unwrap() {
            return Err(AppError::DatabaseError("email insert failed".to_string()));
        }

        let mut tables = self.tables.lock().unwrap();
        for email in emails {
            tables.next_id += 1;
            let id = tables.next_id;
            tables.emails.push(ClientEmail {
                id,
                client_id,
                email: email.clone(),
            });
        }
        Ok(emails.len())
    }

    async fn insert_phones(&self, client_id: ClientId, phones: &[String]) -> AppResult<usize> {
        if *self.fail_phones.lock().unwrap() {
            return Err(AppError::DatabaseError("phone insert failed".to_string()));
        }

        let mut tables = self.tables.lock().unwrap();
        for phone in phones {
            tables.next_id += 1;
            let id = tables.next_id;
            tables.phones.push(ClientPhone {
                id,
                client_id,
                phone: phone.clone(),
            });
        }
        Ok(phones.len())
    }

    async fn update_name(&self, client_id: ClientId, name: &str) -> AppResult<()> {
        let mut tables = self.tables.lock().unwrap();
        match tables.clients.iter_mut().find(|c| c.id == client_id) {
            Some(client) => {
                client.name = name.to_string();
                Ok(())
            }
            None => Err(AppError::NotFound(format!(
                "Client {} not found",
                client_id
            ))),
        }
    }

    async fn delete_emails(&self, client_id: ClientId) -> AppResult<usize> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.emails.len();
        tables.emails.retain(|e| e.client_id != client_id);
        Ok(before - tables.emails.len())
    }

    async fn delete_phones(&self, client_id: ClientId) -> AppResult<usize> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.phones.len();
        tables.phones.retain(|p| p.client_id != client_id);
        Ok(before - tables.phones.len())
    }

    async fn delete_client(&self, client_id: ClientId) -> AppResult<()> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.clients.iter().any(|c| c.id == client_id) {
            return Err(AppError::NotFound(format!(
                "Client {} not found",
                client_id
            )));
        }
        tables.emails.retain(|e| e.client_id != client_id);
        tables.phones.retain(|p| p.client_id != client_id);
        tables.clients.retain(|c| c.id != client_id);
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<usize> {
        let mut tables = self.tables.lock().unwrap();
        let removed = tables.clients.len();
        tables.emails.clear();
        tables.phones.clear();
        tables.clients.clear();
        Ok(removed)
    }

    async fn find_by_id(&self, client_id: ClientId) -> AppResult<Option<ClientWithContacts>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .clients
            .iter()
            .find(|c| c.id == client_id)
            .map(|c| Self::contacts(&tables, c)))
    }

    async fn find_all(&self, search: Option<String>) -> AppResult<Vec<ClientWithContacts>> {
        let tables = self.tables.lock().unwrap();
        let term = search.map(|t| t.to_lowercase());
        let mut clients: Vec<&Client> = tables
            .clients
            .iter()
            .filter(|c| {
                term.as_ref()
                    .map_or(true, |t| c.name.to_lowercase().contains(t.as_str()))
            })
            .collect();
        clients.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(clients
            .into_iter()
            .map(|c| Self::contacts(&tables, c))
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryImportRunRepository {
    runs: Mutex<Vec<ImportRun>>,
    totals_set: Mutex<Vec<(ImportRunId, u32)>>,
    fail_create: Mutex<bool>,
    fail_updates: Mutex<bool>,
}

impl InMemoryImportRunRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_create(&self) {
        *self.fail_create.lock().unwrap() = true;
    }

    /// Make `set_total` and `update_progress` fail
    pub fn fail_updates(&self) {
        *self.fail_updates.lock().unwrap() = true;
    }

    pub fn runs(&self) -> Vec<ImportRun> {
        self.runs.lock().unwrap().clone()
    }

    pub fn only_run(&self) -> ImportRun {
        let runs = self.runs.lock().unwrap();
        assert_eq!(runs.len(), 1, "expected exactly one import run");
        runs[0].clone()
    }

    pub fn totals_set(&self) -> Vec<(ImportRunId, u32)> {
        self.totals_set.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImportRunRepository for InMemoryImportRunRepository {
    async fn create(&self, run: NewImportRun) -> AppResult<ImportRun> {
        if *self.fail_create.lock().unwrap() {
            return Err(AppError::DatabaseError("import_runs unavailable".to_string()));
        }

        let mut runs = self.runs.lock().unwrap();
        let now = Utc::now();
        let created = ImportRun {
            id: runs.len() as i64 + 1,
            file_name: run.file_name,
            status: ImportRunStatus::Processing,
            total_records: None,
            imported_count: 0,
            error_count: 0,
            owner_id: run.owner_id,
            created_at: now,
            updated_at: now,
        };
        runs.push(created.clone());
        Ok(created)
    }

    async fn set_total(&self, run_id: ImportRunId, total: u32) -> AppResult<()> {
        if *self.fail_updates.lock().unwrap() {
            return Err(AppError::DatabaseError("import_runs update timed out".to_string()));
        }

        self.totals_set.lock().unwrap().push((run_id, total));
        let mut runs = self.runs.lock().unwrap();
        if let Some(run) = runs.iter_mut().find(|r| r.id == run_id) {
            run.total_records = Some(total);
            run.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn update_progress(&self, run_id: ImportRunId, progress: RunProgress) -> AppResult<()> {
        if *self.fail_updates.lock().unwrap() {
            return Err(AppError::DatabaseError("import_runs update timed out".to_string()));
        }

        let mut runs = self.runs.lock().unwrap();
        if let Some(run) = runs.iter_mut().find(|r| r.id == run_id) {
            run.imported_count = progress.imported;
            run.error_count = progress.errors;
            run.status = progress.status;
            run.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn find_by_owner(&self, owner_id: OwnerId, limit: i64) -> AppResult<Vec<ImportRun>> {
        let runs = self.runs.lock().unwrap();
        Ok(runs
            .iter()
            .rev()
            .filter(|r| r.owner_id == owner_id)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub path: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[derive(Default)]
pub struct InMemoryBlobStore {
    objects: Mutex<Vec<StoredObject>>,
    fail: Mutex<bool>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let store = Self::default();
        *store.fail.lock().unwrap() = true;
        store
    }

    pub fn objects(&self) -> Vec<StoredObject> {
        self.objects.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn upload(&self, path: &str, bytes: &[u8], content_type: &str) -> AppResult<()> {
        if *self.fail.lock().unwrap() {
            return Err(AppError::StorageError("bucket not found".to_string()));
        }

        let mut objects = self.objects.lock().unwrap();
        if objects.iter().any(|o| o.path == path) {
            return Err(AppError::StorageError(format!("{} already exists", path)));
        }
        objects.push(StoredObject {
            path: path.to_string(),
            bytes: bytes.to_vec(),
            content_type: content_type.to_string(),
        });
        Ok(())
    }
}

pub struct FixedSession {
    owner: Option<OwnerId>,
    fail: bool,
}

impl FixedSession {
    pub fn signed_in(owner: OwnerId) -> Self {
        Self {
            owner: Some(owner),
            fail: false,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            owner: None,
            fail: false,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            owner: None,
            fail: true,
        }
    }
}

#[async_trait]
impl SessionProvider for FixedSession {
    async fn current_owner(&self) -> AppResult<Option<OwnerId>> {
        if self.fail {
            return Err(AppError::ExternalServiceError(
                "auth service unreachable".to_string(),
            ));
        }
        Ok(self.owner)
    }
}
