/// Service builders over the in-memory fakes
use super::fakes::{
    FixedSession, InMemoryBlobStore, InMemoryClientRepository, InMemoryImportRunRepository,
};
use client_registry_lib::modules::data_import::OwnerId;
use client_registry_lib::AppServices;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub struct TestHarness {
    pub owner: OwnerId,
    pub clients: Arc<InMemoryClientRepository>,
    pub runs: Arc<InMemoryImportRunRepository>,
    pub blobs: Arc<InMemoryBlobStore>,
    pub services: AppServices,
}

pub fn build_harness() -> TestHarness {
    build_harness_with(InMemoryBlobStore::new(), None)
}

/// `session` defaults to a signed-in random owner
pub fn build_harness_with(blobs: InMemoryBlobStore, session: Option<FixedSession>) -> TestHarness {
    let owner = Uuid::new_v4();
    let clients = Arc::new(InMemoryClientRepository::new());
    let runs = Arc::new(InMemoryImportRunRepository::new());
    let blobs = Arc::new(blobs);
    let session = Arc::new(session.unwrap_or_else(|| FixedSession::signed_in(owner)));

    let services = AppServices::from_parts(clients.clone(), runs.clone(), blobs.clone(), session);

    TestHarness {
        owner,
        clients,
        runs,
        blobs,
        services,
    }
}

/// Progress callback that records every value it sees
pub fn progress_recorder() -> (Arc<Mutex<Vec<u8>>>, impl FnMut(u8) + Send) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |percent| sink.lock().unwrap().push(percent))
}

/// Encode text as Latin-1; panics on characters outside U+0000..=U+00FF
pub fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).expect("character outside Latin-1"))
        .collect()
}
