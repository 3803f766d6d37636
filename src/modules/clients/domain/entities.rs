/// Domain entities for the client registry
///
/// A client owns zero or more email and phone rows, related by the client id.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ClientId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEmail {
    pub id: i64,
    pub client_id: ClientId,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientPhone {
    pub id: i64,
    pub client_id: ClientId,
    pub phone: String,
}

/// A client together with its contact rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientWithContacts {
    pub client: Client,
    pub emails: Vec<ClientEmail>,
    pub phones: Vec<ClientPhone>,
}

impl ClientWithContacts {
    pub fn email_values(&self) -> Vec<&str> {
        self.emails.iter().map(|e| e.email.as_str()).collect()
    }

    pub fn phone_values(&self) -> Vec<&str> {
        self.phones.iter().map(|p| p.phone.as_str()).collect()
    }
}

/// Manual create/update request coming from the registry form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveClientRequest {
    /// Present when editing an existing client
    pub id: Option<ClientId>,
    pub name: String,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}

impl SaveClientRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn for_client(mut self, id: ClientId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_emails<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emails = emails.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_phones<I, S>(mut self, phones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phones = phones.into_iter().map(Into::into).collect();
        self
    }
}
