/// Diesel models for the clients, client_emails and client_phones tables
use crate::modules::clients::domain::entities::{
    Client, ClientEmail, ClientPhone, ClientWithContacts,
};
use crate::schema::{client_emails, client_phones, clients};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = clients)]
pub struct ClientModel {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = clients)]
pub struct NewClient<'a> {
    pub name: &'a str,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(ClientModel, foreign_key = client_id))]
#[diesel(table_name = client_emails)]
pub struct ClientEmailModel {
    pub id: i64,
    pub client_id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = client_emails)]
pub struct NewClientEmail<'a> {
    pub client_id: i64,
    pub email: &'a str,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(ClientModel, foreign_key = client_id))]
#[diesel(table_name = client_phones)]
pub struct ClientPhoneModel {
    pub id: i64,
    pub client_id: i64,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = client_phones)]
pub struct NewClientPhone<'a> {
    pub client_id: i64,
    pub phone: &'a str,
}

impl ClientModel {
    pub fn to_domain(self) -> Client {
        Client {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
        }
    }

    pub fn with_contacts(
        self,
        emails: Vec<ClientEmailModel>,
        phones: Vec<ClientPhoneModel>,
    ) -> ClientWithContacts {
        ClientWithContacts {
            client: self.to_domain(),
            emails: emails.into_iter().map(ClientEmailModel::to_domain).collect(),
            phones: phones.into_iter().map(ClientPhoneModel::to_domain).collect(),
        }
    }
}

impl ClientEmailModel {
    pub fn to_domain(self) -> ClientEmail {
        ClientEmail {
            id: self.id,
            client_id: self.client_id,
            email: self.email,
        }
    }
}

impl ClientPhoneModel {
    pub fn to_domain(self) -> ClientPhone {
        ClientPhone {
            id: self.id,
            client_id: self.client_id,
            phone: self.phone,
        }
    }
}
