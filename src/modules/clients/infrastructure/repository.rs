/// Diesel-based implementation of ClientRepository
use crate::modules::clients::domain::entities::{Client, ClientId, ClientWithContacts};
use crate::modules::clients::domain::repository::ClientRepository;
use crate::modules::clients::infrastructure::models::{
    ClientEmailModel, ClientModel, ClientPhoneModel, NewClient, NewClientEmail, NewClientPhone,
};
use crate::schema::{client_emails, client_phones, clients};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::{Database, DbConnection};
use crate::shared::utils::logger::LogContext;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::PgTextExpressionMethods;
use std::sync::Arc;

pub struct ClientRepositoryImpl {
    db: Arc<Database>,
}

impl ClientRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn get_conn(&self) -> AppResult<DbConnection> {
        self.db.get_connection()
    }

    fn load_contacts(
        conn: &mut PgConnection,
        rows: Vec<ClientModel>,
    ) -> QueryResult<Vec<ClientWithContacts>> {
        let emails = ClientEmailModel::belonging_to(&rows)
            .select(ClientEmailModel::as_select())
            .order(client_emails::id.asc())
            .load(conn)?
            .grouped_by(&rows);

        let phones = ClientPhoneModel::belonging_to(&rows)
            .select(ClientPhoneModel::as_select())
            .order(client_phones::id.asc())
            .load(conn)?
            .grouped_by(&rows);

        Ok(rows
            .into_iter()
            .zip(emails)
            .zip(phones)
            .map(|((client, emails), phones)| client.with_contacts(emails, phones))
            .collect())
    }
}

#[async_trait]
impl ClientRepository for ClientRepositoryImpl {
    async fn insert_client(&self, name: &str) -> AppResult<Client> {
        let mut conn = self.get_conn()?;

        let inserted: ClientModel = diesel::insert_into(clients::table)
            .values(&NewClient { name })
            .returning(ClientModel::as_returning())
            .get_result(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to insert client: {}", e)))?;

        Ok(inserted.to_domain())
    }

    async fn insert_emails(&self, client_id: ClientId, emails: &[String]) -> AppResult<usize> {
        if emails.is_empty() {
            return Ok(0);
        }
        let mut conn = self.get_conn()?;

        let rows: Vec<NewClientEmail<'_>> = emails
            .iter()
            .map(|email| NewClientEmail {
                client_id,
                email: email.as_str(),
            })
            .collect();

        diesel::insert_into(client_emails::table)
            .values(&rows)
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to insert emails: {}", e)))
    }

    async fn insert_phones(&self, client_id: ClientId, phones: &[String]) -> AppResult<usize> {
        if phones.is_empty() {
            return Ok(0);
        }
        let mut conn = self.get_conn()?;

        let rows: Vec<NewClientPhone<'_>> = phones
            .iter()
            .map(|phone| NewClientPhone {
                client_id,
                phone: phone.as_str(),
            })
            .collect();

        diesel::insert_into(client_phones::table)
            .values(&rows)
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to insert phones: {}", e)))
    }

    async fn update_name(&self, client_id: ClientId, name: &str) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        let updated = diesel::update(clients::table.find(client_id))
            .set(clients::name.eq(name))
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to update client: {}", e)))?;

        if updated == 0 {
            return Err(AppError::NotFound(format!(
                "Client with ID {} not found",
                client_id
            )));
        }
        Ok(())
    }

    async fn delete_emails(&self, client_id: ClientId) -> AppResult<usize> {
        let mut conn = self.get_conn()?;

        diesel::delete(client_emails::table.filter(client_emails::client_id.eq(client_id)))
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to delete emails: {}", e)))
    }

    async fn delete_phones(&self, client_id: ClientId) -> AppResult<usize> {
        let mut conn = self.get_conn()?;

        diesel::delete(client_phones::table.filter(client_phones::client_id.eq(client_id)))
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to delete phones: {}", e)))
    }

    async fn delete_client(&self, client_id: ClientId) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        let deleted = conn
            .transaction::<usize, diesel::result::Error, _>(|conn| {
                diesel::delete(client_emails::table.filter(client_emails::client_id.eq(client_id)))
                    .execute(conn)?;
                diesel::delete(client_phones::table.filter(client_phones::client_id.eq(client_id)))
                    .execute(conn)?;
                diesel::delete(clients::table.find(client_id)).execute(conn)
            })
            .map_err(|e| AppError::DatabaseError(format!("Failed to delete client: {}", e)))?;

        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "Client with ID {} not found",
                client_id
            )));
        }
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<usize> {
        let start = std::time::Instant::now();
        let mut conn = self.get_conn()?;

        let deleted = conn
            .transaction::<usize, diesel::result::Error, _>(|conn| {
                diesel::delete(client_emails::table).execute(conn)?;
                diesel::delete(client_phones::table).execute(conn)?;
                diesel::delete(clients::table).execute(conn)
            })
            .map_err(|e| AppError::DatabaseError(format!("Failed to delete clients: {}", e)))?;

        LogContext::db_operation(
            "delete_all",
            "clients",
            Some(start.elapsed().as_millis() as u64),
        );
        Ok(deleted)
    }

    async fn find_by_id(&self, client_id: ClientId) -> AppResult<Option<ClientWithContacts>> {
        let mut conn = self.get_conn()?;

        let client: Option<ClientModel> = clients::table
            .find(client_id)
            .select(ClientModel::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| AppError::DatabaseError(format!("Failed to get client by id: {}", e)))?;

        match client {
            Some(client) => {
                let mut loaded = Self::load_contacts(&mut conn, vec![client])?;
                Ok(loaded.pop())
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self, search: Option<String>) -> AppResult<Vec<ClientWithContacts>> {
        let mut conn = self.get_conn()?;

        let mut query = clients::table
            .select(ClientModel::as_select())
            .into_boxed();
        if let Some(term) = search {
            query = query.filter(clients::name.ilike(format!("%{}%", term)));
        }

        let rows: Vec<ClientModel> = query
            .order((clients::name.asc(), clients::id.asc()))
            .load(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to list clients: {}", e)))?;

        Ok(Self::load_contacts(&mut conn, rows)?)
    }
}
