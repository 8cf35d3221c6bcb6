use super::models::{Client, NewClient};
use super::validators::ClientValidator;
use crate::common::{safe_email_log, ApiError, RawFields, Validator};
use sqlx::SqlitePool;
use tracing::{debug, info};

pub struct ClientsService {
    db: SqlitePool,
}

impl ClientsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all clients
    pub async fn get_all_clients(&self) -> Result<Vec<Client>, ApiError> {
        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT id, name, phone, city, email, created_at, updated_at
            FROM clients
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(clients)
    }

    /// Get client by ID
    pub async fn get_client_by_id(&self, client_id: i64) -> Result<Client, ApiError> {
        sqlx::query_as::<_, Client>(
            r#"
            SELECT id, name, phone, city, email, created_at, updated_at
            FROM clients
            WHERE id = ?
            "#,
        )
        .bind(client_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Client not found".to_string()))
    }

    /// Validate and create a new client
    pub async fn create_client(&self, fields: &RawFields) -> Result<Client, ApiError> {
        let client = Self::validate(fields)?;
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO clients (name, phone, city, email, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&client.name)
        .bind(client.phone)
        .bind(client.city)
        .bind(&client.email)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await?;

        let client_id = result.last_insert_rowid();
        info!(
            "Created client: {} <{}> ({})",
            client.name,
            safe_email_log(&client.email),
            client_id
        );

        self.get_client_by_id(client_id).await
    }

    /// Validate and replace an existing client
    pub async fn update_client(
        &self,
        client_id: i64,
        fields: &RawFields,
    ) -> Result<Client, ApiError> {
        // Check if client exists
        self.get_client_by_id(client_id).await?;

        let client = Self::validate(fields)?;
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            UPDATE clients
            SET name = ?, phone = ?, city = ?, email = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&client.name)
        .bind(client.phone)
        .bind(client.city)
        .bind(&client.email)
        .bind(&now)
        .bind(client_id)
        .execute(&self.db)
        .await?;

        info!("Updated client: {}", client_id);

        self.get_client_by_id(client_id).await
    }

    /// Delete a client
    pub async fn delete_client(&self, client_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(client_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Client not found".to_string()));
        }

        info!("Deleted client: {}", client_id);

        Ok(())
    }

    fn validate(fields: &RawFields) -> Result<NewClient, ApiError> {
        ClientValidator.validate(fields).map_err(|result| {
            debug!(fields = ?result.fields(), "Rejected client submission");
            ApiError::from(result)
        })
    }
}
