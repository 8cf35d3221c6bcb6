use super::models::{NewProvider, Provider};
use super::validators::ProviderValidator;
use crate::common::{safe_email_log, ApiError, RawFields, Validator};
use sqlx::SqlitePool;
use tracing::{debug, info};

pub struct ProvidersService {
    db: SqlitePool,
}

impl ProvidersService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all providers
    pub async fn get_all_providers(&self) -> Result<Vec<Provider>, ApiError> {
        let providers = sqlx::query_as::<_, Provider>(
            r#"
            SELECT id, name, email, address, created_at, updated_at
            FROM providers
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(providers)
    }

    /// Get provider by ID
    pub async fn get_provider_by_id(&self, provider_id: i64) -> Result<Provider, ApiError> {
        sqlx::query_as::<_, Provider>(
            r#"
            SELECT id, name, email, address, created_at, updated_at
            FROM providers
            WHERE id = ?
            "#,
        )
        .bind(provider_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Provider not found".to_string()))
    }

    /// Validate and create a new provider
    pub async fn create_provider(&self, fields: &RawFields) -> Result<Provider, ApiError> {
        let provider = Self::validate(fields)?;
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO providers (name, email, address, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&provider.name)
        .bind(&provider.email)
        .bind(&provider.address)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await?;

        let provider_id = result.last_insert_rowid();
        info!(
            "Created provider: {} <{}> ({})",
            provider.name,
            safe_email_log(&provider.email),
            provider_id
        );

        self.get_provider_by_id(provider_id).await
    }

    /// Validate and replace an existing provider
    pub async fn update_provider(
        &self,
        provider_id: i64,
        fields: &RawFields,
    ) -> Result<Provider, ApiError> {
        self.get_provider_by_id(provider_id).await?;

        let provider = Self::validate(fields)?;
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            UPDATE providers
            SET name = ?, email = ?, address = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&provider.name)
        .bind(&provider.email)
        .bind(&provider.address)
        .bind(&now)
        .bind(provider_id)
        .execute(&self.db)
        .await?;

        info!("Updated provider: {}", provider_id);

        self.get_provider_by_id(provider_id).await
    }

    /// Delete a provider
    pub async fn delete_provider(&self, provider_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM providers WHERE id = ?")
            .bind(provider_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Provider not found".to_string()));
        }

        info!("Deleted provider: {}", provider_id);

        Ok(())
    }

    fn validate(fields: &RawFields) -> Result<NewProvider, ApiError> {
        ProviderValidator.validate(fields).map_err(|result| {
            debug!(fields = ?result.fields(), "Rejected provider submission");
            ApiError::from(result)
        })
    }
}
