use super::models::{NewVet, Vet};
use super::validators::VetValidator;
use crate::common::{safe_email_log, ApiError, RawFields, Validator};
use sqlx::SqlitePool;
use tracing::{debug, info};

pub struct VetsService {
    db: SqlitePool,
}

impl VetsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all vets
    pub async fn get_all_vets(&self) -> Result<Vec<Vet>, ApiError> {
        let vets = sqlx::query_as::<_, Vet>(
            r#"
            SELECT id, name, phone, address, email, specialty, created_at, updated_at
            FROM vets
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(vets)
    }

    /// Get vet by ID
    pub async fn get_vet_by_id(&self, vet_id: i64) -> Result<Vet, ApiError> {
        sqlx::query_as::<_, Vet>(
            r#"
            SELECT id, name, phone, address, email, specialty, created_at, updated_at
            FROM vets
            WHERE id = ?
            "#,
        )
        .bind(vet_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Vet not found".to_string()))
    }

    /// Validate and create a new vet
    pub async fn create_vet(&self, fields: &RawFields) -> Result<Vet, ApiError> {
        let vet = Self::validate(fields)?;
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO vets (name, phone, address, email, specialty, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&vet.name)
        .bind(&vet.phone)
        .bind(&vet.address)
        .bind(&vet.email)
        .bind(vet.specialty)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await?;

        let vet_id = result.last_insert_rowid();
        info!(
            "Created vet: {} <{}> ({})",
            vet.name,
            safe_email_log(&vet.email),
            vet_id
        );

        self.get_vet_by_id(vet_id).await
    }

    /// Validate and replace an existing vet
    pub async fn update_vet(&self, vet_id: i64, fields: &RawFields) -> Result<Vet, ApiError> {
        self.get_vet_by_id(vet_id).await?;

        let vet = Self::validate(fields)?;
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            UPDATE vets
            SET name = ?, phone = ?, address = ?, email = ?, specialty = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&vet.name)
        .bind(&vet.phone)
        .bind(&vet.address)
        .bind(&vet.email)
        .bind(vet.specialty)
        .bind(&now)
        .bind(vet_id)
        .execute(&self.db)
        .await?;

        info!("Updated vet: {}", vet_id);

        self.get_vet_by_id(vet_id).await
    }

    /// Delete a vet
    pub async fn delete_vet(&self, vet_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM vets WHERE id = ?")
            .bind(vet_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Vet not found".to_string()));
        }

        info!("Deleted vet: {}", vet_id);

        Ok(())
    }

    fn validate(fields: &RawFields) -> Result<NewVet, ApiError> {
        VetValidator.validate(fields).map_err(|result| {
            debug!(fields = ?result.fields(), "Rejected vet submission");
            ApiError::from(result)
        })
    }
}
