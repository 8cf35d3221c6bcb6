use super::models::{Medicine, NewMedicine};
use super::validators::MedicineValidator;
use crate::common::{ApiError, RawFields, Validator};
use sqlx::SqlitePool;
use tracing::{debug, info};

pub struct MedicinesService {
    db: SqlitePool,
}

impl MedicinesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all medicines
    pub async fn get_all_medicines(&self) -> Result<Vec<Medicine>, ApiError> {
        let medicines = sqlx::query_as::<_, Medicine>(
            r#"
            SELECT id, name, description, dose, created_at, updated_at
            FROM medicines
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(medicines)
    }

    /// Get medicine by ID
    pub async fn get_medicine_by_id(&self, medicine_id: i64) -> Result<Medicine, ApiError> {
        sqlx::query_as::<_, Medicine>(
            r#"
            SELECT id, name, description, dose, created_at, updated_at
            FROM medicines
            WHERE id = ?
            "#,
        )
        .bind(medicine_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Medicine not found".to_string()))
    }

    /// Validate and create a new medicine
    pub async fn create_medicine(&self, fields: &RawFields) -> Result<Medicine, ApiError> {
        let medicine = Self::validate(fields)?;
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO medicines (name, description, dose, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&medicine.name)
        .bind(&medicine.description)
        .bind(medicine.dose)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await?;

        let medicine_id = result.last_insert_rowid();
        info!(
            "Created medicine: {} dose={} ({})",
            medicine.name, medicine.dose, medicine_id
        );

        self.get_medicine_by_id(medicine_id).await
    }

    /// Validate and replace an existing medicine
    pub async fn update_medicine(
        &self,
        medicine_id: i64,
        fields: &RawFields,
    ) -> Result<Medicine, ApiError> {
        self.get_medicine_by_id(medicine_id).await?;

        let medicine = Self::validate(fields)?;
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            UPDATE medicines
            SET name = ?, description = ?, dose = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&medicine.name)
        .bind(&medicine.description)
        .bind(medicine.dose)
        .bind(&now)
        .bind(medicine_id)
        .execute(&self.db)
        .await?;

        info!("Updated medicine: {}", medicine_id);

        self.get_medicine_by_id(medicine_id).await
    }

    /// Delete a medicine
    pub async fn delete_medicine(&self, medicine_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM medicines WHERE id = ?")
            .bind(medicine_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Medicine not found".to_string()));
        }

        info!("Deleted medicine: {}", medicine_id);

        Ok(())
    }

    fn validate(fields: &RawFields) -> Result<NewMedicine, ApiError> {
        MedicineValidator.validate(fields).map_err(|result| {
            debug!(fields = ?result.fields(), "Rejected medicine submission");
            ApiError::from(result)
        })
    }
}
