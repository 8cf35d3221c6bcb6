use super::models::{NewPet, Pet};
use super::validators::PetValidator;
use crate::common::{ApiError, RawFields, Validator};
use sqlx::SqlitePool;
use tracing::{debug, info};

pub struct PetsService {
    db: SqlitePool,
}

impl PetsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all pets
    pub async fn get_all_pets(&self) -> Result<Vec<Pet>, ApiError> {
        let pets = sqlx::query_as::<_, Pet>(
            r#"
            SELECT id, name, breed, birthday, created_at, updated_at
            FROM pets
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(pets)
    }

    /// Get pet by ID
    pub async fn get_pet_by_id(&self, pet_id: i64) -> Result<Pet, ApiError> {
        sqlx::query_as::<_, Pet>(
            r#"
            SELECT id, name, breed, birthday, created_at, updated_at
            FROM pets
            WHERE id = ?
            "#,
        )
        .bind(pet_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Pet not found".to_string()))
    }

    /// Validate and create a new pet
    pub async fn create_pet(&self, fields: &RawFields) -> Result<Pet, ApiError> {
        let pet = Self::validate(fields)?;
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO pets (name, breed, birthday, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&pet.name)
        .bind(pet.breed)
        .bind(pet.birthday)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await?;

        let pet_id = result.last_insert_rowid();
        info!("Created pet: {} ({})", pet.name, pet_id);

        self.get_pet_by_id(pet_id).await
    }

    /// Validate and replace an existing pet
    pub async fn update_pet(&self, pet_id: i64, fields: &RawFields) -> Result<Pet, ApiError> {
        self.get_pet_by_id(pet_id).await?;

        let pet = Self::validate(fields)?;
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            UPDATE pets
            SET name = ?, breed = ?, birthday = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&pet.name)
        .bind(pet.breed)
        .bind(pet.birthday)
        .bind(&now)
        .bind(pet_id)
        .execute(&self.db)
        .await?;

        info!("Updated pet: {}", pet_id);

        self.get_pet_by_id(pet_id).await
    }

    /// Delete a pet
    pub async fn delete_pet(&self, pet_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM pets WHERE id = ?")
            .bind(pet_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Pet not found".to_string()));
        }

        info!("Deleted pet: {}", pet_id);

        Ok(())
    }

    fn validate(fields: &RawFields) -> Result<NewPet, ApiError> {
        PetValidator.validate(fields).map_err(|result| {
            debug!(fields = ?result.fields(), "Rejected pet submission");
            ApiError::from(result)
        })
    }
}
