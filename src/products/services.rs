use super::models::{NewProduct, Product};
use super::validators::ProductValidator;
use crate::common::{ApiError, RawFields, Validator};
use sqlx::SqlitePool;
use tracing::{debug, info};

pub struct ProductsService {
    db: SqlitePool,
}

impl ProductsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all products
    pub async fn get_all_products(&self) -> Result<Vec<Product>, ApiError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, type, price, created_at, updated_at
            FROM products
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(products)
    }

    /// Get product by ID
    pub async fn get_product_by_id(&self, product_id: i64) -> Result<Product, ApiError> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, type, price, created_at, updated_at
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))
    }

    /// Validate and create a new product
    pub async fn create_product(&self, fields: &RawFields) -> Result<Product, ApiError> {
        let product = Self::validate(fields)?;
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, type, price, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&product.name)
        .bind(&product.product_type)
        .bind(product.price)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await?;

        let product_id = result.last_insert_rowid();
        info!("Created product: {} ({})", product.name, product_id);

        self.get_product_by_id(product_id).await
    }

    /// Validate and replace an existing product
    pub async fn update_product(
        &self,
        product_id: i64,
        fields: &RawFields,
    ) -> Result<Product, ApiError> {
        self.get_product_by_id(product_id).await?;

        let product = Self::validate(fields)?;
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            UPDATE products
            SET name = ?, type = ?, price = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.name)
        .bind(&product.product_type)
        .bind(product.price)
        .bind(&now)
        .bind(product_id)
        .execute(&self.db)
        .await?;

        info!("Updated product: {}", product_id);

        self.get_product_by_id(product_id).await
    }

    /// Delete a product
    pub async fn delete_product(&self, product_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(product_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Product not found".to_string()));
        }

        info!("Deleted product: {}", product_id);

        Ok(())
    }

    fn validate(fields: &RawFields) -> Result<NewProduct, ApiError> {
        ProductValidator.validate(fields).map_err(|result| {
            debug!(fields = ?result.fields(), "Rejected product submission");
            ApiError::from(result)
        })
    }
}
