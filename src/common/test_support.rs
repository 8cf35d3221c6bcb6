// Shared fixtures for database-backed tests

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use super::migrations::run_migrations;

/// In-memory database with the full schema. A single connection keeps every
/// query on the same in-memory database.
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    run_migrations(&pool, false).await.unwrap();

    pool
}
