use crate::common::City;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub phone: i64,
    pub city: City,
    pub email: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Validated client data, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewClient {
    pub name: String,
    pub phone: i64,
    pub city: City,
    pub email: String,
}
