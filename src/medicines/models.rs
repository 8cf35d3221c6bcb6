use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Medicine {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub dose: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMedicine {
    pub name: String,
    pub description: String,
    pub dose: i64,
}
