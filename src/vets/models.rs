use crate::common::Specialty;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vet {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub specialty: Specialty,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewVet {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub specialty: Specialty,
}
