use crate::common::Breed;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub breed: Breed,
    pub birthday: NaiveDate,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPet {
    pub name: String,
    pub breed: Breed,
    pub birthday: NaiveDate,
}
