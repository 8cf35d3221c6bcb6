use crate::common::choices::{Breed, Choice, ChoiceOption, City, Specialty};
use axum::{response::IntoResponse, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Section {
    pub name: &'static str,
    pub path: &'static str,
}

const SECTIONS: &[Section] = &[
    Section { name: "Home", path: "/api" },
    Section { name: "Clientes", path: "/api/clients" },
    Section { name: "Mascotas", path: "/api/pets" },
    Section { name: "Veterinarios", path: "/api/vets" },
    Section { name: "Medicamentos", path: "/api/medicines" },
    Section { name: "Productos", path: "/api/products" },
    Section { name: "Proveedores", path: "/api/providers" },
];

#[derive(Debug, Serialize)]
pub struct ChoicesResponse {
    pub placeholder: ChoiceOption,
    pub cities: Vec<ChoiceOption>,
    pub breeds: Vec<ChoiceOption>,
    pub specialties: Vec<ChoiceOption>,
}

/// GET /api - Section index
pub async fn index() -> impl IntoResponse {
    Json(SECTIONS)
}

/// GET /api/choices - Options for every selection control
pub async fn get_choices() -> impl IntoResponse {
    Json(ChoicesResponse {
        placeholder: ChoiceOption::placeholder(),
        cities: City::options(),
        breeds: Breed::options(),
        specialties: Specialty::options(),
    })
}
