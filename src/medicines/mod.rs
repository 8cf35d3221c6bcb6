//! # Medicines Module
//!
//! Medicines stocked by the clinic with their standard dose.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::medicines_routes;
