//! # Pets Module
//!
//! Patients of the clinic, identified by name, breed and birthday.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::pets_routes;
