//! # Providers Module
//!
//! Suppliers of medicines and products.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::providers_routes;
