//! # Clients Module
//!
//! Clinic clients: owners contacted by phone and email, restricted to the
//! cities the clinic serves.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::clients_routes;
