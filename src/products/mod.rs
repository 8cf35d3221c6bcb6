//! # Products Module
//!
//! Products sold at the clinic counter.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::products_routes;
