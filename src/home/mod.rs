//! # Home Module
//!
//! Entry points for the presentation layer: the section index used for
//! navigation and the closed value sets used to render selection controls.

pub mod handlers;
pub mod routes;


pub use routes::home_routes;
