// Common module - shared types and utilities across all modules

pub mod choices;
pub mod config;
pub mod error;
pub mod extract;
pub mod helpers;
pub mod migrations;
pub mod state;
pub mod validation;

#[cfg(test)]
pub mod test_support;


// Re-export commonly used types for convenience
pub use choices::{Breed, City, Specialty};
pub use config::AppConfig;
pub use error::ApiError;
pub use extract::JsonBody;
pub use helpers::safe_email_log;
pub use state::AppState;
pub use validation::{RawFields, ValidationResult, Validator};
