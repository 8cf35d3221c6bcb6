use super::models::NewProvider;
use crate::common::validation::{self, MSG_ADDRESS_REQUIRED, MSG_NAME_REQUIRED};
use crate::common::{RawFields, ValidationResult, Validator};

pub struct ProviderValidator;

impl Validator<RawFields> for ProviderValidator {
    type Output = NewProvider;

    fn validate(&self, data: &RawFields) -> Result<NewProvider, ValidationResult> {
        let mut result = ValidationResult::new();

        let name = result.check(
            "name",
            validation::required_name(data.get("name").as_deref(), MSG_NAME_REQUIRED),
        );
        let email = result.check("email", validation::email_basic(data.get("email").as_deref()));
        let address = result.check(
            "address",
            validation::required_text(data.get("address").as_deref(), MSG_ADDRESS_REQUIRED),
        );

        match (name, email, address) {
            (Some(name), Some(email), Some(address)) if result.is_valid => Ok(NewProvider {
                name,
                email,
                address,
            }),
            _ => Err(result),
        }
    }
}
