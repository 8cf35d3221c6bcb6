use super::models::NewClient;
use crate::common::validation;
use crate::common::{RawFields, ValidationResult, Validator};

pub const MSG_NAME_EMPTY: &str = "El nombre no puede estar vacío o contener solo espacios";
pub const MSG_CITY_REQUIRED: &str = "Por favor ingrese una ciudad";
pub const EMAIL_DOMAIN: &str = "@vetsoft.com";

pub struct ClientValidator;

impl Validator<RawFields> for ClientValidator {
    type Output = NewClient;

    fn validate(&self, data: &RawFields) -> Result<NewClient, ValidationResult> {
        let mut result = ValidationResult::new();

        let name = result.check(
            "name",
            validation::required_name(data.get("name").as_deref(), MSG_NAME_EMPTY),
        );
        let phone = result.check(
            "phone",
            validation::phone_with_prefix(data.get("phone").as_deref()),
        );
        let city = result.check(
            "city",
            validation::enum_member(data.get("city").as_deref(), MSG_CITY_REQUIRED),
        );
        let email = result.check(
            "email",
            validation::email_basic(data.get("email").as_deref())
                .and_then(|email| validation::email_domain(&email, EMAIL_DOMAIN)),
        );

        match (name, phone, city, email) {
            (Some(name), Some(phone), Some(city), Some(email)) if result.is_valid => {
                Ok(NewClient {
                    name,
                    phone,
                    city,
                    email,
                })
            }
            _ => Err(result),
        }
    }
}
