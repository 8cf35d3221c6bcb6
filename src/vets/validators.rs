use super::models::NewVet;
use crate::common::validation::{self, MSG_ADDRESS_REQUIRED, MSG_NAME_REQUIRED};
use crate::common::{RawFields, ValidationResult, Validator};

pub const MSG_SPECIALTY_REQUIRED: &str = "Por favor seleccione una especialidad";

const SPECIALTY_FIELD: &str = "specialty";
const SPECIALTY_FIELD_ALIAS: &str = "especialidad";

pub struct VetValidator;

impl Validator<RawFields> for VetValidator {
    type Output = NewVet;

    fn validate(&self, data: &RawFields) -> Result<NewVet, ValidationResult> {
        let mut result = ValidationResult::new();

        let name = result.check(
            "name",
            validation::required_name(data.get("name").as_deref(), MSG_NAME_REQUIRED),
        );
        // Vet phones are free text, unlike client phones
        let phone = result.check("phone", validation::phone_text(data.get("phone").as_deref()));
        let address = result.check(
            "address",
            validation::required_text(data.get("address").as_deref(), MSG_ADDRESS_REQUIRED),
        );
        let email = result.check("email", validation::email_basic(data.get("email").as_deref()));
        // Older form clients post the specialty as "especialidad"
        let specialty = data
            .get(SPECIALTY_FIELD)
            .or_else(|| data.get(SPECIALTY_FIELD_ALIAS));
        let specialty = result.check(
            SPECIALTY_FIELD,
            validation::enum_member(specialty.as_deref(), MSG_SPECIALTY_REQUIRED),
        );

        match (name, phone, address, email, specialty) {
            (Some(name), Some(phone), Some(address), Some(email), Some(specialty))
                if result.is_valid =>
            {
                Ok(NewVet {
                    name,
                    phone,
                    address,
                    email,
                    specialty,
                })
            }
            _ => Err(result),
        }
    }
}
