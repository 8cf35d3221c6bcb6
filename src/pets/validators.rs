use super::models::NewPet;
use crate::common::validation::{self, MSG_NAME_REQUIRED};
use crate::common::{RawFields, ValidationResult, Validator};

pub const MSG_BREED_INVALID: &str = "No esta esa opcion";
pub const MSG_BIRTHDAY_REQUIRED: &str = "Por favor ingrese una fecha de nacimiento";
pub const MSG_BIRTHDAY_INVALID: &str = "Por favor ingrese una fecha válida";

pub struct PetValidator;

impl Validator<RawFields> for PetValidator {
    type Output = NewPet;

    fn validate(&self, data: &RawFields) -> Result<NewPet, ValidationResult> {
        let mut result = ValidationResult::new();

        let name = result.check(
            "name",
            validation::required_name(data.get("name").as_deref(), MSG_NAME_REQUIRED),
        );
        let breed = result.check(
            "breed",
            validation::enum_member(data.get("breed").as_deref(), MSG_BREED_INVALID),
        );
        let birthday = result.check(
            "birthday",
            validation::date(
                data.get("birthday").as_deref(),
                MSG_BIRTHDAY_REQUIRED,
                MSG_BIRTHDAY_INVALID,
            ),
        );

        match (name, breed, birthday) {
            (Some(name), Some(breed), Some(birthday)) if result.is_valid => Ok(NewPet {
                name,
                breed,
                birthday,
            }),
            _ => Err(result),
        }
    }
}
