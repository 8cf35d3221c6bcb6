use super::models::NewMedicine;
use crate::common::validation::{self, BoundedIntMessages, MSG_NAME_REQUIRED};
use crate::common::{RawFields, ValidationResult, Validator};

pub const MSG_DESCRIPTION_REQUIRED: &str = "Por favor ingrese una descripción";
pub const MSG_DOSE_REQUIRED: &str = "Por favor ingrese una dosis";
pub const MSG_DOSE_NOT_POSITIVE: &str = "La dosis debe ser un número entero positivo";
pub const MSG_DOSE_OUT_OF_RANGE: &str = "La dosis debe estar entre 1 a 10";

pub const MIN_DOSE: i64 = 1;
pub const MAX_DOSE: i64 = 10;

const DOSE_MESSAGES: BoundedIntMessages<'static> = BoundedIntMessages {
    missing: MSG_DOSE_REQUIRED,
    not_positive: MSG_DOSE_NOT_POSITIVE,
    out_of_range: MSG_DOSE_OUT_OF_RANGE,
};

pub struct MedicineValidator;

impl Validator<RawFields> for MedicineValidator {
    type Output = NewMedicine;

    fn validate(&self, data: &RawFields) -> Result<NewMedicine, ValidationResult> {
        let mut result = ValidationResult::new();

        let name = result.check(
            "name",
            validation::required_name(data.get("name").as_deref(), MSG_NAME_REQUIRED),
        );
        let description = result.check(
            "description",
            validation::required_text(data.get("description").as_deref(), MSG_DESCRIPTION_REQUIRED),
        );
        let dose = result.check(
            "dose",
            validation::bounded_int(data.get("dose").as_deref(), MIN_DOSE, MAX_DOSE, &DOSE_MESSAGES),
        );

        match (name, description, dose) {
            (Some(name), Some(description), Some(dose)) if result.is_valid => Ok(NewMedicine {
                name,
                description,
                dose,
            }),
            _ => Err(result),
        }
    }
}
