use super::models::NewProduct;
use crate::common::validation::{self, MSG_NAME_REQUIRED};
use crate::common::{RawFields, ValidationResult, Validator};

pub const MSG_TYPE_REQUIRED: &str = "Por favor ingrese un tipo del producto";
pub const MSG_PRICE_REQUIRED: &str = "Por favor ingrese un precio";
pub const MSG_PRICE_NOT_POSITIVE: &str = "El precio debe ser mayor a cero";

pub struct ProductValidator;

impl Validator<RawFields> for ProductValidator {
    type Output = NewProduct;

    fn validate(&self, data: &RawFields) -> Result<NewProduct, ValidationResult> {
        let mut result = ValidationResult::new();

        let name = result.check(
            "name",
            validation::required_name(data.get("name").as_deref(), MSG_NAME_REQUIRED),
        );
        let product_type = result.check(
            "type",
            validation::required_text(data.get("type").as_deref(), MSG_TYPE_REQUIRED),
        );
        let price = result.check(
            "price",
            validation::positive_decimal(
                data.get("price").as_deref(),
                MSG_PRICE_REQUIRED,
                MSG_PRICE_NOT_POSITIVE,
            ),
        );

        match (name, product_type, price) {
            (Some(name), Some(product_type), Some(price)) if result.is_valid => Ok(NewProduct {
                name,
                product_type,
                price,
            }),
            _ => Err(result),
        }
    }
}
