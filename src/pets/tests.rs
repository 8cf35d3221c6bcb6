//! Tests for pets module

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::test_support::setup_test_db;
    use crate::common::validation::{MSG_NAME_LETTERS_ONLY, MSG_NAME_REQUIRED};
    use crate::common::choices::Choice;
    use crate::common::{ApiError, Breed, RawFields, Validator};
    use chrono::NaiveDate;
    use validators::*;

    fn valid_fields() -> RawFields {
        RawFields::from([
            ("name", "Nombre"),
            ("breed", "Dog"),
            ("birthday", "2024-06-01"),
        ])
    }

    #[test]
    fn test_valid_pet_is_normalized() {
        let pet = PetValidator.validate(&valid_fields()).unwrap();

        assert_eq!(pet.name, "Nombre");
        assert_eq!(pet.breed, Breed::Dog);
        assert_eq!(pet.birthday, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_unknown_breed() {
        let result = PetValidator
            .validate(&valid_fields().with("breed", "Mascota"))
            .unwrap_err();

        assert_eq!(result.fields(), vec!["breed"]);
        assert_eq!(result.message("breed"), Some(MSG_BREED_INVALID));
    }

    #[test]
    fn test_placeholder_breed_is_rejected() {
        let result = PetValidator
            .validate(&valid_fields().with("breed", ""))
            .unwrap_err();
        assert_eq!(result.message("breed"), Some(MSG_BREED_INVALID));
    }

    #[test]
    fn test_every_breed_is_accepted() {
        for breed in Breed::ALL {
            let fields = valid_fields().with("breed", breed.value());
            assert_eq!(PetValidator.validate(&fields).unwrap().breed, *breed);
        }
    }

    #[test]
    fn test_birthday_errors() {
        let missing = PetValidator
            .validate(&valid_fields().with("birthday", ""))
            .unwrap_err();
        assert_eq!(missing.message("birthday"), Some(MSG_BIRTHDAY_REQUIRED));

        let invalid = PetValidator
            .validate(&valid_fields().with("birthday", "June 1, 2024"))
            .unwrap_err();
        assert_eq!(invalid.message("birthday"), Some(MSG_BIRTHDAY_INVALID));
    }

    #[test]
    fn test_name_rules() {
        let blank = PetValidator
            .validate(&valid_fields().with("name", "  "))
            .unwrap_err();
        assert_eq!(blank.message("name"), Some(MSG_NAME_REQUIRED));

        let digits = PetValidator
            .validate(&valid_fields().with("name", "Firulais 2"))
            .unwrap_err();
        assert_eq!(digits.message("name"), Some(MSG_NAME_LETTERS_ONLY));

        assert!(PetValidator
            .validate(&valid_fields().with("name", "Dog Pet"))
            .is_ok());
    }

    #[test]
    fn test_empty_submission_reports_every_field() {
        let result = PetValidator.validate(&RawFields::new()).unwrap_err();
        assert_eq!(result.fields(), vec!["birthday", "breed", "name"]);
    }

    #[tokio::test]
    async fn test_create_pets_for_each_breed() {
        let pool = setup_test_db().await;
        let service = services::PetsService::new(pool);

        for (name, breed) in [("Dog Pet", "Dog"), ("Cat Pet", "Cat"), ("Bird Pet", "Bird")] {
            let fields = RawFields::from([
                ("name", name),
                ("breed", breed),
                ("birthday", "2022-01-01"),
            ]);
            service.create_pet(&fields).await.unwrap();
        }

        let pets = service.get_all_pets().await.unwrap();
        assert_eq!(pets.len(), 3);
        assert_eq!(pets[0].breed, Breed::Dog);
        assert_eq!(pets[1].breed, Breed::Cat);
        assert_eq!(pets[2].breed, Breed::Bird);
        assert_eq!(pets[2].name, "Bird Pet");
        assert_eq!(
            pets[0].birthday,
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
        );
    }

    #[tokio::test]
    async fn test_rejected_pet_is_not_persisted() {
        let pool = setup_test_db().await;
        let service = services::PetsService::new(pool);

        let result = service
            .create_pet(&valid_fields().with("breed", "Mascota"))
            .await;
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
        assert!(service.get_all_pets().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_pet() {
        let pool = setup_test_db().await;
        let service = services::PetsService::new(pool);
        let pet = service.create_pet(&valid_fields()).await.unwrap();

        let updated = service
            .update_pet(pet.id, &valid_fields().with("breed", "Cat"))
            .await
            .unwrap();
        assert_eq!(updated.breed, Breed::Cat);

        service.delete_pet(pet.id).await.unwrap();
        assert!(matches!(
            service.get_pet_by_id(pet.id).await,
            Err(ApiError::NotFound(_))
        ));
    }
}
