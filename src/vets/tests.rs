//! Tests for vets module

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::test_support::setup_test_db;
    use crate::common::validation::{
        MSG_ADDRESS_REQUIRED, MSG_EMAIL_AT, MSG_EMAIL_REQUIRED, MSG_NAME_REQUIRED,
        MSG_PHONE_REQUIRED,
    };
    use crate::common::{RawFields, Specialty, Validator};
    use validators::{VetValidator, MSG_SPECIALTY_REQUIRED};

    fn valid_fields() -> RawFields {
        RawFields::from([
            ("name", "Joaquin Munos"),
            ("phone", "22165438"),
            ("address", "20 y 60"),
            ("email", "joaquin10@hotmail.com"),
            ("specialty", "general"),
        ])
    }

    #[test]
    fn test_valid_vet_is_normalized() {
        let vet = VetValidator.validate(&valid_fields()).unwrap();

        assert_eq!(vet.name, "Joaquin Munos");
        assert_eq!(vet.phone, "22165438");
        assert_eq!(vet.address, "20 y 60");
        assert_eq!(vet.email, "joaquin10@hotmail.com");
        assert_eq!(vet.specialty, Specialty::General);
    }

    #[test]
    fn test_phone_has_no_prefix_rule_and_email_no_domain_rule() {
        let vet = VetValidator
            .validate(&valid_fields().with("phone", "555123456"))
            .unwrap();
        assert_eq!(vet.phone, "555123456");
        assert_eq!(vet.email, "joaquin10@hotmail.com");
    }

    #[test]
    fn test_empty_specialty() {
        let result = VetValidator
            .validate(&valid_fields().with("specialty", ""))
            .unwrap_err();

        assert_eq!(result.fields(), vec!["specialty"]);
        assert_eq!(result.message("specialty"), Some(MSG_SPECIALTY_REQUIRED));
    }

    #[test]
    fn test_unknown_specialty() {
        let result = VetValidator
            .validate(&valid_fields().with("specialty", "cardiologia"))
            .unwrap_err();
        assert_eq!(result.message("specialty"), Some(MSG_SPECIALTY_REQUIRED));
    }

    #[test]
    fn test_especialidad_key_is_accepted() {
        let fields = RawFields::from([
            ("name", "Joaquin Munos"),
            ("phone", "22165438"),
            ("address", "20 y 60"),
            ("email", "joaquin10@hotmail.com"),
            ("especialidad", "dentista"),
        ]);
        let vet = VetValidator.validate(&fields).unwrap();
        assert_eq!(vet.specialty, Specialty::Dentista);

        let result = VetValidator
            .validate(&fields.with("especialidad", "cardiologia"))
            .unwrap_err();
        assert_eq!(result.fields(), vec!["specialty"]);
    }

    #[test]
    fn test_specialty_key_wins_over_especialidad() {
        let vet = VetValidator
            .validate(&valid_fields().with("especialidad", "dentista"))
            .unwrap();
        assert_eq!(vet.specialty, Specialty::General);
    }

    #[test]
    fn test_empty_submission_reports_every_field() {
        let result = VetValidator.validate(&RawFields::new()).unwrap_err();

        assert_eq!(result.message("name"), Some(MSG_NAME_REQUIRED));
        assert_eq!(result.message("phone"), Some(MSG_PHONE_REQUIRED));
        assert_eq!(result.message("address"), Some(MSG_ADDRESS_REQUIRED));
        assert_eq!(result.message("email"), Some(MSG_EMAIL_REQUIRED));
        assert_eq!(result.message("specialty"), Some(MSG_SPECIALTY_REQUIRED));
    }

    #[test]
    fn test_email_without_at() {
        let result = VetValidator
            .validate(&valid_fields().with("email", "joaquin10"))
            .unwrap_err();
        assert_eq!(result.fields(), vec!["email"]);
        assert_eq!(result.message("email"), Some(MSG_EMAIL_AT));
    }

    #[tokio::test]
    async fn test_create_list_and_delete_vets() {
        let pool = setup_test_db().await;
        let service = services::VetsService::new(pool);

        service.create_vet(&valid_fields()).await.unwrap();
        let dentist = service
            .create_vet(
                &valid_fields()
                    .with("name", "Emily Johnson")
                    .with("specialty", "dentista"),
            )
            .await
            .unwrap();
        assert_eq!(dentist.specialty, Specialty::Dentista);

        assert_eq!(service.get_all_vets().await.unwrap().len(), 2);

        service.delete_vet(dentist.id).await.unwrap();
        let remaining = service.get_all_vets().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].specialty, Specialty::General);
    }

    #[tokio::test]
    async fn test_update_vet() {
        let pool = setup_test_db().await;
        let service = services::VetsService::new(pool);
        let vet = service.create_vet(&valid_fields()).await.unwrap();

        let updated = service
            .update_vet(vet.id, &valid_fields().with("address", "7 y 50"))
            .await
            .unwrap();
        assert_eq!(updated.address, "7 y 50");
    }
}
