//! Tests for clients module
//!
//! These tests verify:
//! - Client validation (name, phone prefix, city, email domain)
//! - Client persistence through ClientsService
//! - The clients HTTP routes

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::test_support::setup_test_db;
    use crate::common::validation::{
        MSG_EMAIL_AT, MSG_EMAIL_REQUIRED, MSG_NAME_LETTERS_ONLY, MSG_PHONE_PREFIX,
        MSG_PHONE_REQUIRED,
    };
    use crate::common::{ApiError, City, RawFields, Validator};
    use validators::{ClientValidator, MSG_CITY_REQUIRED, MSG_NAME_EMPTY};

    fn valid_fields() -> RawFields {
        RawFields::from([
            ("name", "Juan Sebastian Veron"),
            ("phone", "54221555232"),
            ("city", "Berisso"),
            ("email", "brujita75@vetsoft.com"),
        ])
    }

    fn errors_for(fields: RawFields) -> crate::common::ValidationResult {
        ClientValidator.validate(&fields).unwrap_err()
    }

    #[test]
    fn test_valid_client_is_normalized() {
        let client = ClientValidator.validate(&valid_fields()).unwrap();

        assert_eq!(client.name, "Juan Sebastian Veron");
        assert_eq!(client.phone, 54221555232);
        assert_eq!(client.city, City::Berisso);
        assert_eq!(client.email, "brujita75@vetsoft.com");
    }

    #[test]
    fn test_values_are_trimmed() {
        let fields = valid_fields()
            .with("name", "  Nombre  ")
            .with("email", " email@vetsoft.com ");
        let client = ClientValidator.validate(&fields).unwrap();

        assert_eq!(client.name, "Nombre");
        assert_eq!(client.email, "email@vetsoft.com");
    }

    #[test]
    fn test_empty_submission_reports_every_field() {
        let result = errors_for(RawFields::new());

        assert_eq!(result.message("name"), Some(MSG_NAME_EMPTY));
        assert_eq!(result.message("phone"), Some(MSG_PHONE_REQUIRED));
        assert_eq!(result.message("city"), Some(MSG_CITY_REQUIRED));
        assert_eq!(result.message("email"), Some(MSG_EMAIL_REQUIRED));
        assert_eq!(result.errors.len(), 4);
    }

    #[test]
    fn test_blank_name_only_reports_empty() {
        let result = errors_for(valid_fields().with("name", " "));

        assert_eq!(result.fields(), vec!["name"]);
        assert_eq!(result.message("name"), Some(MSG_NAME_EMPTY));
    }

    #[test]
    fn test_name_with_symbols() {
        let result = errors_for(valid_fields().with("name", "1234$#%"));
        assert_eq!(result.fields(), vec!["name"]);
        assert_eq!(result.message("name"), Some(MSG_NAME_LETTERS_ONLY));
    }

    #[test]
    fn test_accented_name_is_accepted() {
        let fields = valid_fields().with("name", "Juan Sebastián Verón");
        assert!(ClientValidator.validate(&fields).is_ok());
    }

    #[test]
    fn test_phone_without_prefix() {
        let result = errors_for(valid_fields().with("phone", "221555232"));
        assert_eq!(result.fields(), vec!["phone"]);
        assert_eq!(result.message("phone"), Some(MSG_PHONE_PREFIX));
    }

    #[test]
    fn test_phone_not_numeric() {
        let result = errors_for(valid_fields().with("phone", "telefono"));
        assert_eq!(result.message("phone"), Some(MSG_PHONE_REQUIRED));
    }

    #[test]
    fn test_phone_as_json_number() {
        let fields = valid_fields().with("phone", 54312321_i64);
        let client = ClientValidator.validate(&fields).unwrap();
        assert_eq!(client.phone, 54312321);
    }

    #[test]
    fn test_email_without_at() {
        let result = errors_for(valid_fields().with("email", "brujita75"));
        assert_eq!(result.fields(), vec!["email"]);
        assert_eq!(result.message("email"), Some(MSG_EMAIL_AT));
    }

    #[test]
    fn test_email_outside_domain() {
        for email in ["juan@gmail.com", "juan@example"] {
            let result = errors_for(valid_fields().with("email", email));
            assert_eq!(
                result.message("email"),
                Some("Por favor el email debe ser del dominio @vetsoft.com")
            );
        }
    }

    #[test]
    fn test_unknown_city() {
        for city in ["Ciudad", "", "berisso"] {
            let result = errors_for(valid_fields().with("city", city));
            assert_eq!(result.fields(), vec!["city"]);
            assert_eq!(result.message("city"), Some(MSG_CITY_REQUIRED));
        }
    }

    #[test]
    fn test_every_city_is_accepted() {
        for (raw, city) in [
            ("Berisso", City::Berisso),
            ("Ensenada", City::Ensenada),
            ("La Plata", City::LaPlata),
        ] {
            let client = ClientValidator
                .validate(&valid_fields().with("city", raw))
                .unwrap();
            assert_eq!(client.city, city);
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let fields = valid_fields().with("phone", "221555232").with("name", "J0hn");
        let first = serde_json::to_string(&errors_for(fields.clone())).unwrap();
        let second = serde_json::to_string(&errors_for(fields)).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_create_and_get_client() {
        let pool = setup_test_db().await;
        let service = services::ClientsService::new(pool);

        let created = service.create_client(&valid_fields()).await.unwrap();
        assert_eq!(created.phone, 54221555232);
        assert_eq!(created.city, City::Berisso);

        let fetched = service.get_client_by_id(created.id).await.unwrap();
        assert_eq!(fetched.name, "Juan Sebastian Veron");
        assert_eq!(fetched.email, "brujita75@vetsoft.com");

        let all = service.get_all_clients().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_client_is_not_persisted() {
        let pool = setup_test_db().await;
        let service = services::ClientsService::new(pool);

        let err = service
            .create_client(&valid_fields().with("city", "Ciudad"))
            .await
            .unwrap_err();
        match err {
            ApiError::ValidationError(result) => {
                assert_eq!(result.message("city"), Some(MSG_CITY_REQUIRED))
            }
            other => panic!("unexpected error: {}", other),
        }

        assert!(service.get_all_clients().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_client() {
        let pool = setup_test_db().await;
        let service = services::ClientsService::new(pool);
        let created = service.create_client(&valid_fields()).await.unwrap();

        let update = RawFields::from([
            ("name", "Guido Carrillo"),
            ("phone", "54221232555"),
            ("city", "Ensenada"),
            ("email", "goleador@vetsoft.com"),
        ]);
        let updated = service.update_client(created.id, &update).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Guido Carrillo");
        assert_eq!(updated.city, City::Ensenada);
        assert_eq!(updated.phone, 54221232555);
    }

    #[tokio::test]
    async fn test_invalid_update_keeps_stored_client() {
        let pool = setup_test_db().await;
        let service = services::ClientsService::new(pool);
        let created = service.create_client(&valid_fields()).await.unwrap();

        let result = service
            .update_client(created.id, &valid_fields().with("phone", "221555232"))
            .await;
        assert!(matches!(result, Err(ApiError::ValidationError(_))));

        let stored = service.get_client_by_id(created.id).await.unwrap();
        assert_eq!(stored.phone, 54221555232);
    }

    #[tokio::test]
    async fn test_missing_client_is_not_found() {
        let pool = setup_test_db().await;
        let service = services::ClientsService::new(pool);

        assert!(matches!(
            service.get_client_by_id(100).await,
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(
            service.update_client(100, &valid_fields()).await,
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_client(100).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_client() {
        let pool = setup_test_db().await;
        let service = services::ClientsService::new(pool);
        let created = service.create_client(&valid_fields()).await.unwrap();

        service.delete_client(created.id).await.unwrap();

        assert!(service.get_all_clients().await.unwrap().is_empty());
    }
}
