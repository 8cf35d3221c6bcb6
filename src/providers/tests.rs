//! Tests for providers module

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::test_support::setup_test_db;
    use crate::common::validation::{MSG_ADDRESS_REQUIRED, MSG_EMAIL_AT, MSG_NAME_REQUIRED};
    use crate::common::{RawFields, Validator};
    use validators::ProviderValidator;

    fn valid_fields() -> RawFields {
        RawFields::from([
            ("name", "Pepe Gonzales"),
            ("email", "pepe@hotmail.com"),
            ("address", "7 entre 13 y 44"),
        ])
    }

    #[test]
    fn test_valid_provider_is_normalized() {
        let provider = ProviderValidator.validate(&valid_fields()).unwrap();

        assert_eq!(provider.name, "Pepe Gonzales");
        assert_eq!(provider.email, "pepe@hotmail.com");
        assert_eq!(provider.address, "7 entre 13 y 44");
    }

    #[test]
    fn test_missing_address() {
        let fields = RawFields::from([("name", "Pepe Gonzales"), ("email", "pepe@hotmail.com")]);
        let result = ProviderValidator.validate(&fields).unwrap_err();

        assert_eq!(result.fields(), vec!["address"]);
        assert_eq!(result.message("address"), Some(MSG_ADDRESS_REQUIRED));
    }

    #[test]
    fn test_blank_name_and_bad_email() {
        let result = ProviderValidator
            .validate(&valid_fields().with("name", " ").with("email", "pepe"))
            .unwrap_err();

        assert_eq!(result.fields(), vec!["email", "name"]);
        assert_eq!(result.message("name"), Some(MSG_NAME_REQUIRED));
        assert_eq!(result.message("email"), Some(MSG_EMAIL_AT));
    }

    #[tokio::test]
    async fn test_create_and_update_provider() {
        let pool = setup_test_db().await;
        let service = services::ProvidersService::new(pool);

        let provider = service.create_provider(&valid_fields()).await.unwrap();
        assert_eq!(provider.address, "7 entre 13 y 44");

        let updated = service
            .update_provider(provider.id, &valid_fields().with("address", "Calle falsa 123"))
            .await
            .unwrap();
        assert_eq!(updated.address, "Calle falsa 123");
        assert_eq!(service.get_all_providers().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rejected_provider_is_not_persisted() {
        let pool = setup_test_db().await;
        let service = services::ProvidersService::new(pool);

        assert!(service
            .create_provider(&valid_fields().with("address", ""))
            .await
            .is_err());
        assert!(service.get_all_providers().await.unwrap().is_empty());
    }
}
