//! Registration Service - hash and store form submissions

use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::registration::dtos::RegistrationPayload;
use crate::features::registration::models::RegistrationDocument;
use crate::modules::document_store::DocumentStore;
use crate::modules::password::BcryptHasher;

pub struct RegistrationService {
    store: Arc<dyn DocumentStore>,
    hasher: BcryptHasher,
    enforce_field_rules: bool,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn DocumentStore>, hasher: BcryptHasher, enforce_field_rules: bool) -> Self {
        Self {
            store,
            hasher,
            enforce_field_rules,
        }
    }

    /// Hash the password and insert the registration as a new document.
    ///
    /// No uniqueness check: submitting the same data twice stores two documents.
    pub async fn register(&self, mut payload: RegistrationPayload) -> Result<Uuid> {
        if self.enforce_field_rules {
            payload.validate_fields().map_err(AppError::Validation)?;
        }

        let password = std::mem::take(&mut payload.password);
        let password_hash = self.hasher.hash(password).await?;
        let document = RegistrationDocument::from_payload(payload, password_hash);

        let id = self.store.insert_one(serde_json::to_value(&document)?).await?;

        tracing::info!("Registration stored: id={}", id);

        Ok(id)
    }

    /// Every stored registration, unfiltered
    pub async fn list_all(&self) -> Result<Vec<Value>> {
        let documents = self.store.find_all().await?;
        tracing::debug!("Listed {} registrations", documents.len());
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::document_store::MemoryDocumentStore;
    use crate::shared::test_helpers::{valid_payload, FailingDocumentStore, TEST_BCRYPT_COST};

    fn service_with(store: Arc<dyn DocumentStore>, enforce: bool) -> RegistrationService {
        RegistrationService::new(store, BcryptHasher::new(TEST_BCRYPT_COST), enforce)
    }

    #[tokio::test]
    async fn test_register_stores_hashed_password_without_confirmation() {
        let store = Arc::new(MemoryDocumentStore::new());
        let service = service_with(store.clone(), false);

        service.register(valid_payload()).await.unwrap();

        let docs = store.snapshot().await;
        assert_eq!(docs.len(), 1);
        let senha = docs[0]["senha"].as_str().unwrap();
        assert_ne!(senha, "Segredo#123");
        assert!(bcrypt::verify("Segredo#123", senha).unwrap());
        assert!(docs[0].get("confirmarSenha").is_none());
    }

    #[tokio::test]
    async fn test_duplicate_registrations_are_both_stored() {
        let store = Arc::new(MemoryDocumentStore::new());
        let service = service_with(store.clone(), false);

        let first = service.register(valid_payload()).await.unwrap();
        let second = service.register(valid_payload()).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_field_rules_are_not_enforced_by_default() {
        let store = Arc::new(MemoryDocumentStore::new());
        let service = service_with(store.clone(), false);

        let payload = RegistrationPayload {
            email: "not-an-email".to_string(),
            ..valid_payload()
        };
        assert!(service.register(payload).await.is_ok());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_field_rules_enforced_when_enabled() {
        let store = Arc::new(MemoryDocumentStore::new());
        let service = service_with(store.clone(), true);

        let payload = RegistrationPayload {
            password_confirmation: "outra".to_string(),
            ..valid_payload()
        };
        let err = service.register(payload).await.unwrap_err();
        match err {
            AppError::Validation(fields) => assert!(fields.contains_field("confirmarSenha")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let service = service_with(Arc::new(FailingDocumentStore), false);
        let err = service.register(valid_payload()).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert!(service.list_all().await.is_err());
    }

    #[tokio::test]
    async fn test_list_all_returns_documents_with_ids() {
        let store = Arc::new(MemoryDocumentStore::new());
        let service = service_with(store, false);
        assert!(service.list_all().await.unwrap().is_empty());

        let id = service.register(valid_payload()).await.unwrap();
        let docs = service.list_all().await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["_id"], id.to_string());
        assert_eq!(docs[0]["email"], "ana@test.com");
    }
}
