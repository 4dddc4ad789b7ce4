use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use serde_json::Value;
use uuid::Uuid;

use crate::app::create_app;
use crate::core::config::{AppConfig, RegistrationConfig, SwaggerConfig};
use crate::core::error::{AppError, Result};
use crate::features::registration::dtos::RegistrationPayload;
use crate::features::registration::RegistrationService;
use crate::modules::document_store::DocumentStore;
use crate::modules::password::BcryptHasher;

/// Lowest cost bcrypt accepts, keeps tests fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// A registration that passes every form rule
pub fn valid_payload() -> RegistrationPayload {
    RegistrationPayload {
        full_name: "Ana Silva".to_string(),
        birth_date: "01/01/2000".to_string(),
        tax_id: Some("123.456.789-01".to_string()),
        email: "ana@test.com".to_string(),
        phone: "(11) 98765-4321".to_string(),
        password: "Segredo#123".to_string(),
        password_confirmation: "Segredo#123".to_string(),
        postal_code: "01001-000".to_string(),
        state: "SP".to_string(),
        city: "São Paulo".to_string(),
        district: "Sé".to_string(),
        street: "Praça da Sé".to_string(),
        number: "100".to_string(),
    }
}

/// Store whose every operation fails like an unreachable database
pub struct FailingDocumentStore;

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn insert_one(&self, _document: Value) -> Result<Uuid> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_all(&self) -> Result<Vec<Value>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub fn test_app_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_allowed_origins: vec!["*".to_string()],
        max_request_body_size: 64 * 1024,
    }
}

pub fn test_swagger_config() -> SwaggerConfig {
    SwaggerConfig {
        username: None,
        password: None,
        title: "Test API".to_string(),
        version: "0.0.0".to_string(),
        description: "Test".to_string(),
    }
}

/// Full application router over `store`
pub fn test_app(store: Arc<dyn DocumentStore>, registration: RegistrationConfig) -> Router {
    test_app_with_swagger(store, registration, test_swagger_config())
}

pub fn test_app_with_swagger(
    store: Arc<dyn DocumentStore>,
    registration: RegistrationConfig,
    swagger: SwaggerConfig,
) -> Router {
    let service = Arc::new(RegistrationService::new(
        store,
        BcryptHasher::new(TEST_BCRYPT_COST),
        registration.enforce_field_rules,
    ));
    create_app(
        service,
        &test_app_config(),
        &registration,
        &swagger,
    )
}

/// Serve `router` on an ephemeral local port, returning its base URL
pub async fn spawn_stub_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });
    // give the accept loop a moment to start
    tokio::time::sleep(Duration::from_millis(10)).await;
    format!("http://{}", addr)
}
