//! Registration handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::core::error::OperationError;
use crate::core::extractor::AppJson;
use crate::features::registration::dtos::RegistrationPayload;
use crate::features::registration::services::RegistrationService;
use crate::shared::constants::{
    LIST_FAILURE_MESSAGE, STORE_FAILURE_MESSAGE, STORE_SUCCESS_MESSAGE,
};
use crate::shared::types::{ErrorResponse, MessageResponse};

/// Store a registration
///
/// Public endpoint used by the signup form. Any failure, a malformed body
/// included, answers 500 with the same fixed message.
#[utoipa::path(
    post,
    path = "/submit",
    request_body = RegistrationPayload,
    responses(
        (status = 200, description = "Registration stored", body = MessageResponse),
        (status = 400, description = "Field rules failed (only when server-side rules are enabled)", body = ErrorResponse),
        (status = 500, description = "Registration could not be stored", body = ErrorResponse)
    ),
    tag = "registration"
)]
pub async fn submit_registration(
    State(service): State<Arc<RegistrationService>>,
    AppJson(payload): AppJson<RegistrationPayload>,
) -> Result<Json<MessageResponse>, OperationError> {
    service
        .register(payload)
        .await
        .map_err(|e| e.with_public_message(STORE_FAILURE_MESSAGE))?;

    Ok(Json(MessageResponse::new(STORE_SUCCESS_MESSAGE)))
}

/// List every stored registration
///
/// Returns the documents unfiltered, password hashes included.
#[utoipa::path(
    get,
    path = "/users/all",
    responses(
        (status = 200, description = "Array of stored registration documents"),
        (status = 401, description = "Admin credentials configured and not provided"),
        (status = 500, description = "Registrations could not be read", body = ErrorResponse)
    ),
    tag = "registration",
    security(
        (),
        ("basic_auth" = [])
    )
)]
pub async fn list_registrations(
    State(service): State<Arc<RegistrationService>>,
) -> Result<Json<Vec<Value>>, OperationError> {
    let documents = service
        .list_all()
        .await
        .map_err(|e| e.with_public_message(LIST_FAILURE_MESSAGE))?;

    Ok(Json(documents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::RegistrationConfig;
    use crate::modules::document_store::{DocumentStore, MemoryDocumentStore, DOCUMENT_ID_KEY};
    use crate::shared::test_helpers::{test_app, valid_payload, FailingDocumentStore};
    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use base64::prelude::*;
    use serde_json::json;

    fn server_with(store: Arc<dyn DocumentStore>, config: RegistrationConfig) -> TestServer {
        TestServer::new(test_app(store, config)).unwrap()
    }

    fn memory_server() -> (TestServer, Arc<MemoryDocumentStore>) {
        let store = Arc::new(MemoryDocumentStore::new());
        let server = server_with(store.clone(), RegistrationConfig::default());
        (server, store)
    }

    fn payload_json() -> Value {
        serde_json::to_value(valid_payload()).unwrap()
    }

    fn basic(credentials: &str) -> HeaderValue {
        let encoded = BASE64_STANDARD.encode(credentials);
        HeaderValue::from_str(&format!("Basic {}", encoded)).unwrap()
    }

    #[tokio::test]
    async fn test_submit_stores_registration() {
        let (server, store) = memory_server();

        let response = server.post("/submit").json(&payload_json()).await;

        response.assert_status_ok();
        response.assert_json(&json!({ "message": STORE_SUCCESS_MESSAGE }));

        let docs = store.snapshot().await;
        assert_eq!(docs.len(), 1);
        assert!(docs[0].get("confirmarSenha").is_none());
        assert_eq!(docs[0]["nomeCompleto"], json!("Ana Silva"));
    }

    #[tokio::test]
    async fn test_submit_without_password_is_a_store_failure() {
        let (server, store) = memory_server();
        let mut body = payload_json();
        body.as_object_mut().unwrap().remove("senha");

        let response = server.post("/submit").json(&body).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": STORE_FAILURE_MESSAGE }));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_submit_with_unknown_field_is_a_store_failure() {
        let (server, store) = memory_server();
        let mut body = payload_json();
        body["isAdmin"] = json!(true);

        let response = server.post("/submit").json(&body).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": STORE_FAILURE_MESSAGE }));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_submit_with_malformed_json_is_a_store_failure() {
        let (server, _store) = memory_server();

        let response = server
            .post("/submit")
            .text("{\"nomeCompleto\": ")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": STORE_FAILURE_MESSAGE }));
    }

    #[tokio::test]
    async fn test_submit_when_store_fails() {
        let server = server_with(Arc::new(FailingDocumentStore), RegistrationConfig::default());

        let response = server.post("/submit").json(&payload_json()).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": STORE_FAILURE_MESSAGE }));
    }

    #[tokio::test]
    async fn test_submit_trusts_client_rules_by_default() {
        let (server, store) = memory_server();
        let mut body = payload_json();
        body["confirmarSenha"] = json!("Outra#123");

        let response = server.post("/submit").json(&body).await;

        response.assert_status_ok();
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_submit_enforces_rules_when_enabled() {
        let store = Arc::new(MemoryDocumentStore::new());
        let config = RegistrationConfig {
            enforce_field_rules: true,
            ..RegistrationConfig::default()
        };
        let server = server_with(store.clone(), config);
        let mut body = payload_json();
        body["confirmarSenha"] = json!("Outra#123");

        let response = server.post("/submit").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], json!("Dados inválidos"));
        assert_eq!(body["fields"]["confirmarSenha"], json!("Senhas devem ser iguais"));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_empty_collection() {
        let (server, _store) = memory_server();

        let response = server.get("/users/all").await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn test_list_returns_stored_documents_with_hash() {
        let (server, _store) = memory_server();
        server.post("/submit").json(&payload_json()).await.assert_status_ok();
        server.post("/submit").json(&payload_json()).await.assert_status_ok();

        let response = server.get("/users/all").await;

        response.assert_status_ok();
        let docs: Vec<Value> = response.json();
        assert_eq!(docs.len(), 2);
        assert_ne!(docs[0][DOCUMENT_ID_KEY], docs[1][DOCUMENT_ID_KEY]);
        let senha = docs[0]["senha"].as_str().unwrap();
        assert!(bcrypt::verify("Segredo#123", senha).unwrap());
    }

    #[tokio::test]
    async fn test_list_when_store_fails() {
        let server = server_with(Arc::new(FailingDocumentStore), RegistrationConfig::default());

        let response = server.get("/users/all").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": LIST_FAILURE_MESSAGE }));
    }

    #[tokio::test]
    async fn test_list_requires_admin_credentials_when_configured() {
        let config = RegistrationConfig {
            admin_username: Some("admin".to_string()),
            admin_password: Some("secret".to_string()),
            ..RegistrationConfig::default()
        };
        let server = server_with(Arc::new(MemoryDocumentStore::new()), config);

        server
            .get("/users/all")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        server
            .get("/users/all")
            .add_header(header::AUTHORIZATION, basic("admin:wrong"))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        server
            .get("/users/all")
            .add_header(header::AUTHORIZATION, basic("admin:secret"))
            .await
            .assert_status_ok();

        // submission stays public
        server
            .post("/submit")
            .json(&payload_json())
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_health_and_request_id() {
        let (server, _store) = memory_server();

        let response = server.get("/health").await;

        response.assert_status_ok();
        assert!(response.headers().contains_key("x-request-id"));
    }
}
