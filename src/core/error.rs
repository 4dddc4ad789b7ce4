use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ErrorResponse;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Attach the fixed message an endpoint answers with when this error
    /// reaches the client.
    pub fn with_public_message(self, public_message: &'static str) -> OperationError {
        OperationError {
            public_message,
            source: self,
        }
    }
}

/// Error returned by an endpoint: the cause is logged, the client only sees
/// the endpoint's fixed message.
#[derive(Debug)]
pub struct OperationError {
    public_message: &'static str,
    source: AppError,
}

impl OperationError {
    pub fn source(&self) -> &AppError {
        &self.source
    }
}

/// Message used when server-side field rules reject a payload
pub const INVALID_DATA_MESSAGE: &str = "Dados inválidos";

impl IntoResponse for OperationError {
    fn into_response(self) -> Response {
        match self.source {
            AppError::Validation(fields) => {
                tracing::warn!(fields = ?fields, "Rejected payload with invalid fields");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::with_fields(INVALID_DATA_MESSAGE, fields)),
                )
                    .into_response()
            }
            source => {
                tracing::error!(error = ?source, "{}", self.public_message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(self.public_message)),
                )
                    .into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
