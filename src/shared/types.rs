use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::validation::FieldErrors;

/// Success body: `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure body: `{"error": "..."}`, with per-field messages when the
/// failure comes from field validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub fields: Option<FieldErrors>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: None,
        }
    }

    pub fn with_fields(error: impl Into<String>, fields: FieldErrors) -> Self {
        Self {
            error: error.into(),
            fields: Some(fields),
        }
    }
}
