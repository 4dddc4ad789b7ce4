use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::shared::constants::STORE_FAILURE_MESSAGE;

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

#[derive(Debug)]
pub struct AppJsonRejection(JsonRejection);

impl AppJsonRejection {
    fn into_message(self) -> String {
        match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            _ => "Failed to parse JSON body".to_string(),
        }
    }
}

/// A body that cannot be read is reported like any other store failure; the
/// parse error is only logged
impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        AppError::from(self)
            .with_public_message(STORE_FAILURE_MESSAGE)
            .into_response()
    }
}

impl From<AppJsonRejection> for AppError {
    fn from(rejection: AppJsonRejection) -> Self {
        AppError::BadRequest(rejection.into_message())
    }
}
