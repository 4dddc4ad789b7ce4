use chrono::NaiveDate;

use crate::core::config::SignupClientConfig;
use crate::core::error::{AppError, Result};
use crate::features::signup_form::form::SignupForm;
use crate::shared::types::{ErrorResponse, MessageResponse};
use crate::shared::validation::FieldErrors;

/// Result of sending a validated form to the registration API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The API stored the registration
    Stored { message: String },
    /// The API answered with a failure status
    Rejected { status: u16, error: String },
    /// No answer from the API
    Unreachable { reason: String },
}

/// Sends the signup form to `POST {api_base_url}/submit`
pub struct SignupClient {
    client: reqwest::Client,
    api_base_url: String,
}

impl SignupClient {
    pub fn new(config: &SignupClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn submit_url(&self) -> String {
        format!("{}/submit", self.api_base_url)
    }

    /// Validate against the local date, then submit
    pub async fn submit(
        &self,
        form: &SignupForm,
    ) -> std::result::Result<SubmissionOutcome, FieldErrors> {
        form.validate()?;
        Ok(self.send(form).await)
    }

    /// Validate with `today` as the reference date, then submit. An invalid
    /// form sends nothing.
    pub async fn submit_at(
        &self,
        form: &SignupForm,
        today: NaiveDate,
    ) -> std::result::Result<SubmissionOutcome, FieldErrors> {
        form.validate_at(today)?;
        Ok(self.send(form).await)
    }

    async fn send(&self, form: &SignupForm) -> SubmissionOutcome {
        let url = self.submit_url();

        let response = match self.client.post(&url).json(form.fields()).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Registration request to {} failed: {:?}", url, e);
                return SubmissionOutcome::Unreachable {
                    reason: e.to_string(),
                };
            }
        };

        let status = response.status();

        if status.is_success() {
            let message = response
                .json::<MessageResponse>()
                .await
                .map(|body| body.message)
                .unwrap_or_default();
            tracing::info!("Registration submitted: {}", message);
            return SubmissionOutcome::Stored { message };
        }

        let error = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| status.to_string());
        tracing::error!("Registration rejected with status {}: {}", status, error);

        SubmissionOutcome::Rejected {
            status: status.as_u16(),
            error,
        }
    }
}
