use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::{Address, PostalCodeLookup};
use crate::core::config::SignupClientConfig;
use crate::core::error::{AppError, Result};

/// ViaCEP response body. Unknown CEPs come back as `{"erro": true}`
/// (older deployments send the string `"true"`).
#[derive(Debug, Deserialize)]
pub struct ViaCepResponse {
    #[serde(default)]
    pub erro: Option<Value>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub logradouro: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub localidade: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
}

impl ViaCepResponse {
    pub fn is_not_found(&self) -> bool {
        match &self.erro {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    pub fn into_address(self) -> Option<Address> {
        if self.is_not_found() {
            return None;
        }

        Some(Address {
            state: self.uf.unwrap_or_default(),
            city: self.localidade.unwrap_or_default(),
            district: self.bairro.unwrap_or_default(),
            street: self.logradouro.unwrap_or_default(),
        })
    }
}

/// Client for the ViaCEP web service (`GET /ws/{cep}/json/`)
pub struct ViaCepClient {
    client: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("SobrelojaCore/1.0 (signup-form)")
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &SignupClientConfig) -> Result<Self> {
        Self::new(config.viacep_base_url.clone(), config.request_timeout)
    }

    fn lookup_url(&self, cep: &str) -> String {
        format!("{}/ws/{}/json/", self.base_url, cep)
    }
}

#[async_trait]
impl PostalCodeLookup for ViaCepClient {
    async fn lookup(&self, cep: &str) -> Result<Option<Address>> {
        let url = self.lookup_url(cep);
        tracing::debug!("Looking up CEP {} -> {}", cep, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("ViaCEP request failed: {:?}", e);
            AppError::ExternalServiceError(format!("ViaCEP request failed: {}", e))
        })?;

        if !response.status().is_success() {
            tracing::warn!("ViaCEP returned status: {}", response.status());
            return Err(AppError::ExternalServiceError(format!(
                "ViaCEP returned status {}",
                response.status()
            )));
        }

        let body: ViaCepResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse ViaCEP response: {:?}", e);
            AppError::ExternalServiceError(format!("Failed to parse ViaCEP response: {}", e))
        })?;

        Ok(body.into_address())
    }
}
