//! Postal code (CEP) to address lookup
//!
//! The signup form asks an address service to fill state, city, district and
//! street once a full 8-digit CEP has been typed.

mod viacep_client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::shared::constants::POSTAL_CODE_DIGITS;

pub use viacep_client::ViaCepClient;

/// Address fields an address service can provide
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub state: String,
    pub city: String,
    pub district: String,
    pub street: String,
}

#[async_trait]
pub trait PostalCodeLookup: Send + Sync {
    /// Resolve an 8-digit CEP. `Ok(None)` means the service does not know it.
    async fn lookup(&self, cep: &str) -> Result<Option<Address>>;
}

/// Digits of `raw` when they form a complete CEP, `None` otherwise
pub fn normalize_postal_code(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    (digits.len() == POSTAL_CODE_DIGITS).then_some(digits)
}
