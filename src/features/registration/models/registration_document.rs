use serde::{Deserialize, Serialize};

use crate::features::registration::dtos::RegistrationPayload;

/// Registration as persisted. There is no confirmation field and `senha`
/// holds the bcrypt hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDocument {
    #[serde(rename = "nomeCompleto")]
    pub full_name: String,
    #[serde(rename = "dataNascimento")]
    pub birth_date: String,
    #[serde(rename = "cpfCnpj", default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    pub email: String,
    #[serde(rename = "celular")]
    pub phone: String,
    #[serde(rename = "senha")]
    pub password_hash: String,
    #[serde(rename = "cep")]
    pub postal_code: String,
    #[serde(rename = "uf")]
    pub state: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "bairro")]
    pub district: String,
    #[serde(rename = "rua")]
    pub street: String,
    #[serde(rename = "numero")]
    pub number: String,
}

impl RegistrationDocument {
    /// Build the stored document, dropping the plaintext password and its confirmation
    pub fn from_payload(payload: RegistrationPayload, password_hash: String) -> Self {
        let RegistrationPayload {
            full_name,
            birth_date,
            tax_id,
            email,
            phone,
            password: _,
            password_confirmation: _,
            postal_code,
            state,
            city,
            district,
            street,
            number,
        } = payload;

        Self {
            full_name,
            birth_date,
            tax_id,
            email,
            phone,
            password_hash,
            postal_code,
            state,
            city,
            district,
            street,
            number,
        }
    }
}
