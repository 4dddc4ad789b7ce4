use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::registration::rules::{
    check_birth_date, check_password_confirmation, validate_email_format, validate_full_name,
    validate_phone,
};
use crate::shared::validation::FieldErrors;

/// Registration form fields as sent by the signup form. JSON keys are the
/// form's Portuguese field names.
///
/// `confirmarSenha` travels with the payload but is never stored.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RegistrationPayload {
    #[serde(rename = "nomeCompleto")]
    #[schema(example = "Ana Silva")]
    #[validate(
        length(min = 1, message = "Nome Completo é obrigatório"),
        custom(function = "validate_full_name")
    )]
    pub full_name: String,

    /// DD/MM/YYYY
    #[serde(rename = "dataNascimento")]
    #[schema(example = "01/01/2000")]
    #[validate(length(min = 1, message = "Data de Nascimento é obrigatória"))]
    pub birth_date: String,

    /// CPF or CNPJ, masked; not validated
    #[serde(rename = "cpfCnpj", default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "123.456.789-01")]
    pub tax_id: Option<String>,

    #[schema(example = "ana@test.com")]
    #[validate(
        length(min = 1, message = "Email é obrigatório"),
        custom(function = "validate_email_format")
    )]
    pub email: String,

    #[serde(rename = "celular")]
    #[schema(example = "(11) 98765-4321")]
    #[validate(
        length(min = 1, message = "Celular é obrigatório"),
        custom(function = "validate_phone")
    )]
    pub phone: String,

    #[serde(rename = "senha")]
    #[validate(length(min = 1, message = "Senha é obrigatória"))]
    pub password: String,

    #[serde(rename = "confirmarSenha")]
    #[validate(length(min = 1, message = "Confirmação de senha é obrigatória"))]
    pub password_confirmation: String,

    #[serde(rename = "cep")]
    #[schema(example = "01001-000")]
    #[validate(length(min = 1, message = "CEP é obrigatório"))]
    pub postal_code: String,

    #[serde(rename = "uf")]
    #[schema(example = "SP")]
    #[validate(length(min = 1, message = "UF é obrigatório"))]
    pub state: String,

    #[serde(rename = "cidade")]
    #[validate(length(min = 1, message = "Cidade é obrigatória"))]
    pub city: String,

    #[serde(rename = "bairro")]
    #[validate(length(min = 1, message = "Bairro é obrigatório"))]
    pub district: String,

    #[serde(rename = "rua")]
    #[validate(length(min = 1, message = "Rua é obrigatória"))]
    pub street: String,

    #[serde(rename = "numero")]
    #[validate(length(min = 1, message = "Número é obrigatório"))]
    pub number: String,
}

impl RegistrationPayload {
    /// Wire key of a field as reported by the validator
    pub fn wire_name(field: &str) -> Option<&'static str> {
        let name = match field {
            "full_name" | "nomeCompleto" => "nomeCompleto",
            "birth_date" | "dataNascimento" => "dataNascimento",
            "tax_id" | "cpfCnpj" => "cpfCnpj",
            "email" => "email",
            "phone" | "celular" => "celular",
            "password" | "senha" => "senha",
            "password_confirmation" | "confirmarSenha" => "confirmarSenha",
            "postal_code" | "cep" => "cep",
            "state" | "uf" => "uf",
            "city" | "cidade" => "cidade",
            "district" | "bairro" => "bairro",
            "street" | "rua" => "rua",
            "number" | "numero" => "numero",
            _ => return None,
        };
        Some(name)
    }

    /// Run every form rule, with `today` as the reference date for the age check
    pub fn validate_at(&self, today: NaiveDate) -> Result<(), FieldErrors> {
        let mut fields = match self.validate() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => FieldErrors::from_validation_errors(&errors, Self::wire_name),
        };

        if let Err(message) = check_birth_date(&self.birth_date, today) {
            fields.insert("dataNascimento", message);
        }

        if let Err(message) =
            check_password_confirmation(&self.password, &self.password_confirmation)
        {
            fields.insert("confirmarSenha", message);
        }

        fields.into_result()
    }

    /// Run every form rule against the local date
    pub fn validate_fields(&self) -> Result<(), FieldErrors> {
        self.validate_at(chrono::Local::now().date_naive())
    }
}

// Keeps passwords out of logs
impl fmt::Debug for RegistrationPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationPayload")
            .field("full_name", &self.full_name)
            .field("birth_date", &self.birth_date)
            .field("tax_id", &self.tax_id)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .field("password_confirmation", &"<redacted>")
            .field("postal_code", &self.postal_code)
            .field("state", &self.state)
            .field("city", &self.city)
            .field("district", &self.district)
            .field("street", &self.street)
            .field("number", &self.number)
            .finish()
    }
}
