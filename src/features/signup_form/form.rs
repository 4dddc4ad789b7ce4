use chrono::NaiveDate;

use crate::features::registration::dtos::RegistrationPayload;
use crate::features::signup_form::masks::{format_birth_date, format_phone, format_tax_id};
use crate::modules::postal_code::{normalize_postal_code, PostalCodeLookup};
use crate::shared::validation::FieldErrors;

/// What happened when the postal code field changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressLookupOutcome {
    /// Not a complete CEP yet, no lookup issued
    Skipped,
    /// Address fields were filled from the lookup
    Filled,
    /// The service does not know the CEP, fields untouched
    NotFound,
    /// The lookup could not be completed, fields untouched
    Failed,
}

/// State of the signup form while the user fills it in
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    fields: RegistrationPayload,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &RegistrationPayload {
        &self.fields
    }

    /// Direct access for fields without side effects (name, email, passwords, ...)
    pub fn fields_mut(&mut self) -> &mut RegistrationPayload {
        &mut self.fields
    }

    pub fn set_tax_id(&mut self, raw: &str) {
        let formatted = format_tax_id(raw);
        self.fields.tax_id = (!formatted.is_empty()).then_some(formatted);
    }

    pub fn set_birth_date(&mut self, raw: &str) {
        self.fields.birth_date = format_birth_date(raw);
    }

    pub fn set_phone(&mut self, raw: &str) {
        self.fields.phone = format_phone(raw);
    }

    /// Store the postal code and, once it holds 8 digits, fill the address
    /// fields from `lookup`
    pub async fn set_postal_code(
        &mut self,
        raw: &str,
        lookup: &dyn PostalCodeLookup,
    ) -> AddressLookupOutcome {
        self.fields.postal_code = raw.to_string();

        let Some(cep) = normalize_postal_code(raw) else {
            return AddressLookupOutcome::Skipped;
        };

        match lookup.lookup(&cep).await {
            Ok(Some(address)) => {
                tracing::debug!("Address found for CEP {}", cep);
                self.fields.state = address.state;
                self.fields.city = address.city;
                self.fields.district = address.district;
                self.fields.street = address.street;
                AddressLookupOutcome::Filled
            }
            Ok(None) => {
                tracing::warn!("CEP {} not found", cep);
                AddressLookupOutcome::NotFound
            }
            Err(e) => {
                tracing::error!("Address lookup for CEP {} failed: {}", cep, e);
                AddressLookupOutcome::Failed
            }
        }
    }

    pub fn validate_at(&self, today: NaiveDate) -> Result<(), FieldErrors> {
        self.fields.validate_at(today)
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        self.fields.validate_fields()
    }
}

impl From<RegistrationPayload> for SignupForm {
    fn from(fields: RegistrationPayload) -> Self {
        Self { fields }
    }
}
