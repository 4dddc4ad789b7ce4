use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors};

lazy_static! {
    /// Birth date typed as DD/MM/YYYY
    /// - Valid: "01/01/2000", "31/12/1999"
    /// - Invalid: "1/1/2000", "32/01/2000", "01/13/2000", "01/01/1899", "01-01-2000"
    pub static ref BIRTH_DATE_REGEX: Regex =
        Regex::new(r"^(0[1-9]|[12][0-9]|3[01])/(0[1-9]|1[012])/(19|20)\d\d$").unwrap();

    /// Case-insensitive local@domain.tld
    pub static ref EMAIL_REGEX: Regex =
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap();

    /// Mobile phone as masked by the form: "(11) 98765-4321"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\(\d{2}\) \d{5}-\d{4}$").unwrap();
}

/// Build a `ValidationError` carrying a user-facing message
pub fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Per-field messages keyed by the field's wire name. One message per field:
/// the first rule the field failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Collect `validator` output, renaming field identifiers with `wire_name`
    /// (identifiers it does not know are kept as reported)
    pub fn from_validation_errors(
        errors: &ValidationErrors,
        wire_name: impl Fn(&str) -> Option<&'static str>,
    ) -> Self {
        let mut fields = Self::default();
        for (field, field_errors) in errors.field_errors() {
            let message = field_errors.iter().find_map(|e| e.message.clone());
            let message = match (message, field_errors.first()) {
                (Some(message), _) => message.to_string(),
                (None, Some(error)) => error.code.to_string(),
                (None, None) => continue,
            };
            let key = wire_name(&*field)
                .map(str::to_string)
                .unwrap_or_else(|| field.to_string());
            fields.insert(&key, message);
        }
        fields
    }

    /// Record a message unless the field already failed an earlier rule
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn contains_message(&self, message: &str) -> bool {
        self.0.values().any(|m| m == message)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(())` when no field failed
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}
