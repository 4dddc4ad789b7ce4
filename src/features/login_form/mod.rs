//! Login form validator
//!
//! Validation only: the form is checked client side and nothing is sent.

pub mod rules;

use std::fmt;

use validator::Validate;

use crate::features::login_form::rules::{validate_login_email, validate_login_password};
use crate::shared::validation::FieldErrors;

#[derive(Clone, Default, Validate)]
pub struct LoginForm {
    #[validate(
        length(min = 1, message = "*Campo obrigatório!"),
        custom(function = "validate_login_email")
    )]
    pub email: String,

    #[validate(
        length(min = 1, message = "*Campo obrigatório!"),
        custom(function = "validate_login_password")
    )]
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Per-field messages keyed `email` / `password`
    pub fn validate_fields(&self) -> Result<(), FieldErrors> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) => FieldErrors::from_validation_errors(&errors, |field| match field {
                "email" => Some("email"),
                "password" => Some("password"),
                _ => None,
            })
            .into_result(),
        }
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
