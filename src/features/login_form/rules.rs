//! Field rules of the login form
//!
//! As in the registration form, each rule passes on values an earlier rule
//! already rejects, so a field reports a single message.

use validator::{ValidateEmail, ValidationError};

use crate::shared::validation::error_with_message;

pub const REQUIRED: &str = "*Campo obrigatório!";
pub const EMAIL_NOT_AN_EMAIL: &str = "*Precisa ser um email válido";
pub const EMAIL_INVALID: &str = "*Email inválido";
pub const PASSWORD_TOO_SHORT: &str = "*Sua senha deve conter no mínimo 6 caracteres";
pub const PASSWORD_INVALID: &str = "*Senha inválida ([A-Z] [a-z] [0-9] [!@#%&])";

pub const PASSWORD_MIN_CHARS: usize = 6;
const PASSWORD_SYMBOLS: &[char] = &['!', '@', '#', '%', '&'];
const REQUIRED_CLASSES: usize = 3;

pub fn validate_email_syntax(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(error_with_message("email", EMAIL_NOT_AN_EMAIL))
    }
}

/// Lowercase letter, `.` and `@` must all appear
pub fn validate_email_characters(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || !value.validate_email() {
        return Ok(());
    }

    let classes = [
        value.chars().any(|c| c.is_ascii_lowercase()),
        value.contains('.'),
        value.contains('@'),
    ];

    if classes.iter().filter(|present| **present).count() >= REQUIRED_CLASSES {
        Ok(())
    } else {
        Err(error_with_message("email_characters", EMAIL_INVALID))
    }
}

pub fn validate_password_length(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.chars().count() >= PASSWORD_MIN_CHARS {
        Ok(())
    } else {
        Err(error_with_message("password_length", PASSWORD_TOO_SHORT))
    }
}

/// At least 3 of: uppercase, lowercase, digit, one of `!@#%&`
pub fn validate_password_strength(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < PASSWORD_MIN_CHARS {
        return Ok(());
    }

    let classes = [
        value.chars().any(|c| c.is_ascii_uppercase()),
        value.chars().any(|c| c.is_ascii_lowercase()),
        value.chars().any(|c| c.is_ascii_digit()),
        value.chars().any(|c| PASSWORD_SYMBOLS.contains(&c)),
    ];

    if classes.iter().filter(|present| **present).count() >= REQUIRED_CLASSES {
        Ok(())
    } else {
        Err(error_with_message("password_strength", PASSWORD_INVALID))
    }
}

/// Email rules in order, first failure wins
pub fn validate_login_email(value: &str) -> Result<(), ValidationError> {
    validate_email_syntax(value)?;
    validate_email_characters(value)
}

/// Password rules in order, first failure wins
pub fn validate_login_password(value: &str) -> Result<(), ValidationError> {
    validate_password_length(value)?;
    validate_password_strength(value)
}
