//! Field rules of the registration form
//!
//! Every rule here passes on an empty value: emptiness is reported by the
//! field's required rule, so each field fails at most one rule.

use chrono::{Months, NaiveDate};
use validator::{ValidateEmail, ValidationError};

use crate::shared::constants::MINIMUM_AGE_YEARS;
use crate::shared::validation::{error_with_message, BIRTH_DATE_REGEX, EMAIL_REGEX, PHONE_REGEX};

pub const FULL_NAME_MIN_CHARS: usize = 3;

pub const FULL_NAME_TOO_SHORT: &str = "O Nome Completo deve conter no mínimo 3 caracteres";
pub const BIRTH_DATE_INVALID: &str = "Data de Nascimento inválida (XX/XX/XXXX)";
pub const EMAIL_INVALID: &str = "Email inválido";
pub const PHONE_INVALID: &str = "Celular inválido (XX) XXXXX-XXXX";
pub const PASSWORD_MISMATCH: &str = "Senhas devem ser iguais";

pub fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.chars().count() >= FULL_NAME_MIN_CHARS {
        Ok(())
    } else {
        Err(error_with_message("full_name_length", FULL_NAME_TOO_SHORT))
    }
}

pub fn validate_email_format(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || (value.validate_email() && EMAIL_REGEX.is_match(value)) {
        Ok(())
    } else {
        Err(error_with_message("email_format", EMAIL_INVALID))
    }
}

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || PHONE_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(error_with_message("phone_format", PHONE_INVALID))
    }
}

/// Parse a `DD/MM/YYYY` string into a real calendar date
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let captures = BIRTH_DATE_REGEX.captures(value)?;
    let day: u32 = captures.get(1)?.as_str().parse().ok()?;
    let month: u32 = captures.get(2)?.as_str().parse().ok()?;
    let year: i32 = value.get(6..10)?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Latest birth date that is still of age on `today`
pub fn latest_adult_birth_date(today: NaiveDate) -> Option<NaiveDate> {
    today.checked_sub_months(Months::new(MINIMUM_AGE_YEARS * 12))
}

/// Birth date rule: a real `DD/MM/YYYY` date, not in the future, at least
/// 18 years before `today`
pub fn check_birth_date(value: &str, today: NaiveDate) -> Result<(), &'static str> {
    if value.is_empty() {
        return Ok(());
    }

    let birth = parse_birth_date(value).ok_or(BIRTH_DATE_INVALID)?;
    let limit = latest_adult_birth_date(today).ok_or(BIRTH_DATE_INVALID)?;

    if birth > today || birth > limit {
        return Err(BIRTH_DATE_INVALID);
    }

    Ok(())
}

/// Confirmation rule: when given, it must equal the password exactly
pub fn check_password_confirmation(password: &str, confirmation: &str) -> Result<(), &'static str> {
    if confirmation.is_empty() || confirmation == password {
        Ok(())
    } else {
        Err(PASSWORD_MISMATCH)
    }
}
