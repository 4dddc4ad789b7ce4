//! Input masks applied while the user types
//!
//! All masks work on the digits of the input only and insert separators
//! progressively, so a partial value gets a partial mask.

use crate::shared::constants::{CNPJ_DIGITS, CPF_DIGITS};

const BIRTH_DATE_DIGITS: usize = 8;
const PHONE_DIGITS: usize = 11;

const CPF_MASK: &[(usize, &str)] = &[(3, "."), (6, "."), (9, "-")];
const CNPJ_MASK: &[(usize, &str)] = &[(2, "."), (5, "."), (8, "/"), (12, "-")];
const BIRTH_DATE_MASK: &[(usize, &str)] = &[(2, "/"), (4, "/")];
const PHONE_MASK: &[(usize, &str)] = &[(0, "("), (2, ") "), (7, "-")];

/// Which identity document a tax id belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxIdKind {
    /// Individual, 11 digits
    Cpf,
    /// Company, 14 digits
    Cnpj,
}

impl TaxIdKind {
    /// Up to 11 digits is a CPF, anything longer a CNPJ
    pub fn detect(digits: &str) -> Self {
        if digits.chars().count() <= CPF_DIGITS {
            TaxIdKind::Cpf
        } else {
            TaxIdKind::Cnpj
        }
    }

    fn mask(self) -> &'static [(usize, &'static str)] {
        match self {
            TaxIdKind::Cpf => CPF_MASK,
            TaxIdKind::Cnpj => CNPJ_MASK,
        }
    }
}

/// First `cap` ASCII digits of `raw`
pub fn digits_only(raw: &str, cap: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(cap).collect()
}

/// Insert each separator right before the digit at its index, when that
/// digit is present
fn apply_mask(digits: &str, mask: &[(usize, &str)]) -> String {
    let mut masked = String::with_capacity(digits.len() + mask.len() * 2);
    for (index, digit) in digits.chars().enumerate() {
        if let Some((_, separator)) = mask.iter().find(|(at, _)| *at == index) {
            masked.push_str(separator);
        }
        masked.push(digit);
    }
    masked
}

/// `ddd.ddd.ddd-dd` for CPF, `dd.ddd.ddd/dddd-dd` for CNPJ
pub fn format_tax_id(raw: &str) -> String {
    let digits = digits_only(raw, CNPJ_DIGITS);
    apply_mask(&digits, TaxIdKind::detect(&digits).mask())
}

/// `99/99/9999`
pub fn format_birth_date(raw: &str) -> String {
    apply_mask(&digits_only(raw, BIRTH_DATE_DIGITS), BIRTH_DATE_MASK)
}

/// `(99) 99999-9999`
pub fn format_phone(raw: &str) -> String {
    apply_mask(&digits_only(raw, PHONE_DIGITS), PHONE_MASK)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_DIGITS: &str = "12345678901234";

    #[test]
    fn test_detect_kind() {
        assert_eq!(TaxIdKind::detect(""), TaxIdKind::Cpf);
        assert_eq!(TaxIdKind::detect("12345678901"), TaxIdKind::Cpf);
        assert_eq!(TaxIdKind::detect("123456789012"), TaxIdKind::Cnpj);
    }

    #[test]
    fn test_format_full_cpf_and_cnpj() {
        assert_eq!(format_tax_id("12345678901"), "123.456.789-01");
        assert_eq!(format_tax_id("12345678000195"), "12.345.678/0001-95");
    }

    #[test]
    fn test_format_tax_id_strips_and_caps() {
        assert_eq!(format_tax_id("123.456.789-01"), "123.456.789-01");
        assert_eq!(format_tax_id("12.345.678/0001-95 extra 99"), "12.345.678/0001-95");
        assert_eq!(format_tax_id("abc"), "");
    }

    #[test]
    fn test_format_partial_cpf() {
        assert_eq!(format_tax_id("123"), "123");
        assert_eq!(format_tax_id("1234"), "123.4");
        assert_eq!(format_tax_id("1234567"), "123.456.7");
        assert_eq!(format_tax_id("1234567890"), "123.456.789-0");
    }

    #[test]
    fn test_cnpj_with_twelve_digits_has_no_hyphen() {
        assert_eq!(format_tax_id("123456789012"), "12.345.678/9012");
        assert_eq!(format_tax_id("1234567890123"), "12.345.678/9012-3");
    }

    #[test]
    fn test_cpf_lengths_never_yield_a_slash() {
        for len in 0..=CPF_DIGITS {
            let formatted = format_tax_id(&ALL_DIGITS[..len]);
            assert!(!formatted.contains('/'), "{} has a slash", formatted);
        }
    }

    #[test]
    fn test_cnpj_lengths_yield_one_slash_after_eighth_digit() {
        for len in (CPF_DIGITS + 1)..=CNPJ_DIGITS {
            let formatted = format_tax_id(&ALL_DIGITS[..len]);
            assert_eq!(formatted.matches('/').count(), 1, "{}", formatted);

            let before_slash = formatted.split('/').next().unwrap();
            let digits_before = before_slash.chars().filter(char::is_ascii_digit).count();
            assert_eq!(digits_before, 8, "{}", formatted);

            let hyphens = formatted.matches('-').count();
            if len > 12 {
                assert_eq!(hyphens, 1, "{}", formatted);
                let after_hyphen = formatted.rsplit('-').next().unwrap();
                assert_eq!(after_hyphen.len(), len - 12, "{}", formatted);
            } else {
                assert_eq!(hyphens, 0, "{}", formatted);
            }
        }
    }

    #[test]
    fn test_format_birth_date() {
        assert_eq!(format_birth_date("0"), "0");
        assert_eq!(format_birth_date("010"), "01/0");
        assert_eq!(format_birth_date("01012000"), "01/01/2000");
        assert_eq!(format_birth_date("01/01/2000123"), "01/01/2000");
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "(1");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone("+55 11 98765-4321"), "(55) 11987-6543");
    }
}
