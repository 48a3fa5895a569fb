//! Field validation for the legacy fixed-length numeric inputs

use crate::constants::{ACCOUNT_ID_LEN, CARD_NUMBER_LEN};
use thiserror::Error;

/// Why a field failed validation. Displays as the tail of a message, so a
/// screen can prefix the field label: "Account ID must be 11 digits".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    #[error("is required")]
    Empty,
    #[error("must be {0} digits")]
    Length(usize),
    #[error("must not be all zeros")]
    AllZero,
}

/// Strip everything but ASCII digits and cap the length. Applied on every
/// keystroke, so it must be idempotent.
pub fn sanitize_digits(input: &str, max_len: usize) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max_len)
        .collect()
}

fn digits_of(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Required 11-digit account id, not all zeros. Length is checked against
/// every digit present, so over-long input is rejected rather than clipped.
pub fn validate_account_id(input: &str) -> Result<String, FieldErrorKind> {
    let digits = digits_of(input);
    if digits.is_empty() {
        return Err(FieldErrorKind::Empty);
    }
    if digits.len() != ACCOUNT_ID_LEN {
        return Err(FieldErrorKind::Length(ACCOUNT_ID_LEN));
    }
    if digits.bytes().all(|b| b == b'0') {
        return Err(FieldErrorKind::AllZero);
    }
    Ok(digits)
}

/// Account id as an optional search filter: empty means "no filter", anything
/// else must pass the full account id rules.
pub fn optional_account_id(input: &str) -> Result<Option<String>, FieldErrorKind> {
    if digits_of(input).is_empty() {
        return Ok(None);
    }
    validate_account_id(input).map(Some)
}

/// Card number as an optional search filter: empty means "no filter",
/// otherwise exactly 16 digits.
pub fn validate_card_number(input: &str) -> Result<Option<String>, FieldErrorKind> {
    let digits = digits_of(input);
    if digits.is_empty() {
        return Ok(None);
    }
    if digits.len() != CARD_NUMBER_LEN {
        return Err(FieldErrorKind::Length(CARD_NUMBER_LEN));
    }
    Ok(Some(digits))
}

/// Required 16-digit card number (single-card screens).
pub fn require_card_number(input: &str) -> Result<String, FieldErrorKind> {
    match validate_card_number(input)? {
        Some(digits) => Ok(digits),
        None => Err(FieldErrorKind::Empty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_non_digits() {
        assert_eq!(sanitize_digits("4532-1234 5678x9012", 16), "4532123456789012");
        assert_eq!(sanitize_digits("", 11), "");
        assert_eq!(sanitize_digits("123456789012345", 11), "12345678901");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for s in ["", "abc", "12-34", "00000000000", "4532123456789012", "  9 9 9"] {
            let once = sanitize_digits(s, 16);
            assert_eq!(sanitize_digits(&once, 16), once);
        }
    }

    #[test]
    fn test_account_id_rules() {
        assert_eq!(validate_account_id(""), Err(FieldErrorKind::Empty));
        assert_eq!(validate_account_id("   "), Err(FieldErrorKind::Empty));
        assert_eq!(validate_account_id("1234567890"), Err(FieldErrorKind::Length(11)));
        assert_eq!(validate_account_id("123456789012"), Err(FieldErrorKind::Length(11)));
        assert_eq!(validate_account_id("00000000000"), Err(FieldErrorKind::AllZero));
        assert_eq!(validate_account_id("12345678901"), Ok("12345678901".to_string()));
    }

    #[test]
    fn test_optional_account_id() {
        assert_eq!(optional_account_id(""), Ok(None));
        assert_eq!(optional_account_id("123"), Err(FieldErrorKind::Length(11)));
        assert_eq!(optional_account_id("12345678901"), Ok(Some("12345678901".to_string())));
    }

    #[test]
    fn test_card_number_rules() {
        assert_eq!(validate_card_number(""), Ok(None));
        assert_eq!(validate_card_number("123"), Err(FieldErrorKind::Length(16)));
        assert_eq!(
            validate_card_number("4532123456789012"),
            Ok(Some("4532123456789012".to_string()))
        );
        assert_eq!(require_card_number(""), Err(FieldErrorKind::Empty));
        assert_eq!(require_card_number("4532123456789012"), Ok("4532123456789012".to_string()));
    }

    #[test]
    fn test_error_kind_messages() {
        assert_eq!(FieldErrorKind::Empty.to_string(), "is required");
        assert_eq!(FieldErrorKind::Length(11).to_string(), "must be 11 digits");
        assert_eq!(FieldErrorKind::AllZero.to_string(), "must not be all zeros");
    }
}
