//! Formatting and path helpers

use std::path::PathBuf;

/// Get the application data directory path
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("CardDemo Workstation")
}

/// Left-pad an account id with zeros to the canonical 11 digits
pub fn pad_account_id(id: &str) -> String {
    format!("{:0>width$}", id.trim(), width = crate::constants::ACCOUNT_ID_LEN)
}

/// Format a 9-digit SSN as XXX-XX-XXXX; anything else is returned untouched
pub fn format_ssn(ssn: &str) -> String {
    let digits: String = ssn.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 9 {
        format!("{}-{}-{}", &digits[..3], &digits[3..5], &digits[5..])
    } else {
        ssn.to_string()
    }
}

/// Mask an SSN down to its last four digits
pub fn mask_ssn(ssn: &str) -> String {
    let digits: String = ssn.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 4 {
        format!("***-**-{}", &digits[digits.len() - 4..])
    } else {
        "***-**-****".to_string()
    }
}

/// Format a 16-digit card number in groups of four
pub fn format_card_number(card: &str) -> String {
    let digits: String = card.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 16 {
        format!("{}-{}-{}-{}", &digits[..4], &digits[4..8], &digits[8..12], &digits[12..])
    } else {
        card.to_string()
    }
}

/// Mask a card number down to its last four digits
pub fn mask_card_number(card: &str) -> String {
    let digits: String = card.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 4 {
        format!("****-****-****-{}", &digits[digits.len() - 4..])
    } else {
        "****-****-****-****".to_string()
    }
}

/// Format a decimal amount string as dollars with thousands separators.
/// Non-numeric input is returned untouched.
pub fn format_currency(amount: &str) -> String {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, f),
        None => (body, ""),
    };
    if int_part.is_empty()
        || !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return amount.to_string();
    }

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let mut cents = frac_part.chars().take(2).collect::<String>();
    while cents.len() < 2 {
        cents.push('0');
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Render a backend date (yyyy-mm-dd) as mm/dd/yyyy, passing through anything
/// that does not parse
pub fn format_date(date: &str) -> String {
    match chrono::NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(d) => d.format("%m/%d/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_account_id() {
        assert_eq!(pad_account_id("42"), "00000000042");
        assert_eq!(pad_account_id("12345678901"), "12345678901");
    }

    #[test]
    fn test_ssn_masking() {
        assert_eq!(format_ssn("123456789"), "123-45-6789");
        assert_eq!(mask_ssn("123456789"), "***-**-6789");
        assert_eq!(mask_ssn(""), "***-**-****");
    }

    #[test]
    fn test_card_masking() {
        assert_eq!(format_card_number("4111111111111111"), "4111-1111-1111-1111");
        assert_eq!(mask_card_number("4111111111111111"), "****-****-****-1111");
        assert_eq!(mask_card_number("12"), "****-****-****-****");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("1234.5"), "$1,234.50");
        assert_eq!(format_currency("1000000"), "$1,000,000.00");
        assert_eq!(format_currency("-42.75"), "-$42.75");
        assert_eq!(format_currency("0.00"), "$0.00");
        assert_eq!(format_currency("n/a"), "n/a");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2022-03-15"), "03/15/2022");
        assert_eq!(format_date("not a date"), "not a date");
    }
}
