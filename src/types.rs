//! Wire types shared by the backend clients and screens

fn default_true() -> bool {
    true
}

/// Card status codes as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Active,
    Inactive,
    Blocked,
    Expired,
    Unknown,
}

impl CardStatus {
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        if code.eq_ignore_ascii_case("ACTIVE") {
            CardStatus::Active
        } else if code.eq_ignore_ascii_case("INACTIVE") {
            CardStatus::Inactive
        } else if code.eq_ignore_ascii_case("BLOCKED") {
            CardStatus::Blocked
        } else if code.eq_ignore_ascii_case("EXPIRED") {
            CardStatus::Expired
        } else {
            CardStatus::Unknown
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardStatus::Active => "ACTIVE",
            CardStatus::Inactive => "INACTIVE",
            CardStatus::Blocked => "BLOCKED",
            CardStatus::Expired => "EXPIRED",
            CardStatus::Unknown => "UNKNOWN",
        }
    }
}

/// One row of the card list result set
#[derive(Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRow {
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub card_status: String,
}

/// One page of card list results (Spring-style page envelope)
#[derive(Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPage {
    #[serde(default)]
    pub content: Vec<CardRow>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub number_of_elements: u32,
}

/// Single-card record returned by the detail endpoint
#[derive(Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetail {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub error_message: String,
    #[serde(default)]
    pub info_message: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub active_status: String,
    #[serde(default)]
    pub embossed_name: String,
    #[serde(default)]
    pub expiry_month: String,
    #[serde(default)]
    pub expiry_year: String,
    #[serde(default)]
    pub cvv_code: String,
}

/// Account snapshot returned by the account view endpoint. Money fields are
/// decimal strings straight from the backend; no arithmetic is done on them.
#[derive(Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSnapshot {
    #[serde(default = "default_true")]
    pub input_valid: bool,
    #[serde(default)]
    pub error_message: String,
    #[serde(default)]
    pub info_message: String,
    #[serde(default)]
    pub account_status: String, // "Y" / "N"
    #[serde(default)]
    pub open_date: String,
    #[serde(default)]
    pub expiration_date: String,
    #[serde(default)]
    pub reissue_date: String,
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub credit_limit: String,
    #[serde(default)]
    pub cash_credit_limit: String,
    #[serde(default)]
    pub current_balance: String,
    #[serde(default)]
    pub current_cycle_credit: String,
    #[serde(default)]
    pub current_cycle_debit: String,
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub customer_ssn: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub fico_score: i32,
    #[serde(default)]
    pub primary_card_holder_flag: String, // "Y" / "N"
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number_1: String,
    #[serde(default)]
    pub phone_number_2: String,
    #[serde(default)]
    pub government_id: String,
    #[serde(default)]
    pub eft_account_id: String,
    #[serde(default)]
    pub address_line_1: String,
    #[serde(default)]
    pub address_line_2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_status_from_code() {
        assert_eq!(CardStatus::from_code("ACTIVE"), CardStatus::Active);
        assert_eq!(CardStatus::from_code(" active "), CardStatus::Active);
        assert_eq!(CardStatus::from_code("BLOCKED"), CardStatus::Blocked);
        assert_eq!(CardStatus::from_code("frozen"), CardStatus::Unknown);
        assert_eq!(CardStatus::from_code(""), CardStatus::Unknown);
    }

    #[test]
    fn test_card_page_envelope_parses() {
        let body = r#"{
            "content": [
                {"accountNumber": "12345678901", "cardNumber": "4111111111111111", "cardStatus": "ACTIVE"}
            ],
            "totalPages": 3,
            "totalElements": 17,
            "numberOfElements": 7
        }"#;
        let page: CardPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].account_number, "12345678901");
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 17);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let detail: CardDetail = serde_json::from_str("{}").unwrap();
        assert!(detail.success);
        assert!(detail.card_number.is_empty());

        let snapshot: AccountSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.input_valid);
        assert_eq!(snapshot.fico_score, 0);
    }
}
