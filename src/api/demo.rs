//! In-memory backend used for offline demo mode and by the test suite.
//! The dataset mirrors the development fixtures of the legacy screens.

use super::{ApiResult, CardFilter, CardsApi};
use crate::constants::ROWS_PER_PAGE;
use crate::types::{AccountSnapshot, CardDetail, CardPage, CardRow};
use std::time::Duration;

struct DemoCard {
    account_id: &'static str,
    card_number: &'static str,
    status: &'static str,
    embossed_name: &'static str,
    expiry_month: &'static str,
    expiry_year: &'static str,
}

const DEMO_CARDS: &[DemoCard] = &[
    DemoCard { account_id: "12345678901", card_number: "4532123456789012", status: "ACTIVE", embossed_name: "JOHN SMITH", expiry_month: "09", expiry_year: "2027" },
    DemoCard { account_id: "12345678901", card_number: "4532123456789013", status: "INACTIVE", embossed_name: "JANE SMITH", expiry_month: "04", expiry_year: "2026" },
    DemoCard { account_id: "98765432109", card_number: "5555666677778888", status: "ACTIVE", embossed_name: "ROBERT JOHNSON", expiry_month: "12", expiry_year: "2028" },
    DemoCard { account_id: "98765432109", card_number: "5555666677778889", status: "BLOCKED", embossed_name: "ROBERT JOHNSON", expiry_month: "12", expiry_year: "2028" },
    DemoCard { account_id: "11111111111", card_number: "4111111111111111", status: "EXPIRED", embossed_name: "MARIA GARCIA", expiry_month: "01", expiry_year: "2023" },
    DemoCard { account_id: "22222222222", card_number: "4222222222222222", status: "ACTIVE", embossed_name: "ALICE BROWN", expiry_month: "06", expiry_year: "2029" },
    DemoCard { account_id: "44444444444", card_number: "4444444444444444", status: "INACTIVE", embossed_name: "JANE DOE", expiry_month: "11", expiry_year: "2026" },
    // High-volume corporate account, enough cards to span pages
    DemoCard { account_id: "33333333333", card_number: "4333333333333333", status: "ACTIVE", embossed_name: "DAVID WILSON", expiry_month: "03", expiry_year: "2027" },
    DemoCard { account_id: "33333333333", card_number: "4333333333333334", status: "ACTIVE", embossed_name: "DAVID WILSON", expiry_month: "03", expiry_year: "2027" },
    DemoCard { account_id: "33333333333", card_number: "4333333333333335", status: "ACTIVE", embossed_name: "DAVID WILSON", expiry_month: "05", expiry_year: "2027" },
    DemoCard { account_id: "33333333333", card_number: "4333333333333336", status: "ACTIVE", embossed_name: "DAVID WILSON", expiry_month: "05", expiry_year: "2028" },
    DemoCard { account_id: "33333333333", card_number: "4333333333333337", status: "BLOCKED", embossed_name: "DAVID WILSON", expiry_month: "07", expiry_year: "2028" },
    DemoCard { account_id: "33333333333", card_number: "4333333333333338", status: "ACTIVE", embossed_name: "DAVID WILSON", expiry_month: "07", expiry_year: "2028" },
    DemoCard { account_id: "33333333333", card_number: "4333333333333339", status: "ACTIVE", embossed_name: "DAVID WILSON", expiry_month: "09", expiry_year: "2028" },
    DemoCard { account_id: "33333333333", card_number: "4333333333333340", status: "ACTIVE", embossed_name: "DAVID WILSON", expiry_month: "09", expiry_year: "2029" },
    DemoCard { account_id: "33333333333", card_number: "4333333333333341", status: "EXPIRED", embossed_name: "DAVID WILSON", expiry_month: "02", expiry_year: "2024" },
    DemoCard { account_id: "33333333333", card_number: "4333333333333342", status: "ACTIVE", embossed_name: "DAVID WILSON", expiry_month: "10", expiry_year: "2029" },
];

fn demo_snapshots() -> Vec<(&'static str, AccountSnapshot)> {
    vec![
        ("12345678901", AccountSnapshot {
            account_status: "Y".into(),
            open_date: "2019-03-15".into(),
            expiration_date: "2027-09-30".into(),
            reissue_date: "2024-09-30".into(),
            group_id: "PREMIUM".into(),
            card_number: "4532123456789012".into(),
            credit_limit: "15000.00".into(),
            cash_credit_limit: "3000.00".into(),
            current_balance: "2345.67".into(),
            current_cycle_credit: "1200.00".into(),
            current_cycle_debit: "3545.67".into(),
            customer_id: "100000001".into(),
            customer_ssn: "123456789".into(),
            date_of_birth: "1985-06-21".into(),
            fico_score: 780,
            primary_card_holder_flag: "Y".into(),
            first_name: "JOHN".into(),
            middle_name: "A".into(),
            last_name: "SMITH".into(),
            phone_number_1: "214-555-0134".into(),
            phone_number_2: "214-555-0178".into(),
            government_id: "TX-4483921".into(),
            eft_account_id: "002144550134".into(),
            address_line_1: "4000 MAIN ST".into(),
            address_line_2: "APT 12B".into(),
            city: "DALLAS".into(),
            state: "TX".into(),
            zip_code: "75201".into(),
            country: "USA".into(),
            ..valid_snapshot()
        }),
        ("98765432109", AccountSnapshot {
            account_status: "Y".into(),
            open_date: "2015-11-02".into(),
            expiration_date: "2028-12-31".into(),
            reissue_date: "2025-01-15".into(),
            group_id: "PLATINUM".into(),
            card_number: "5555666677778888".into(),
            credit_limit: "50000.00".into(),
            cash_credit_limit: "10000.00".into(),
            current_balance: "15750.25".into(),
            current_cycle_credit: "4200.00".into(),
            current_cycle_debit: "8950.25".into(),
            customer_id: "100000002".into(),
            customer_ssn: "987654321".into(),
            date_of_birth: "1972-02-09".into(),
            fico_score: 810,
            primary_card_holder_flag: "Y".into(),
            first_name: "ROBERT".into(),
            middle_name: "".into(),
            last_name: "JOHNSON".into(),
            phone_number_1: "312-555-0242".into(),
            phone_number_2: "".into(),
            government_id: "IL-9920034".into(),
            eft_account_id: "003125550242".into(),
            address_line_1: "88 LAKESHORE DR".into(),
            address_line_2: "".into(),
            city: "CHICAGO".into(),
            state: "IL".into(),
            zip_code: "60601".into(),
            country: "USA".into(),
            ..valid_snapshot()
        }),
        ("11111111111", AccountSnapshot {
            account_status: "Y".into(),
            open_date: "2021-07-19".into(),
            expiration_date: "2025-01-31".into(),
            reissue_date: "2023-01-31".into(),
            group_id: "BASIC".into(),
            card_number: "4111111111111111".into(),
            credit_limit: "1500.00".into(),
            cash_credit_limit: "300.00".into(),
            current_balance: "890.45".into(),
            current_cycle_credit: "120.00".into(),
            current_cycle_debit: "410.45".into(),
            customer_id: "100000003".into(),
            customer_ssn: "456789123".into(),
            date_of_birth: "1994-10-30".into(),
            fico_score: 620,
            primary_card_holder_flag: "Y".into(),
            first_name: "MARIA".into(),
            middle_name: "L".into(),
            last_name: "GARCIA".into(),
            phone_number_1: "915-555-0390".into(),
            phone_number_2: "".into(),
            government_id: "TX-1284756".into(),
            eft_account_id: "009155550390".into(),
            address_line_1: "219 ALAMEDA AVE".into(),
            address_line_2: "".into(),
            city: "EL PASO".into(),
            state: "TX".into(),
            zip_code: "79905".into(),
            country: "USA".into(),
            ..valid_snapshot()
        }),
        ("22222222222", AccountSnapshot {
            account_status: "Y".into(),
            open_date: "2018-05-04".into(),
            expiration_date: "2029-06-30".into(),
            reissue_date: "2024-06-30".into(),
            group_id: "GOLD".into(),
            card_number: "4222222222222222".into(),
            credit_limit: "25000.00".into(),
            cash_credit_limit: "5000.00".into(),
            current_balance: "310.00".into(),
            current_cycle_credit: "2500.00".into(),
            current_cycle_debit: "2810.00".into(),
            customer_id: "100000004".into(),
            customer_ssn: "321654987".into(),
            date_of_birth: "1988-12-17".into(),
            fico_score: 735,
            primary_card_holder_flag: "Y".into(),
            first_name: "ALICE".into(),
            middle_name: "M".into(),
            last_name: "BROWN".into(),
            phone_number_1: "617-555-0118".into(),
            phone_number_2: "617-555-0119".into(),
            government_id: "MA-5561920".into(),
            eft_account_id: "006175550118".into(),
            address_line_1: "7 BEACON CT".into(),
            address_line_2: "UNIT 3".into(),
            city: "BOSTON".into(),
            state: "MA".into(),
            zip_code: "02108".into(),
            country: "USA".into(),
            ..valid_snapshot()
        }),
        ("33333333333", AccountSnapshot {
            account_status: "Y".into(),
            open_date: "2012-01-23".into(),
            expiration_date: "2029-10-31".into(),
            reissue_date: "2025-02-28".into(),
            group_id: "CORPORATE".into(),
            card_number: "4333333333333333".into(),
            credit_limit: "100000.00".into(),
            cash_credit_limit: "20000.00".into(),
            current_balance: "48200.10".into(),
            current_cycle_credit: "15000.00".into(),
            current_cycle_debit: "22100.10".into(),
            customer_id: "100000005".into(),
            customer_ssn: "789123456".into(),
            date_of_birth: "1969-04-02".into(),
            fico_score: 700,
            primary_card_holder_flag: "Y".into(),
            first_name: "DAVID".into(),
            middle_name: "R".into(),
            last_name: "WILSON".into(),
            phone_number_1: "206-555-0465".into(),
            phone_number_2: "206-555-0466".into(),
            government_id: "WA-7703412".into(),
            eft_account_id: "002065550465".into(),
            address_line_1: "1500 RAINIER BLVD".into(),
            address_line_2: "FLOOR 9".into(),
            city: "SEATTLE".into(),
            state: "WA".into(),
            zip_code: "98101".into(),
            country: "USA".into(),
            ..valid_snapshot()
        }),
        ("44444444444", AccountSnapshot {
            account_status: "N".into(),
            open_date: "2016-09-08".into(),
            expiration_date: "2026-11-30".into(),
            reissue_date: "2022-11-30".into(),
            group_id: "STANDARD".into(),
            card_number: "4444444444444444".into(),
            credit_limit: "5000.00".into(),
            cash_credit_limit: "1000.00".into(),
            current_balance: "0.00".into(),
            current_cycle_credit: "0.00".into(),
            current_cycle_debit: "0.00".into(),
            customer_id: "100000006".into(),
            customer_ssn: "654987321".into(),
            date_of_birth: "1990-08-25".into(),
            fico_score: 655,
            primary_card_holder_flag: "N".into(),
            first_name: "JANE".into(),
            middle_name: "".into(),
            last_name: "DOE".into(),
            phone_number_1: "702-555-0277".into(),
            phone_number_2: "".into(),
            government_id: "NV-3326810".into(),
            eft_account_id: "007025550277".into(),
            address_line_1: "930 DESERT INN RD".into(),
            address_line_2: "".into(),
            city: "LAS VEGAS".into(),
            state: "NV".into(),
            zip_code: "89109".into(),
            country: "USA".into(),
            ..valid_snapshot()
        }),
    ]
}

fn valid_snapshot() -> AccountSnapshot {
    AccountSnapshot {
        input_valid: true,
        ..Default::default()
    }
}

pub struct DemoApi {
    snapshots: Vec<(&'static str, AccountSnapshot)>,
    latency: Duration,
}

impl DemoApi {
    pub fn new() -> Self {
        Self::with_latency(Duration::from_millis(150))
    }

    /// Latency keeps the busy indicator observable; tests pass zero.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            snapshots: demo_snapshots(),
            latency,
        }
    }

    fn matching_cards(&self, filter: &CardFilter) -> Vec<&'static DemoCard> {
        DEMO_CARDS
            .iter()
            .filter(|c| filter.account_id.is_empty() || c.account_id == filter.account_id)
            .filter(|c| filter.card_number.is_empty() || c.card_number == filter.card_number)
            .collect()
    }
}

impl Default for DemoApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CardsApi for DemoApi {
    async fn search_cards(&self, filter: &CardFilter, page: u32) -> ApiResult<CardPage> {
        tokio::time::sleep(self.latency).await;

        let matches = self.matching_cards(filter);
        let total = matches.len();
        let total_pages = total.div_ceil(ROWS_PER_PAGE) as u32;
        let start = (page.max(1) as usize - 1) * ROWS_PER_PAGE;

        let content: Vec<CardRow> = matches
            .iter()
            .skip(start)
            .take(ROWS_PER_PAGE)
            .map(|c| CardRow {
                account_number: c.account_id.to_string(),
                card_number: c.card_number.to_string(),
                card_status: c.status.to_string(),
            })
            .collect();

        Ok(CardPage {
            number_of_elements: content.len() as u32,
            content,
            total_pages,
            total_elements: total as u64,
        })
    }

    async fn card_detail(&self, account_id: &str, card_number: &str) -> ApiResult<CardDetail> {
        tokio::time::sleep(self.latency).await;

        match DEMO_CARDS
            .iter()
            .find(|c| c.account_id == account_id && c.card_number == card_number)
        {
            Some(card) => Ok(CardDetail {
                success: true,
                account_id: card.account_id.to_string(),
                card_number: card.card_number.to_string(),
                active_status: card.status.to_string(),
                embossed_name: card.embossed_name.to_string(),
                expiry_month: card.expiry_month.to_string(),
                expiry_year: card.expiry_year.to_string(),
                cvv_code: "123".to_string(),
                ..Default::default()
            }),
            None => Ok(CardDetail {
                success: false,
                error_message: "Did not find this account and card combination".to_string(),
                ..Default::default()
            }),
        }
    }

    async fn account_view(&self, account_id: &str) -> ApiResult<AccountSnapshot> {
        tokio::time::sleep(self.latency).await;

        match self
            .snapshots
            .iter()
            .find(|(id, _)| *id == account_id)
            .map(|(_, snapshot)| snapshot)
        {
            Some(snapshot) => Ok(snapshot.clone()),
            None => Ok(AccountSnapshot {
                input_valid: false,
                error_message: format!("Account {} not found", account_id),
                ..Default::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> DemoApi {
        DemoApi::with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_unfiltered_search_pages_at_seven() {
        let api = api();
        let page = api.search_cards(&CardFilter::default(), 1).await.unwrap();
        assert_eq!(page.content.len(), ROWS_PER_PAGE);
        assert_eq!(page.total_elements, DEMO_CARDS.len() as u64);
        assert_eq!(page.total_pages, 3);

        let last = api.search_cards(&CardFilter::default(), 3).await.unwrap();
        assert_eq!(last.content.len(), DEMO_CARDS.len() - 2 * ROWS_PER_PAGE);
    }

    #[tokio::test]
    async fn test_account_filter_narrows_results() {
        let api = api();
        let filter = CardFilter {
            account_id: "12345678901".to_string(),
            ..Default::default()
        };
        let page = api.search_cards(&filter, 1).await.unwrap();
        assert_eq!(page.content.len(), 2);
        assert!(page.content.iter().all(|r| r.account_number == "12345678901"));
    }

    #[tokio::test]
    async fn test_no_matches_is_an_empty_page() {
        let api = api();
        let filter = CardFilter {
            account_id: "99999999999".to_string(),
            ..Default::default()
        };
        let page = api.search_cards(&filter, 1).await.unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_elements, 0);
    }

    #[tokio::test]
    async fn test_card_detail_hit_and_miss() {
        let api = api();
        let hit = api
            .card_detail("12345678901", "4532123456789012")
            .await
            .unwrap();
        assert!(hit.success);
        assert_eq!(hit.embossed_name, "JOHN SMITH");

        let miss = api.card_detail("12345678901", "4000000000000000").await.unwrap();
        assert!(!miss.success);
        assert!(!miss.error_message.is_empty());
    }

    #[tokio::test]
    async fn test_account_view_hit_and_miss() {
        let api = api();
        let hit = api.account_view("11111111111").await.unwrap();
        assert!(hit.input_valid);
        assert_eq!(hit.last_name, "GARCIA");
        assert_eq!(hit.fico_score, 620);

        let miss = api.account_view("99999999999").await.unwrap();
        assert!(!miss.input_valid);
    }
}
