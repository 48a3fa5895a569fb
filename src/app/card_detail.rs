//! Card detail screen state: required account/card pair, optional seed from
//! the list screen, retry of the last lookup

use super::fetch::{FetchController, SearchPhase};
use super::validate::{require_card_number, validate_account_id};
use crate::api::{ApiResult, CardsApi};
use crate::types::CardDetail;
use crate::utils::pad_account_id;
use eframe::egui;
use std::sync::Arc;
use tracing::info;

pub struct CardDetailScreen {
    api: Arc<dyn CardsApi>,
    handle: tokio::runtime::Handle,

    pub account_input: String,
    pub card_input: String,
    pub account_error: Option<String>,
    pub card_error: Option<String>,

    /// Set when the screen was opened from a list row; the inputs stay
    /// read-only and the first frame fires one automatic search.
    pub from_list: bool,
    auto_search: bool,

    pub detail: Option<CardDetail>,
    pub phase: SearchPhase,
    pub error: Option<String>,
    pub info: Option<String>,

    fetch: FetchController<ApiResult<CardDetail>>,
    last_lookup: Option<(String, String)>,
}

impl CardDetailScreen {
    pub fn new(api: Arc<dyn CardsApi>, handle: tokio::runtime::Handle) -> Self {
        Self {
            api,
            handle,
            account_input: String::new(),
            card_input: String::new(),
            account_error: None,
            card_error: None,
            from_list: false,
            auto_search: false,
            detail: None,
            phase: SearchPhase::Idle,
            error: None,
            info: None,
            fetch: FetchController::default(),
            last_lookup: None,
        }
    }

    /// Screen opened from a list row: fields prefilled and locked, one
    /// automatic search pending.
    pub fn seeded(
        api: Arc<dyn CardsApi>,
        handle: tokio::runtime::Handle,
        account_id: &str,
        card_number: &str,
    ) -> Self {
        let mut screen = Self::new(api, handle);
        screen.account_input = account_id.to_string();
        screen.card_input = card_number.to_string();
        screen.from_list = true;
        screen.auto_search = true;
        screen
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch.is_fetching()
    }

    /// Fire the seeded automatic search. Runs at most once; manual activity
    /// before the first frame would supersede it by generation anyway.
    pub fn tick(&mut self, ctx: &egui::Context) {
        if std::mem::take(&mut self.auto_search) && self.phase == SearchPhase::Idle {
            self.submit(ctx);
        }
    }

    /// Validate both fields and fetch the card record.
    pub fn submit(&mut self, ctx: &egui::Context) {
        let account = validate_account_id(&self.account_input);
        let card = require_card_number(&self.card_input);

        self.account_error = account
            .as_ref()
            .err()
            .map(|kind| format!("Account ID {}", kind));
        self.card_error = card
            .as_ref()
            .err()
            .map(|kind| format!("Card number {}", kind));

        let (Ok(account), Ok(card)) = (account, card) else {
            self.phase = SearchPhase::Invalid;
            return;
        };

        self.start_fetch(account, card, ctx);
    }

    /// Re-run the last submitted lookup verbatim.
    pub fn retry(&mut self, ctx: &egui::Context) {
        let Some((account, card)) = self.last_lookup.clone() else {
            return;
        };
        self.start_fetch(account, card, ctx);
    }

    fn start_fetch(&mut self, account_id: String, card_number: String, ctx: &egui::Context) {
        info!(account = %account_id, card = %card_number, "Looking up card");
        self.phase = SearchPhase::Fetching;
        self.last_lookup = Some((account_id.clone(), card_number.clone()));

        let ticket = self.fetch.begin();
        let slot = self.fetch.slot();
        let api = self.api.clone();
        let ctx = ctx.clone();
        self.handle.spawn(async move {
            let outcome = api.card_detail(&account_id, &card_number).await;
            slot.deliver(ticket, outcome);
            ctx.request_repaint();
        });
    }

    /// Absorb the newest lookup outcome, if one has landed.
    pub fn poll(&mut self) {
        let Some(outcome) = self.fetch.poll() else {
            return;
        };
        match outcome {
            Ok(detail) if detail.success => {
                self.phase = SearchPhase::Success;
                self.error = None;
                self.info = (!detail.info_message.is_empty())
                    .then(|| detail.info_message.clone());
                self.detail = Some(detail);
            }
            Ok(detail) => {
                // Backend answered but found nothing; keep what is shown.
                self.phase = SearchPhase::Error;
                self.error = Some(if detail.error_message.is_empty() {
                    "Card lookup failed".to_string()
                } else {
                    detail.error_message
                });
            }
            Err(e) => {
                self.phase = SearchPhase::Error;
                self.error = Some(e.to_string());
            }
        }
    }

    /// Account id as displayed: zero-padded to the ledger width.
    pub fn padded_account_id(&self) -> Option<String> {
        self.detail.as_ref().map(|d| pad_account_id(&d.account_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DemoApi;
    use std::time::Duration;

    fn api() -> Arc<dyn CardsApi> {
        Arc::new(DemoApi::with_latency(Duration::ZERO))
    }

    async fn settle(screen: &mut CardDetailScreen) {
        for _ in 0..500 {
            tokio::time::sleep(Duration::from_millis(1)).await;
            screen.poll();
            if !screen.is_fetching() {
                return;
            }
        }
        panic!("lookup did not settle");
    }

    #[tokio::test]
    async fn test_manual_lookup() {
        let mut screen = CardDetailScreen::new(api(), tokio::runtime::Handle::current());
        screen.account_input = "12345678901".to_string();
        screen.card_input = "4532123456789012".to_string();
        screen.submit(&egui::Context::default());
        settle(&mut screen).await;

        assert_eq!(screen.phase, SearchPhase::Success);
        let detail = screen.detail.as_ref().unwrap();
        assert_eq!(detail.embossed_name, "JOHN SMITH");
        assert_eq!(screen.padded_account_id().unwrap(), "12345678901");
    }

    #[tokio::test]
    async fn test_both_fields_required() {
        let mut screen = CardDetailScreen::new(api(), tokio::runtime::Handle::current());
        screen.submit(&egui::Context::default());

        assert_eq!(screen.phase, SearchPhase::Invalid);
        assert_eq!(screen.account_error.as_deref(), Some("Account ID is required"));
        assert_eq!(screen.card_error.as_deref(), Some("Card number is required"));
        assert!(!screen.is_fetching());
    }

    #[tokio::test]
    async fn test_seed_fires_exactly_one_search() {
        let ctx = egui::Context::default();
        let mut screen = CardDetailScreen::seeded(
            api(),
            tokio::runtime::Handle::current(),
            "11111111111",
            "4111111111111111",
        );
        assert!(screen.from_list);

        screen.tick(&ctx);
        assert!(screen.is_fetching());
        settle(&mut screen).await;
        assert_eq!(screen.phase, SearchPhase::Success);
        assert_eq!(screen.detail.as_ref().unwrap().active_status, "EXPIRED");

        // Later frames must not re-fire the seed search
        screen.tick(&ctx);
        assert!(!screen.is_fetching());
    }

    #[tokio::test]
    async fn test_miss_shows_backend_message_and_retry_repeats_it() {
        let ctx = egui::Context::default();
        let mut screen = CardDetailScreen::new(api(), tokio::runtime::Handle::current());
        screen.account_input = "12345678901".to_string();
        screen.card_input = "4000000000000000".to_string();
        screen.submit(&ctx);
        settle(&mut screen).await;

        assert_eq!(screen.phase, SearchPhase::Error);
        assert_eq!(
            screen.error.as_deref(),
            Some("Did not find this account and card combination")
        );
        assert!(screen.detail.is_none());

        // Retry re-submits the same lookup without touching the inputs
        screen.card_input.clear();
        screen.retry(&ctx);
        settle(&mut screen).await;
        assert_eq!(screen.phase, SearchPhase::Error);
    }
}
