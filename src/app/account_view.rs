//! Account view screen state: one required account id, full account snapshot

use super::fetch::{FetchController, SearchPhase};
use super::validate::validate_account_id;
use crate::api::{ApiResult, CardsApi};
use crate::types::AccountSnapshot;
use eframe::egui;
use std::sync::Arc;
use tracing::info;

pub struct AccountViewScreen {
    api: Arc<dyn CardsApi>,
    handle: tokio::runtime::Handle,

    pub account_input: String,
    pub field_error: Option<String>,

    pub snapshot: Option<AccountSnapshot>,
    pub phase: SearchPhase,
    pub error: Option<String>,
    pub info: Option<String>,

    /// SSN and card number start masked after every fetch.
    pub show_sensitive: bool,

    fetch: FetchController<ApiResult<AccountSnapshot>>,
    last_submitted: Option<String>,
}

impl AccountViewScreen {
    pub fn new(api: Arc<dyn CardsApi>, handle: tokio::runtime::Handle) -> Self {
        Self {
            api,
            handle,
            account_input: String::new(),
            field_error: None,
            snapshot: None,
            phase: SearchPhase::Idle,
            error: None,
            info: None,
            show_sensitive: false,
            fetch: FetchController::default(),
            last_submitted: None,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch.is_fetching()
    }

    pub fn submit(&mut self, ctx: &egui::Context) {
        match validate_account_id(&self.account_input) {
            Err(kind) => {
                self.field_error = Some(format!("Account ID {}", kind));
                self.phase = SearchPhase::Invalid;
            }
            Ok(account_id) => {
                self.field_error = None;
                self.start_fetch(account_id, ctx);
            }
        }
    }

    pub fn retry(&mut self, ctx: &egui::Context) {
        let Some(account_id) = self.last_submitted.clone() else {
            return;
        };
        self.start_fetch(account_id, ctx);
    }

    fn start_fetch(&mut self, account_id: String, ctx: &egui::Context) {
        info!(account = %account_id, "Fetching account snapshot");
        self.phase = SearchPhase::Fetching;
        self.last_submitted = Some(account_id.clone());

        let ticket = self.fetch.begin();
        let slot = self.fetch.slot();
        let api = self.api.clone();
        let ctx = ctx.clone();
        self.handle.spawn(async move {
            let outcome = api.account_view(&account_id).await;
            slot.deliver(ticket, outcome);
            ctx.request_repaint();
        });
    }

    pub fn poll(&mut self) {
        let Some(outcome) = self.fetch.poll() else {
            return;
        };
        match outcome {
            Ok(snapshot) if snapshot.input_valid && snapshot.error_message.is_empty() => {
                self.phase = SearchPhase::Success;
                self.error = None;
                self.info = (!snapshot.info_message.is_empty())
                    .then(|| snapshot.info_message.clone());
                self.snapshot = Some(snapshot);
                self.show_sensitive = false;
            }
            Ok(snapshot) => {
                self.phase = SearchPhase::Error;
                self.error = Some(if snapshot.error_message.is_empty() {
                    "Account lookup failed".to_string()
                } else {
                    snapshot.error_message
                });
            }
            Err(e) => {
                self.phase = SearchPhase::Error;
                self.error = Some(e.to_string());
            }
        }
    }

    /// Hint shown in place of the detail sections before the first lookup.
    pub fn empty_hint(&self) -> Option<&'static str> {
        if self.snapshot.is_some() || self.is_fetching() {
            return None;
        }
        (self.phase == SearchPhase::Idle)
            .then_some("Enter an account ID to view account and customer details")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DemoApi;
    use std::time::Duration;

    fn screen() -> AccountViewScreen {
        AccountViewScreen::new(
            Arc::new(DemoApi::with_latency(Duration::ZERO)),
            tokio::runtime::Handle::current(),
        )
    }

    async fn settle(screen: &mut AccountViewScreen) {
        for _ in 0..500 {
            tokio::time::sleep(Duration::from_millis(1)).await;
            screen.poll();
            if !screen.is_fetching() {
                return;
            }
        }
        panic!("fetch did not settle");
    }

    #[tokio::test]
    async fn test_lookup_success_resets_sensitive_toggle() {
        let mut screen = screen();
        let ctx = egui::Context::default();
        assert!(screen.empty_hint().is_some());

        screen.account_input = "12345678901".to_string();
        screen.show_sensitive = true;
        screen.submit(&ctx);
        settle(&mut screen).await;

        assert_eq!(screen.phase, SearchPhase::Success);
        assert_eq!(screen.empty_hint(), None);
        let snapshot = screen.snapshot.as_ref().unwrap();
        assert_eq!(snapshot.last_name, "SMITH");
        assert_eq!(snapshot.fico_score, 780);
        assert!(!screen.show_sensitive, "masking is restored on every fetch");
    }

    #[tokio::test]
    async fn test_field_errors() {
        let mut screen = screen();
        let ctx = egui::Context::default();

        screen.submit(&ctx);
        assert_eq!(screen.field_error.as_deref(), Some("Account ID is required"));

        screen.account_input = "00000000000".to_string();
        screen.submit(&ctx);
        assert_eq!(screen.field_error.as_deref(), Some("Account ID must not be all zeros"));

        screen.account_input = "1234567890".to_string();
        screen.submit(&ctx);
        assert_eq!(screen.field_error.as_deref(), Some("Account ID must be 11 digits"));
        assert!(!screen.is_fetching());
    }

    #[tokio::test]
    async fn test_unknown_account_keeps_prior_snapshot() {
        let mut screen = screen();
        let ctx = egui::Context::default();
        screen.account_input = "12345678901".to_string();
        screen.submit(&ctx);
        settle(&mut screen).await;
        assert!(screen.snapshot.is_some());

        screen.account_input = "55555555555".to_string();
        screen.submit(&ctx);
        settle(&mut screen).await;

        assert_eq!(screen.phase, SearchPhase::Error);
        assert_eq!(screen.error.as_deref(), Some("Account 55555555555 not found"));
        let kept = screen.snapshot.as_ref().unwrap();
        assert_eq!(kept.last_name, "SMITH");
    }
}
