//! Card list screen state: filter form, paged results, row selection

use super::fetch::{FetchController, SearchPhase};
use super::pager::Pager;
use super::selection::{SelectionTag, SelectionTracker};
use super::validate::{optional_account_id, validate_card_number};
use crate::api::{ApiResult, CardFilter, CardsApi};
use crate::types::{CardPage, CardRow};
use eframe::egui;
use std::sync::Arc;
use tracing::{debug, info};

pub struct CardListScreen {
    api: Arc<dyn CardsApi>,
    handle: tokio::runtime::Handle,

    // Filter form
    pub account_input: String,
    pub card_input: String,
    pub account_error: Option<String>,
    pub card_error: Option<String>,

    // Current result set
    pub rows: Vec<CardRow>,
    pub pager: Pager,
    pub selection: SelectionTracker,

    pub phase: SearchPhase,
    pub error: Option<String>,

    fetch: FetchController<ApiResult<CardPage>>,
    last_filter: Option<CardFilter>,
    requested_page: u32,
    searched: bool,
}

impl CardListScreen {
    pub fn new(api: Arc<dyn CardsApi>, handle: tokio::runtime::Handle) -> Self {
        Self {
            api,
            handle,
            account_input: String::new(),
            card_input: String::new(),
            account_error: None,
            card_error: None,
            rows: Vec::new(),
            pager: Pager::default(),
            selection: SelectionTracker::default(),
            phase: SearchPhase::Idle,
            error: None,
            fetch: FetchController::default(),
            last_filter: None,
            requested_page: 1,
            searched: false,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch.is_fetching()
    }

    /// Validate the filter form and, if it passes, search from page 1.
    pub fn submit(&mut self, ctx: &egui::Context) {
        let account = optional_account_id(&self.account_input);
        let card = validate_card_number(&self.card_input);

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

        let filter = CardFilter {
            account_id: account.unwrap_or_default(),
            card_number: card.unwrap_or_default(),
        };
        self.start_fetch(filter, 1, ctx);
    }

    /// Jump to a page of the last submitted search. Out-of-range pages and
    /// pages requested before any search are silent no-ops.
    pub fn go_to_page(&mut self, page: u32, ctx: &egui::Context) {
        if !self.pager.accepts(page) {
            debug!(page, "Ignoring out-of-range page request");
            return;
        }
        let Some(filter) = self.last_filter.clone() else {
            return;
        };
        self.start_fetch(filter, page, ctx);
    }

    pub fn next_page(&mut self, ctx: &egui::Context) {
        if self.pager.can_go_next() {
            self.go_to_page(self.pager.current_page() + 1, ctx);
        }
    }

    pub fn prev_page(&mut self, ctx: &egui::Context) {
        if self.pager.can_go_prev() {
            self.go_to_page(self.pager.current_page() - 1, ctx);
        }
    }

    /// Re-run the last submitted filter on the page it targeted.
    pub fn retry(&mut self, ctx: &egui::Context) {
        let Some(filter) = self.last_filter.clone() else {
            return;
        };
        let page = self.requested_page;
        self.start_fetch(filter, page, ctx);
    }

    fn start_fetch(&mut self, filter: CardFilter, page: u32, ctx: &egui::Context) {
        info!(
            account = %filter.account_id,
            card = %filter.card_number,
            page,
            "Searching cards"
        );
        self.phase = SearchPhase::Fetching;
        self.searched = true;
        self.requested_page = page;
        self.last_filter = Some(filter.clone());

        let ticket = self.fetch.begin();
        let slot = self.fetch.slot();
        let api = self.api.clone();
        let ctx = ctx.clone();
        self.handle.spawn(async move {
            let outcome = api.search_cards(&filter, page).await;
            slot.deliver(ticket, outcome);
            ctx.request_repaint();
        });
    }

    /// Absorb the newest fetch outcome, if one has landed. Called every
    /// frame. A fresh result set always arrives with an empty selection.
    pub fn poll(&mut self) {
        let Some(outcome) = self.fetch.poll() else {
            return;
        };
        match outcome {
            Ok(page) => {
                self.phase = SearchPhase::Success;
                self.error = None;
                self.pager
                    .apply(self.requested_page, page.total_pages, page.total_elements);
                debug!(
                    rows = page.number_of_elements,
                    page = self.pager.current_page(),
                    total = self.pager.total_elements(),
                    "Card search complete"
                );
                self.rows = page.content;
                self.selection.reset();
            }
            Err(e) => {
                // Keep the rows we had; the message is retryable.
                self.phase = SearchPhase::Error;
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn toggle_selection(&mut self, row: usize, tag: SelectionTag) {
        self.selection.toggle(row, tag);
    }

    /// Resolve the pending selection to the row it points at (lowest index
    /// wins). Returns nothing when no row is tagged.
    pub fn process_selection(&self) -> Option<(SelectionTag, CardRow)> {
        let (row, tag) = self.selection.first()?;
        let card = self.rows.get(row)?.clone();
        Some((tag, card))
    }

    pub fn clear_filters(&mut self) {
        self.account_input.clear();
        self.card_input.clear();
        self.account_error = None;
        self.card_error = None;
    }

    /// Hint shown in place of rows when the table is empty.
    pub fn empty_hint(&self) -> Option<&'static str> {
        if !self.rows.is_empty() || self.is_fetching() {
            return None;
        }
        if self.searched && self.phase == SearchPhase::Success {
            Some("No cards found for this search condition")
        } else if !self.searched {
            Some("Enter search criteria to list cards")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, DemoApi};
    use crate::types::{AccountSnapshot, CardDetail};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    fn demo_screen() -> CardListScreen {
        CardListScreen::new(
            Arc::new(DemoApi::with_latency(Duration::ZERO)),
            tokio::runtime::Handle::current(),
        )
    }

    async fn settle(screen: &mut CardListScreen) {
        for _ in 0..500 {
            tokio::time::sleep(Duration::from_millis(1)).await;
            screen.poll();
            if !screen.is_fetching() {
                return;
            }
        }
        panic!("fetch did not settle");
    }

    /// Delegates to the demo dataset after a per-call delay, so tests can
    /// make an earlier request resolve later than a newer one.
    struct SlowedApi {
        inner: DemoApi,
        delays_ms: Mutex<VecDeque<u64>>,
    }

    impl SlowedApi {
        fn new(delays_ms: &[u64]) -> Self {
            Self {
                inner: DemoApi::with_latency(Duration::ZERO),
                delays_ms: Mutex::new(delays_ms.iter().copied().collect()),
            }
        }

        async fn pause(&self) {
            let delay = self.delays_ms.lock().unwrap().pop_front().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
    }

    #[async_trait::async_trait]
    impl CardsApi for SlowedApi {
        async fn search_cards(&self, filter: &CardFilter, page: u32) -> ApiResult<CardPage> {
            self.pause().await;
            self.inner.search_cards(filter, page).await
        }

        async fn card_detail(&self, account_id: &str, card_number: &str) -> ApiResult<CardDetail> {
            self.inner.card_detail(account_id, card_number).await
        }

        async fn account_view(&self, account_id: &str) -> ApiResult<AccountSnapshot> {
            self.inner.account_view(account_id).await
        }
    }

    /// Fails every search until `healed`, then delegates to the demo data.
    struct FlakyApi {
        inner: DemoApi,
        healed: AtomicBool,
    }

    impl FlakyApi {
        fn new() -> Self {
            Self {
                inner: DemoApi::with_latency(Duration::ZERO),
                healed: AtomicBool::new(false),
            }
        }
    }

    #[async_trait::async_trait]
    impl CardsApi for FlakyApi {
        async fn search_cards(&self, filter: &CardFilter, page: u32) -> ApiResult<CardPage> {
            if self.healed.swap(true, Ordering::SeqCst) {
                self.inner.search_cards(filter, page).await
            } else {
                Err(ApiError::Connect("connection refused".to_string()))
            }
        }

        async fn card_detail(&self, account_id: &str, card_number: &str) -> ApiResult<CardDetail> {
            self.inner.card_detail(account_id, card_number).await
        }

        async fn account_view(&self, account_id: &str) -> ApiResult<AccountSnapshot> {
            self.inner.account_view(account_id).await
        }
    }

    #[tokio::test]
    async fn test_submit_end_to_end() {
        let mut screen = demo_screen();
        assert_eq!(screen.phase, SearchPhase::Idle);

        screen.account_input = "11111111111".to_string();
        screen.submit(&egui::Context::default());
        assert_eq!(screen.phase, SearchPhase::Fetching);
        assert!(screen.is_fetching());

        settle(&mut screen).await;
        assert_eq!(screen.phase, SearchPhase::Success);
        assert_eq!(screen.rows.len(), 1);
        assert_eq!(screen.rows[0].card_number, "4111111111111111");
        assert!(screen.selection.is_empty());
        assert_eq!(screen.pager.current_page(), 1);
    }

    #[tokio::test]
    async fn test_validation_failure_blocks_fetch() {
        let mut screen = demo_screen();
        screen.account_input = "123".to_string();
        screen.submit(&egui::Context::default());

        assert_eq!(screen.phase, SearchPhase::Invalid);
        assert_eq!(screen.account_error.as_deref(), Some("Account ID must be 11 digits"));
        assert!(!screen.is_fetching());
    }

    #[tokio::test]
    async fn test_card_filter_validation_message() {
        let mut screen = demo_screen();
        screen.card_input = "123".to_string();
        screen.submit(&egui::Context::default());
        assert_eq!(screen.card_error.as_deref(), Some("Card number must be 16 digits"));
        assert!(!screen.is_fetching());
    }

    #[tokio::test]
    async fn test_page_change_resets_selection() {
        let mut screen = demo_screen();
        let ctx = egui::Context::default();
        screen.submit(&ctx);
        settle(&mut screen).await;
        assert_eq!(screen.pager.total_pages(), 3);

        screen.toggle_selection(2, SelectionTag::View);
        assert_eq!(screen.selection.selected_count(), 1);

        screen.next_page(&ctx);
        settle(&mut screen).await;
        assert_eq!(screen.pager.current_page(), 2);
        assert!(screen.selection.is_empty());
    }

    #[tokio::test]
    async fn test_out_of_range_page_is_a_no_op() {
        let mut screen = demo_screen();
        let ctx = egui::Context::default();
        screen.submit(&ctx);
        settle(&mut screen).await;

        let rows_before = screen.rows.len();
        screen.go_to_page(5, &ctx);
        assert!(!screen.is_fetching());
        assert_eq!(screen.pager.current_page(), 1);
        assert_eq!(screen.rows.len(), rows_before);
    }

    #[tokio::test]
    async fn test_newer_search_wins_over_slower_older_one() {
        let mut screen = CardListScreen::new(
            Arc::new(SlowedApi::new(&[60, 5])),
            tokio::runtime::Handle::current(),
        );
        let ctx = egui::Context::default();

        // First search is slow, second is fast and newer
        screen.account_input = "12345678901".to_string();
        screen.submit(&ctx);
        screen.account_input = "11111111111".to_string();
        screen.submit(&ctx);

        // Wait out both completions, then keep polling a little longer so a
        // late stale delivery would have every chance to clobber state.
        tokio::time::sleep(Duration::from_millis(120)).await;
        for _ in 0..10 {
            screen.poll();
            tokio::time::sleep(Duration::from_millis(2)).await;
        }

        assert_eq!(screen.phase, SearchPhase::Success);
        assert_eq!(screen.rows.len(), 1);
        assert_eq!(screen.rows[0].account_number, "11111111111");
    }

    #[tokio::test]
    async fn test_transport_error_keeps_rows_and_retry_recovers() {
        let mut screen = CardListScreen::new(
            Arc::new(FlakyApi::new()),
            tokio::runtime::Handle::current(),
        );
        let ctx = egui::Context::default();

        screen.account_input = "12345678901".to_string();
        screen.submit(&ctx);
        settle(&mut screen).await;
        assert_eq!(screen.phase, SearchPhase::Error);
        assert!(screen.error.as_deref().unwrap().contains("connection refused"));
        assert!(screen.rows.is_empty());

        screen.retry(&ctx);
        settle(&mut screen).await;
        assert_eq!(screen.phase, SearchPhase::Success);
        assert_eq!(screen.rows.len(), 2);
        assert!(screen.error.is_none());
    }

    #[tokio::test]
    async fn test_process_selection_returns_lowest_tagged_row() {
        let mut screen = demo_screen();
        let ctx = egui::Context::default();
        screen.submit(&ctx);
        settle(&mut screen).await;

        screen.toggle_selection(3, SelectionTag::Update);
        screen.toggle_selection(1, SelectionTag::View);

        let (tag, card) = screen.process_selection().unwrap();
        assert_eq!(tag, SelectionTag::View);
        assert_eq!(card.card_number, screen.rows[1].card_number);
    }

    #[tokio::test]
    async fn test_empty_hints() {
        let mut screen = demo_screen();
        assert_eq!(screen.empty_hint(), Some("Enter search criteria to list cards"));

        let ctx = egui::Context::default();
        screen.account_input = "99999999999".to_string();
        screen.submit(&ctx);
        settle(&mut screen).await;
        assert_eq!(screen.phase, SearchPhase::Success);
        assert_eq!(screen.empty_hint(), Some("No cards found for this search condition"));
    }
}
