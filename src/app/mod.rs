//! Application state and the screen stack that drives it

pub mod account_view;
pub mod card_detail;
pub mod card_list;
mod context_menu;
pub mod fetch;
pub mod menu;
pub mod pager;
pub mod selection;
pub mod validate;

use crate::api::{build_client, CardsApi};
use crate::settings::Settings;
use crate::theme;
use account_view::AccountViewScreen;
use card_detail::CardDetailScreen;
use card_list::CardListScreen;
use eframe::egui;
use menu::{MenuScreen, MenuTarget};
use selection::SelectionTag;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

// ============================================================================
// APPLICATION STATE
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Menu,
    AccountView,
    CardList,
    CardDetail,
}

pub struct App {
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) api: Arc<dyn CardsApi>,

    // Screens
    pub(crate) screen: ScreenId,
    pub(crate) menu: MenuScreen,
    pub(crate) account_view: AccountViewScreen,
    pub(crate) card_list: CardListScreen,
    pub(crate) card_detail: CardDetailScreen,
    /// Where F3 from the detail screen returns to
    pub(crate) detail_origin: ScreenId,

    // Settings modal
    pub(crate) show_settings: bool,
    pub(crate) settings_draft: Settings,

    // Transient toast
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,

    // Last central panel rect, used to anchor the toast
    pub(crate) central_panel_rect: Option<egui::Rect>,

    // Window tracking
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// CONSTRUCTION & CROSS-SCREEN ACTIONS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Dark theme only
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Merge the Phosphor icon font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Install the palette and widget styles
        theme::apply_visuals(&cc.egui_ctx);

        let runtime = tokio::runtime::Runtime::new().expect("tokio runtime init");
        let api = build_client(&settings);
        let handle = runtime.handle().clone();

        Self {
            settings: settings.clone(),
            data_dir,
            api: api.clone(),
            screen: ScreenId::Menu,
            menu: MenuScreen::default(),
            account_view: AccountViewScreen::new(api.clone(), handle.clone()),
            card_list: CardListScreen::new(api.clone(), handle.clone()),
            card_detail: CardDetailScreen::new(api, handle),
            detail_origin: ScreenId::Menu,
            show_settings: false,
            settings_draft: settings,
            toast_message: None,
            toast_start: None,
            central_panel_rect: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            runtime,
        }
    }

    pub fn save_settings(&self) {
        let mut settings = self.settings.clone();
        settings.window_pos = self.window_pos.map(|p| (p.x, p.y));
        settings.window_size = self.window_size.map(|s| (s.x, s.y));
        settings.save(&self.data_dir);
    }

    /// Swap the backend client and rebuild the screens against it. Any
    /// on-screen data belongs to the old backend, so screen state resets.
    pub fn rebuild_backend(&mut self) {
        info!(
            offline = self.settings.offline_demo,
            base_url = %self.settings.api_base(),
            "Rebuilding backend client"
        );
        let api = build_client(&self.settings);
        let handle = self.runtime.handle().clone();
        self.api = api.clone();
        self.account_view = AccountViewScreen::new(api.clone(), handle.clone());
        self.card_list = CardListScreen::new(api.clone(), handle.clone());
        self.card_detail = CardDetailScreen::new(api, handle);
        self.screen = ScreenId::Menu;
        self.detail_origin = ScreenId::Menu;
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_start = Some(std::time::Instant::now());
    }

    /// Follow a menu option.
    pub fn open(&mut self, target: MenuTarget, label: &str) {
        match target {
            MenuTarget::AccountView => self.screen = ScreenId::AccountView,
            MenuTarget::CardList => self.screen = ScreenId::CardList,
            MenuTarget::CardDetail => {
                // Manual entry, nothing prefilled
                self.card_detail =
                    CardDetailScreen::new(self.api.clone(), self.runtime.handle().clone());
                self.detail_origin = ScreenId::Menu;
                self.screen = ScreenId::CardDetail;
            }
            MenuTarget::Unavailable => {
                self.show_toast(format!("{} is not yet available", label));
            }
        }
    }

    /// Open the detail screen for a chosen list row.
    pub fn open_detail_seeded(&mut self, account_id: &str, card_number: &str) {
        self.card_detail = CardDetailScreen::seeded(
            self.api.clone(),
            self.runtime.handle().clone(),
            account_id,
            card_number,
        );
        self.detail_origin = ScreenId::CardList;
        self.screen = ScreenId::CardDetail;
    }

    /// Act on the list screen's pending selection.
    pub fn process_list_selection(&mut self) {
        let Some((tag, card)) = self.card_list.process_selection() else {
            return;
        };
        match tag {
            SelectionTag::View => {
                self.open_detail_seeded(&card.account_number, &card.card_number);
            }
            SelectionTag::Update => {
                self.show_toast("Credit Card Update is not yet available");
            }
        }
    }

    /// The exit gesture: detail returns to wherever it was opened from,
    /// other screens return to the menu, the menu closes the app.
    pub fn exit_screen(&mut self, ctx: &egui::Context) {
        match self.screen {
            ScreenId::Menu => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            ScreenId::CardDetail => {
                self.screen = self.detail_origin;
            }
            _ => {
                self.screen = ScreenId::Menu;
            }
        }
    }

    /// Per-frame state work that is independent of rendering: consume the
    /// detail seed and absorb any landed fetch results.
    pub fn poll_screens(&mut self, ctx: &egui::Context) {
        self.card_detail.tick(ctx);
        self.account_view.poll();
        self.card_list.poll();
        self.card_detail.poll();
    }

    /// True while the active screen has a fetch outstanding.
    pub fn active_screen_busy(&self) -> bool {
        match self.screen {
            ScreenId::Menu => false,
            ScreenId::AccountView => self.account_view.is_fetching(),
            ScreenId::CardList => self.card_list.is_fetching(),
            ScreenId::CardDetail => self.card_detail.is_fetching(),
        }
    }
}
