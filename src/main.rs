#![windows_subsystem = "windows"]
//! CardDemo Workstation - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod api;
mod app;
mod constants;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::menu::{MenuOption, MenuTarget};
use app::selection::SelectionTag;
use app::validate::sanitize_digits;
use app::{App, ScreenId};
use chrono::Local;
use constants::*;
use eframe::egui;
use tracing::info;
use types::CardStatus;
use ui::components;
use utils::{
    format_card_number, format_currency, format_date, format_ssn, get_data_dir, mask_card_number,
    mask_ssn,
};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "carddemo-workstation.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,carddemo_workstation=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "CardDemo workstation starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = settings.window_pos.map(|(x, y)| egui::pos2(x, y));
    let win_size = settings.window_size.map(|(w, h)| egui::vec2(w, h));

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1280.0, 800.0)))
        .with_min_inner_size([1080.0, 680.0])
        .with_title("CardDemo Workstation");

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "CardDemo Workstation",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Consume the pending detail seed and absorb landed fetch results
        self.poll_screens(ctx);

        // Function keys, terminal style: Enter submits, F3 backs out,
        // F7/F8 page through list results
        let mut submit = false;
        let mut exit = false;
        let mut page_prev = false;
        let mut page_next = false;
        if !self.show_settings {
            ctx.input(|i| {
                if i.key_pressed(egui::Key::F3) || i.key_pressed(egui::Key::Escape) {
                    exit = true;
                }
                if i.key_pressed(egui::Key::Enter) {
                    submit = true;
                }
                if i.key_pressed(egui::Key::F7) {
                    page_prev = true;
                }
                if i.key_pressed(egui::Key::F8) {
                    page_next = true;
                }
            });
        }

        if exit {
            self.exit_screen(ctx);
        }

        let busy = self.active_screen_busy();

        // A submit that lands while a fetch is outstanding is dropped here;
        // the newest fetch still wins if one was already started.
        if submit && !busy {
            match self.screen {
                ScreenId::Menu => {
                    if let Some(option) = self.menu.submit() {
                        self.open(option.target, option.label);
                    }
                }
                ScreenId::AccountView => self.account_view.submit(ctx),
                ScreenId::CardList => {
                    if self.card_list.selection.is_empty() {
                        self.card_list.submit(ctx);
                    } else {
                        self.process_list_selection();
                    }
                }
                ScreenId::CardDetail => self.card_detail.submit(ctx),
            }
        }

        // Paging keys only act on the list, and only while nothing is tagged
        if self.screen == ScreenId::CardList && self.card_list.selection.is_empty() && !busy {
            if page_prev {
                self.card_list.prev_page(ctx);
            }
            if page_next {
                self.card_list.next_page(ctx);
            }
        }

        if busy {
            // Keep the spinner animating between fetch completions
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        self.render_sidebar(ctx);
        self.render_key_bar(ctx);

        // Central panel - active screen (MUST be added LAST after all side/bottom panels)
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                // Store panel rect for toast positioning
                self.central_panel_rect = Some(ui.max_rect());

                match self.screen {
                    ScreenId::Menu => self.render_menu(ui),
                    ScreenId::AccountView => self.render_account_view(ui),
                    ScreenId::CardList => self.render_card_list(ui),
                    ScreenId::CardDetail => self.render_card_detail(ui),
                }
            });

        self.render_settings_modal(ctx);
        self.render_toast(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

// ============================================================================
// SHARED RENDER HELPERS
// ============================================================================

/// Screen title row with the legacy transaction/program codes right-aligned
fn screen_header(ui: &mut egui::Ui, title: &str, tran: &str, program: &str) {
    ui.horizontal(|ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new(title)
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!("Tran {}  Prog {}", tran, program))
                        .monospace()
                        .size(theme::FONT_CAPTION)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
        });
    });
}

/// Red banner for a screen-level error. Returns true when Retry was clicked.
fn error_banner(ui: &mut egui::Ui, message: &str, retryable: bool) -> bool {
    let mut retry = false;
    egui::Frame::new()
        .fill(egui::Color32::from_rgba_unmultiplied(0xf8, 0x71, 0x71, 16))
        .stroke(egui::Stroke::new(1.0, theme::STATUS_ERROR.gamma_multiply(0.5)))
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::WARNING_CIRCLE)
                        .size(theme::FONT_BODY)
                        .color(theme::STATUS_ERROR),
                );
                ui.label(
                    egui::RichText::new(message)
                        .size(theme::FONT_LABEL)
                        .color(theme::STATUS_ERROR),
                );
                if retryable {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(theme::button(format!(
                                "{}  Retry",
                                egui_phosphor::regular::ARROW_CLOCKWISE
                            )))
                            .clicked()
                        {
                            retry = true;
                        }
                    });
                }
            });
        });
    retry
}

/// Green banner for an informational backend message
fn info_banner(ui: &mut egui::Ui, message: &str) {
    egui::Frame::new()
        .fill(egui::Color32::from_rgba_unmultiplied(0x34, 0xd3, 0x99, 14))
        .stroke(egui::Stroke::new(1.0, theme::STATUS_SUCCESS.gamma_multiply(0.5)))
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::CHECK_CIRCLE)
                        .size(theme::FONT_BODY)
                        .color(theme::STATUS_SUCCESS),
                );
                ui.label(
                    egui::RichText::new(message)
                        .size(theme::FONT_LABEL)
                        .color(theme::STATUS_SUCCESS),
                );
            });
        });
}

/// One navigation row in the sidebar. Returns true if clicked.
fn sidebar_nav_item(ui: &mut egui::Ui, icon: &str, label: &str, active: bool) -> bool {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 34.0),
        egui::Sense::click(),
    );
    if active {
        ui.painter()
            .rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_HOVER);
        let bar = egui::Rect::from_min_size(rect.min, egui::vec2(3.0, rect.height()));
        ui.painter()
            .rect_filled(bar, theme::RADIUS_SMALL, theme::ACCENT);
    } else if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        ui.painter()
            .rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_HOVER_SUBTLE);
    }
    let color = if active {
        theme::TEXT_PRIMARY
    } else {
        theme::TEXT_MUTED
    };
    ui.painter().text(
        rect.left_center() + egui::vec2(12.0, 0.0),
        egui::Align2::LEFT_CENTER,
        format!("{}  {}", icon, label),
        egui::FontId::proportional(theme::FONT_BODY),
        color,
    );
    response.clicked()
}

// ============================================================================
// SIDEBAR & KEY BAR
// ============================================================================

impl App {
    fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("nav_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(theme::sidebar_frame())
            .show(ctx, |ui| {
                ui.add_space(18.0);
                ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(egui_phosphor::regular::CREDIT_CARD)
                                .size(30.0)
                                .color(theme::ACCENT),
                        )
                        .selectable(false),
                    );
                    ui.add_space(2.0);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("CARDDEMO WORKSTATION")
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                });
                ui.add_space(14.0);

                ui.scope(|ui| {
                    ui.spacing_mut().item_spacing.y = 2.0;
                    ui.add_space(0.0);
                    let entries = [
                        (egui_phosphor::regular::SQUARES_FOUR, "Main Menu", ScreenId::Menu),
                        (egui_phosphor::regular::BANK, "Account View", ScreenId::AccountView),
                        (egui_phosphor::regular::CREDIT_CARD, "Credit Card List", ScreenId::CardList),
                        (
                            egui_phosphor::regular::MAGNIFYING_GLASS,
                            "Credit Card View",
                            ScreenId::CardDetail,
                        ),
                    ];
                    for (icon, label, target) in entries {
                        if sidebar_nav_item(ui, icon, label, self.screen == target)
                            && self.screen != target
                        {
                            if target == ScreenId::CardDetail {
                                // Always a fresh manual lookup from the sidebar
                                self.open(MenuTarget::CardDetail, label);
                            } else {
                                self.screen = target;
                            }
                        }
                    }
                });

                // Backend indicator, settings and version pinned to the bottom
                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        ui.add_space(12.0);
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!("v{}", APP_VERSION))
                                    .size(theme::FONT_CAPTION)
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                    });
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.add_space(12.0);
                        if ui
                            .add(egui::Button::new(format!(
                                "{}  Settings",
                                egui_phosphor::regular::GEAR
                            )))
                            .clicked()
                        {
                            self.settings_draft = self.settings.clone();
                            self.show_settings = true;
                        }
                    });
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.add_space(12.0);
                        let (dot_color, text) = if self.settings.offline_demo {
                            (theme::STATUS_WARNING, "Built-in demo data".to_string())
                        } else {
                            (theme::STATUS_SUCCESS, self.settings.api_base())
                        };
                        let (dot_rect, _) = ui
                            .allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
                        ui.painter()
                            .circle_filled(dot_rect.center(), 3.0, dot_color);
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(text)
                                    .size(theme::FONT_CAPTION)
                                    .color(theme::TEXT_DIM),
                            )
                            .truncate()
                            .selectable(false),
                        );
                    });
                });
            });
    }

    fn render_key_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("key_bar")
            .exact_height(30.0)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.spacing_mut().item_spacing.x = 14.0;
                    match self.screen {
                        ScreenId::Menu => {
                            components::key_hint(ui, "Enter", "Select option");
                            components::key_hint(ui, "F3", "Exit");
                        }
                        ScreenId::AccountView => {
                            components::key_hint(ui, "Enter", "Search");
                            components::key_hint(ui, "F3", "Back to menu");
                        }
                        ScreenId::CardList => {
                            if self.card_list.selection.is_empty() {
                                components::key_hint(ui, "Enter", "Search");
                                components::key_hint(ui, "F7", "Page back");
                                components::key_hint(ui, "F8", "Page forward");
                            } else {
                                components::key_hint(ui, "Enter", "Process selection");
                            }
                            components::key_hint(ui, "F3", "Back to menu");
                        }
                        ScreenId::CardDetail => {
                            components::key_hint(ui, "Enter", "Search");
                            components::key_hint(ui, "F3", "Back");
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let now = Local::now();
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(
                                    now.format("%m/%d/%y  %H:%M:%S").to_string(),
                                )
                                .monospace()
                                .size(theme::FONT_CAPTION)
                                .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                        if self.active_screen_busy() {
                            ui.add(egui::Spinner::new().size(12.0).color(theme::ACCENT));
                        }
                    });
                });
                ctx.request_repaint_after(std::time::Duration::from_secs(1));
            });
    }
}

// ============================================================================
// MENU SCREEN
// ============================================================================

impl App {
    fn render_menu(&mut self, ui: &mut egui::Ui) {
        let catalog = self.menu.catalog();
        screen_header(ui, catalog.title, catalog.transaction_id, catalog.program_name);
        ui.add(
            egui::Label::new(
                egui::RichText::new(catalog.subtitle)
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_MD);

        let mut main_active = !self.menu.admin;
        if theme::segmented_toggle(ui, "Main", "Admin", &mut main_active) {
            self.menu.toggle_admin();
        }
        ui.add_space(theme::SPACING_MD);

        let mut chosen: Option<&'static MenuOption> = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.set_max_width(640.0);
            theme::card_frame().show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 2.0;
                for (idx, option) in catalog.options.iter().enumerate() {
                    let available = option.target != MenuTarget::Unavailable;
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(ui.available_width(), 44.0),
                        egui::Sense::click(),
                    );
                    if response.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        ui.painter()
                            .rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_HOVER_SUBTLE);
                    }
                    let painter = ui.painter();

                    let badge = egui::Rect::from_min_size(
                        egui::pos2(rect.min.x + 4.0, rect.center().y - 11.0),
                        egui::vec2(26.0, 22.0),
                    );
                    painter.rect_filled(badge, theme::RADIUS_SMALL, theme::BG_SURFACE);
                    painter.text(
                        badge.center(),
                        egui::Align2::CENTER_CENTER,
                        format!("{}", idx + 1),
                        egui::FontId::monospace(theme::FONT_SMALL),
                        if available { theme::ACCENT } else { theme::TEXT_DIM },
                    );

                    let text_x = badge.max.x + 10.0;
                    painter.text(
                        egui::pos2(text_x, rect.center().y - 8.0),
                        egui::Align2::LEFT_CENTER,
                        option.label,
                        egui::FontId::proportional(theme::FONT_BODY),
                        if available { theme::TEXT_PRIMARY } else { theme::TEXT_DIM },
                    );
                    painter.text(
                        egui::pos2(text_x, rect.center().y + 9.0),
                        egui::Align2::LEFT_CENTER,
                        option.description,
                        egui::FontId::proportional(theme::FONT_SMALL),
                        theme::TEXT_DIM,
                    );
                    if !available {
                        painter.text(
                            egui::pos2(rect.max.x - 8.0, rect.center().y),
                            egui::Align2::RIGHT_CENTER,
                            "Not yet available",
                            egui::FontId::proportional(theme::FONT_CAPTION),
                            theme::TEXT_DIM,
                        );
                    }

                    if response.clicked() {
                        chosen = self.menu.choose(idx);
                    }
                }
            });

            ui.add_space(theme::SPACING_MD);
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Option")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.menu.option_input)
                        .desired_width(48.0)
                        .char_limit(2)
                        .font(egui::FontId::monospace(14.0))
                        .hint_text("00"),
                );
                if response.changed() {
                    self.menu.option_input = sanitize_digits(&self.menu.option_input, 2);
                }
                if ui
                    .add(theme::button_accent(format!(
                        "{}  Go",
                        egui_phosphor::regular::ARROW_RIGHT
                    )))
                    .clicked()
                {
                    chosen = self.menu.submit();
                }
            });
            if let Some(error) = &self.menu.error {
                ui.add_space(theme::SPACING_XS);
                ui.label(
                    egui::RichText::new(error)
                        .size(theme::FONT_SMALL)
                        .color(theme::STATUS_ERROR),
                );
            }
        });

        if let Some(option) = chosen {
            self.open(option.target, option.label);
        }
    }
}

// ============================================================================
// ACCOUNT VIEW SCREEN
// ============================================================================

impl App {
    fn render_account_view(&mut self, ui: &mut egui::Ui) {
        screen_header(ui, "Account View", ACCOUNT_VIEW_TRAN, ACCOUNT_VIEW_PROGRAM);
        ui.add_space(theme::SPACING_MD);

        let ctx = ui.ctx().clone();
        let busy = self.account_view.is_fetching();

        theme::section_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Account ID")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.account_view.account_input)
                        .desired_width(140.0)
                        .char_limit(ACCOUNT_ID_LEN)
                        .font(egui::FontId::monospace(14.0))
                        .hint_text("11 digits"),
                );
                if response.changed() {
                    self.account_view.account_input =
                        sanitize_digits(&self.account_view.account_input, ACCOUNT_ID_LEN);
                }
                if ui
                    .add_enabled(
                        !busy,
                        theme::button_accent(format!(
                            "{}  Search",
                            egui_phosphor::regular::MAGNIFYING_GLASS
                        )),
                    )
                    .clicked()
                {
                    self.account_view.submit(&ctx);
                }
                if busy {
                    ui.add(egui::Spinner::new().size(16.0).color(theme::ACCENT));
                }
            });
            if let Some(error) = &self.account_view.field_error {
                ui.label(
                    egui::RichText::new(error)
                        .size(theme::FONT_SMALL)
                        .color(theme::STATUS_ERROR),
                );
            }
        });

        if let Some(error) = self.account_view.error.clone() {
            ui.add_space(theme::SPACING_SM);
            if error_banner(ui, &error, true) {
                self.account_view.retry(&ctx);
            }
        }
        if let Some(message) = self.account_view.info.clone() {
            ui.add_space(theme::SPACING_SM);
            info_banner(ui, &message);
        }

        let Some(snapshot) = self.account_view.snapshot.clone() else {
            if let Some(hint) = self.account_view.empty_hint() {
                ui.add_space(theme::SPACING_XL);
                ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(hint)
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                });
            }
            return;
        };

        ui.add_space(theme::SPACING_MD);
        ui.horizontal(|ui| {
            let show = self.account_view.show_sensitive;
            ui.set_max_width(240.0);
            if theme::settings_checkbox(ui, show, "Show sensitive data", true) {
                self.account_view.show_sensitive = !show;
            }
        });
        ui.add_space(theme::SPACING_SM);

        let show_sensitive = self.account_view.show_sensitive;
        egui::ScrollArea::vertical().show(ui, |ui| {
            render_account_sections(ui, &snapshot, show_sensitive);
        });
    }
}

/// The four detail sections of the account view. Pure rendering, masking
/// applied according to `show_sensitive`.
fn render_account_sections(
    ui: &mut egui::Ui,
    snapshot: &types::AccountSnapshot,
    show_sensitive: bool,
) {
    ui.columns(2, |cols| {
        theme::section_frame().show(&mut cols[0], |ui| {
            ui.set_min_height(160.0);
            components::section_header(ui, egui_phosphor::regular::BANK, "ACCOUNT");
            ui.add_space(theme::SPACING_SM);

            let active = snapshot.account_status.trim().eq_ignore_ascii_case("Y");
            ui.horizontal(|ui| {
                ui.add_sized(
                    egui::vec2(150.0, 18.0),
                    egui::Label::new(
                        egui::RichText::new("Status")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    ),
                );
                ui.label(
                    egui::RichText::new(if active { "ACTIVE" } else { "INACTIVE" })
                        .size(theme::FONT_LABEL)
                        .strong()
                        .color(if active {
                            theme::STATUS_SUCCESS
                        } else {
                            theme::STATUS_ERROR
                        }),
                );
            });
            components::field_row(ui, "Opened", &format_date(&snapshot.open_date));
            components::field_row(ui, "Expires", &format_date(&snapshot.expiration_date));
            components::field_row(ui, "Reissued", &format_date(&snapshot.reissue_date));
            components::field_row(ui, "Group", &snapshot.group_id);
            let card = if show_sensitive {
                format_card_number(&snapshot.card_number)
            } else {
                mask_card_number(&snapshot.card_number)
            };
            components::field_row(ui, "Card number", &card);
        });

        theme::section_frame().show(&mut cols[1], |ui| {
            ui.set_min_height(160.0);
            components::section_header(
                ui,
                egui_phosphor::regular::CURRENCY_DOLLAR,
                "BALANCES AND LIMITS",
            );
            ui.add_space(theme::SPACING_SM);
            components::field_row(ui, "Credit limit", &format_currency(&snapshot.credit_limit));
            components::field_row(
                ui,
                "Cash credit limit",
                &format_currency(&snapshot.cash_credit_limit),
            );
            components::field_row(
                ui,
                "Current balance",
                &format_currency(&snapshot.current_balance),
            );
            components::field_row(
                ui,
                "Cycle credit",
                &format_currency(&snapshot.current_cycle_credit),
            );
            components::field_row(
                ui,
                "Cycle debit",
                &format_currency(&snapshot.current_cycle_debit),
            );
        });
    });

    ui.add_space(theme::SPACING_SM);

    ui.columns(2, |cols| {
        theme::section_frame().show(&mut cols[0], |ui| {
            ui.set_min_height(190.0);
            components::section_header(ui, egui_phosphor::regular::USER, "CUSTOMER");
            ui.add_space(theme::SPACING_SM);
            components::field_row(ui, "Customer ID", &snapshot.customer_id);

            let name: Vec<&str> = [
                snapshot.first_name.as_str(),
                snapshot.middle_name.as_str(),
                snapshot.last_name.as_str(),
            ]
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .collect();
            components::field_row(ui, "Name", &name.join(" "));

            let ssn = if show_sensitive {
                format_ssn(&snapshot.customer_ssn)
            } else {
                mask_ssn(&snapshot.customer_ssn)
            };
            components::field_row(ui, "SSN", &ssn);
            let dob = if show_sensitive {
                format_date(&snapshot.date_of_birth)
            } else {
                "**/**/****".to_string()
            };
            components::field_row(ui, "Date of birth", &dob);
            let government_id = if show_sensitive {
                snapshot.government_id.clone()
            } else {
                "**********".to_string()
            };
            components::field_row(ui, "Government ID", &government_id);

            ui.horizontal(|ui| {
                ui.add_sized(
                    egui::vec2(150.0, 18.0),
                    egui::Label::new(
                        egui::RichText::new("FICO score")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    ),
                );
                ui.label(
                    egui::RichText::new(snapshot.fico_score.to_string())
                        .size(theme::FONT_LABEL)
                        .strong()
                        .color(theme::fico_color(snapshot.fico_score)),
                );
            });
            let primary = snapshot
                .primary_card_holder_flag
                .trim()
                .eq_ignore_ascii_case("Y");
            components::field_row(ui, "Primary holder", if primary { "Yes" } else { "No" });
        });

        theme::section_frame().show(&mut cols[1], |ui| {
            ui.set_min_height(190.0);
            components::section_header(ui, egui_phosphor::regular::MAP_PIN, "CONTACT");
            ui.add_space(theme::SPACING_SM);
            components::field_row(ui, "Phone 1", &snapshot.phone_number_1);
            components::field_row(ui, "Phone 2", &snapshot.phone_number_2);
            components::field_row(ui, "Address", &snapshot.address_line_1);
            components::field_row(ui, "Address 2", &snapshot.address_line_2);
            components::field_row(
                ui,
                "City / State",
                &format!("{} {}", snapshot.city, snapshot.state),
            );
            components::field_row(ui, "ZIP", &snapshot.zip_code);
            components::field_row(ui, "Country", &snapshot.country);
            components::field_row(ui, "EFT account", &snapshot.eft_account_id);
        });
    });
}

// ============================================================================
// CARD LIST SCREEN
// ============================================================================

impl App {
    fn render_card_list(&mut self, ui: &mut egui::Ui) {
        use egui_extras::{Column, TableBuilder};

        screen_header(ui, "Credit Card List", CARD_LIST_TRAN, CARD_LIST_PROGRAM);
        ui.add_space(theme::SPACING_MD);

        let ctx = ui.ctx().clone();
        let busy = self.card_list.is_fetching();

        // Filter form
        theme::section_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Account ID")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.card_list.account_input)
                        .desired_width(130.0)
                        .char_limit(ACCOUNT_ID_LEN)
                        .font(egui::FontId::monospace(14.0))
                        .hint_text("optional"),
                );
                if response.changed() {
                    self.card_list.account_input =
                        sanitize_digits(&self.card_list.account_input, ACCOUNT_ID_LEN);
                }
                ui.add_space(theme::SPACING_MD);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Card Number")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.card_list.card_input)
                        .desired_width(170.0)
                        .char_limit(CARD_NUMBER_LEN)
                        .font(egui::FontId::monospace(14.0))
                        .hint_text("optional"),
                );
                if response.changed() {
                    self.card_list.card_input =
                        sanitize_digits(&self.card_list.card_input, CARD_NUMBER_LEN);
                }
                ui.add_space(theme::SPACING_MD);
                if ui
                    .add_enabled(
                        !busy,
                        theme::button_accent(format!(
                            "{}  Search",
                            egui_phosphor::regular::MAGNIFYING_GLASS
                        )),
                    )
                    .clicked()
                {
                    self.card_list.submit(&ctx);
                }
                if ui.add(theme::button("Clear")).clicked() {
                    self.card_list.clear_filters();
                }
                if busy {
                    ui.add(egui::Spinner::new().size(16.0).color(theme::ACCENT));
                }
            });
            for error in [
                self.card_list.account_error.clone(),
                self.card_list.card_error.clone(),
            ]
            .into_iter()
            .flatten()
            {
                ui.label(
                    egui::RichText::new(error)
                        .size(theme::FONT_SMALL)
                        .color(theme::STATUS_ERROR),
                );
            }
        });

        if let Some(error) = self.card_list.error.clone() {
            ui.add_space(theme::SPACING_SM);
            if error_banner(ui, &error, true) {
                self.card_list.retry(&ctx);
            }
        }

        ui.add_space(theme::SPACING_MD);

        // Result table, always the full page height with blank filler rows
        let rows = self.card_list.rows.clone();
        let mut open_detail: Option<(String, String)> = None;

        let header_height = 28.0;
        let row_height = theme::ROW_HEIGHT;
        let full_rect = ui.available_rect_before_wrap();
        let header_rect = egui::Rect::from_min_size(
            full_rect.min,
            egui::vec2(full_rect.width(), header_height),
        );
        ui.painter()
            .rect_filled(header_rect, 0.0, theme::BG_ELEVATED);

        TableBuilder::new(ui)
            .striped(false)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .sense(egui::Sense::click())
            .column(Column::exact(34.0))
            .column(Column::exact(34.0))
            .column(Column::remainder().clip(true))
            .column(Column::remainder().clip(true))
            .column(Column::exact(110.0))
            .header(header_height, |mut header| {
                for title in ["S", "U"] {
                    header.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(title)
                                    .size(theme::FONT_SMALL)
                                    .strong()
                                    .color(theme::TEXT_MUTED),
                            )
                            .selectable(false),
                        );
                    });
                }
                for title in ["Account Number", "Card Number", "Status"] {
                    header.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(title)
                                    .size(theme::FONT_LABEL)
                                    .strong()
                                    .color(egui::Color32::WHITE),
                            )
                            .selectable(false),
                        );
                    });
                }
            })
            .body(|mut body| {
                body.ui_mut().visuals_mut().selection.bg_fill = theme::TABLE_ROW_SELECTED;

                body.rows(row_height, ROWS_PER_PAGE, |mut table_row| {
                    let row_idx = table_row.index();
                    let Some(card) = rows.get(row_idx).cloned() else {
                        // Filler row to keep the page shape constant
                        for _ in 0..5 {
                            table_row.col(|_ui| {});
                        }
                        return;
                    };

                    let tag = self.card_list.selection.tag(row_idx);
                    table_row.set_selected(tag.is_some());

                    for want in [SelectionTag::View, SelectionTag::Update] {
                        table_row.col(|ui| {
                            if components::selection_cell(ui, want.letter(), tag == Some(want))
                                .clicked()
                            {
                                self.card_list.toggle_selection(row_idx, want);
                            }
                        });
                    }
                    table_row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&card.account_number)
                                    .monospace()
                                    .size(theme::FONT_LABEL),
                            )
                            .truncate()
                            .selectable(false),
                        );
                    });
                    table_row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format_card_number(&card.card_number))
                                    .monospace()
                                    .size(theme::FONT_LABEL),
                            )
                            .truncate()
                            .selectable(false),
                        );
                    });
                    table_row.col(|ui| {
                        components::status_chip(ui, CardStatus::from_code(&card.card_status));
                    });

                    let response = table_row.response();
                    if response.hovered() {
                        ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
                    }
                    if response.double_clicked() {
                        open_detail =
                            Some((card.account_number.clone(), card.card_number.clone()));
                    }
                    response.context_menu(|ui| {
                        let action = self.card_context_menu(ui, row_idx, &card);
                        if action.view_detail {
                            open_detail =
                                Some((card.account_number.clone(), card.card_number.clone()));
                        }
                    });
                });
            });

        // Empty-state hint over the blank table
        if let Some(hint) = self.card_list.empty_hint() {
            ui.add_space(theme::SPACING_MD);
            ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(hint)
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
            });
        }

        ui.add_space(theme::SPACING_MD);

        // Pager bar
        ui.horizontal(|ui| {
            let pager = &self.card_list.pager;
            let can_prev = pager.can_go_prev() && !busy;
            let can_next = pager.can_go_next() && !busy;
            if ui
                .add_enabled(
                    can_prev,
                    theme::button(format!("{}  Prev", egui_phosphor::regular::CARET_LEFT)),
                )
                .clicked()
            {
                self.card_list.prev_page(&ctx);
            }
            if ui
                .add_enabled(
                    can_next,
                    theme::button(format!("Next  {}", egui_phosphor::regular::CARET_RIGHT)),
                )
                .clicked()
            {
                self.card_list.next_page(&ctx);
            }
            let pager = &self.card_list.pager;
            if pager.total_pages() > 0 {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!(
                            "Page {} of {}  •  {} cards",
                            pager.current_page(),
                            pager.total_pages(),
                            pager.total_elements()
                        ))
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let selected = self.card_list.selection.selected_count();
                if selected > 0 {
                    if ui
                        .add(theme::button_accent(format!(
                            "{}  Process Selection",
                            egui_phosphor::regular::ARROW_RIGHT
                        )))
                        .clicked()
                    {
                        self.process_list_selection();
                    }
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!("{} selected", selected))
                                .size(theme::FONT_LABEL)
                                .color(theme::ACCENT),
                        )
                        .selectable(false),
                    );
                }
            });
        });

        if let Some((account_id, card_number)) = open_detail {
            self.open_detail_seeded(&account_id, &card_number);
        }
    }
}

// ============================================================================
// CARD DETAIL SCREEN
// ============================================================================

impl App {
    fn render_card_detail(&mut self, ui: &mut egui::Ui) {
        screen_header(ui, "Credit Card View", CARD_DETAIL_TRAN, CARD_DETAIL_PROGRAM);
        ui.add_space(theme::SPACING_MD);

        let ctx = ui.ctx().clone();
        let busy = self.card_detail.is_fetching();
        let seeded = self.card_detail.from_list;

        theme::section_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Account ID")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
                let response = ui.add_enabled(
                    !seeded,
                    egui::TextEdit::singleline(&mut self.card_detail.account_input)
                        .desired_width(130.0)
                        .char_limit(ACCOUNT_ID_LEN)
                        .font(egui::FontId::monospace(14.0))
                        .hint_text("11 digits"),
                );
                if response.changed() {
                    self.card_detail.account_input =
                        sanitize_digits(&self.card_detail.account_input, ACCOUNT_ID_LEN);
                }
                ui.add_space(theme::SPACING_MD);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Card Number")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
                let response = ui.add_enabled(
                    !seeded,
                    egui::TextEdit::singleline(&mut self.card_detail.card_input)
                        .desired_width(170.0)
                        .char_limit(CARD_NUMBER_LEN)
                        .font(egui::FontId::monospace(14.0))
                        .hint_text("16 digits"),
                );
                if response.changed() {
                    self.card_detail.card_input =
                        sanitize_digits(&self.card_detail.card_input, CARD_NUMBER_LEN);
                }
                ui.add_space(theme::SPACING_MD);
                if ui
                    .add_enabled(
                        !busy,
                        theme::button_accent(format!(
                            "{}  Search",
                            egui_phosphor::regular::MAGNIFYING_GLASS
                        )),
                    )
                    .clicked()
                {
                    self.card_detail.submit(&ctx);
                }
                if busy {
                    ui.add(egui::Spinner::new().size(16.0).color(theme::ACCENT));
                }
            });
            for error in [
                self.card_detail.account_error.clone(),
                self.card_detail.card_error.clone(),
            ]
            .into_iter()
            .flatten()
            {
                ui.label(
                    egui::RichText::new(error)
                        .size(theme::FONT_SMALL)
                        .color(theme::STATUS_ERROR),
                );
            }
            if seeded {
                ui.label(
                    egui::RichText::new("Selected from the card list")
                        .size(theme::FONT_CAPTION)
                        .color(theme::TEXT_DIM),
                );
            }
        });

        if let Some(error) = self.card_detail.error.clone() {
            ui.add_space(theme::SPACING_SM);
            if error_banner(ui, &error, true) {
                self.card_detail.retry(&ctx);
            }
        }
        if let Some(message) = self.card_detail.info.clone() {
            ui.add_space(theme::SPACING_SM);
            info_banner(ui, &message);
        }

        let Some(detail) = self.card_detail.detail.clone() else {
            return;
        };
        let padded_account = self.card_detail.padded_account_id().unwrap_or_default();

        ui.add_space(theme::SPACING_MD);
        ui.set_max_width(460.0);
        theme::card_frame().show(ui, |ui| {
            ui.add_space(theme::SPACING_SM);
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(&detail.embossed_name)
                            .size(theme::FONT_HEADING)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    components::status_chip(ui, CardStatus::from_code(&detail.active_status));
                });
            });
            ui.add_space(theme::SPACING_SM);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format_card_number(&detail.card_number))
                        .monospace()
                        .size(theme::FONT_TITLE)
                        .color(theme::ACCENT_LIGHT),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_MD);
            components::field_row(ui, "Account ID", &padded_account);
            let expiry = if detail.expiry_month.is_empty() && detail.expiry_year.is_empty() {
                String::new()
            } else {
                format!("{:0>2}/{}", detail.expiry_month, detail.expiry_year)
            };
            components::field_row(ui, "Expires", &expiry);
            // The CVV is never displayed, only whether one is on file
            let cvv = if detail.cvv_code.is_empty() { "" } else { "***" };
            components::field_row(ui, "CVV", cvv);
        });
    }
}

// ============================================================================
// SETTINGS MODAL & TOAST
// ============================================================================

impl App {
    fn render_settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let mut apply = false;
        let modal_response = egui::Modal::new(egui::Id::new("settings_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(340.0);

                // Title bar with close button
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(egui::RichText::new("Settings").size(16.0).strong())
                            .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let close_size = 24.0;
                        let (rect, response) = ui.allocate_exact_size(
                            egui::vec2(close_size, close_size),
                            egui::Sense::click(),
                        );
                        let close_color = if response.hovered() {
                            ui.painter().rect_filled(rect, 4.0, theme::BG_SURFACE);
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                            theme::STATUS_ERROR
                        } else {
                            theme::TEXT_DIM
                        };
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            egui_phosphor::regular::X,
                            egui::FontId::proportional(16.0),
                            close_color,
                        );
                        if response.clicked() {
                            self.show_settings = false;
                        }
                    });
                });
                ui.add_space(4.0);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                // — Backend —
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Backend").size(13.0).color(theme::ACCENT),
                    )
                    .selectable(false),
                );
                ui.add_space(2.0);
                if theme::settings_checkbox(
                    ui,
                    self.settings_draft.offline_demo,
                    "Use built-in demo data",
                    true,
                ) {
                    self.settings_draft.offline_demo = !self.settings_draft.offline_demo;
                }
                ui.add_space(theme::SPACING_SM);

                ui.add_enabled_ui(!self.settings_draft.offline_demo, |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Base URL")
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_MUTED),
                        )
                        .selectable(false),
                    );
                    egui::Frame::new()
                        .fill(theme::BG_INPUT)
                        .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE))
                        .corner_radius(4.0)
                        .inner_margin(egui::Margin::symmetric(6, 4))
                        .show(ui, |ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.settings_draft.api_base_url)
                                    .frame(false)
                                    .desired_width(ui.available_width())
                                    .font(egui::FontId::proportional(13.0)),
                            );
                        });
                    ui.add_space(theme::SPACING_SM);
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new("Request timeout")
                                    .size(theme::FONT_SMALL)
                                    .color(theme::TEXT_MUTED),
                            )
                            .selectable(false),
                        );
                        ui.add(
                            egui::DragValue::new(&mut self.settings_draft.request_timeout_secs)
                                .range(5..=120)
                                .suffix(" s"),
                        );
                    });
                });

                ui.add_space(theme::SPACING_MD);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                ui.horizontal(|ui| {
                    if ui.add(theme::button_accent("Apply")).clicked() {
                        apply = true;
                    }
                    if ui.add(theme::button("Cancel")).clicked() {
                        self.show_settings = false;
                    }
                });
            });

        if apply {
            self.settings = self.settings_draft.clone();
            self.save_settings();
            self.rebuild_backend();
            self.show_settings = false;
            self.show_toast("Settings applied");
        }

        if modal_response.should_close() {
            self.show_settings = false;
        }
    }

    // Toast notification (bottom-right of central panel, 3s visible then fade, pause on hover)
    fn render_toast(&mut self, ctx: &egui::Context) {
        if let (Some(msg), Some(panel_rect)) = (self.toast_message.clone(), self.central_panel_rect)
        {
            let visible_duration = 3.0;
            let fade_duration = 0.5;
            let total_duration = visible_duration + fade_duration;
            let margin = 12.0;

            let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);

            let response = egui::Area::new(egui::Id::new("notice_toast"))
                .fixed_pos(toast_pos)
                .pivot(egui::Align2::RIGHT_BOTTOM)
                .show(ctx, |ui| {
                    let elapsed = self
                        .toast_start
                        .map(|t| t.elapsed().as_secs_f32())
                        .unwrap_or(0.0);
                    let alpha = if elapsed > visible_duration {
                        (total_duration - elapsed) / fade_duration
                    } else {
                        1.0
                    };

                    egui::Frame::new()
                        .fill(egui::Color32::from_rgba_unmultiplied(
                            0x1a,
                            0x1a,
                            0x1e,
                            (230.0 * alpha) as u8,
                        ))
                        .stroke(egui::Stroke::new(
                            1.0,
                            egui::Color32::from_rgba_unmultiplied(
                                theme::ACCENT.r(),
                                theme::ACCENT.g(),
                                theme::ACCENT.b(),
                                (100.0 * alpha) as u8,
                            ),
                        ))
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(16, 10))
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new(&msg).color(
                                egui::Color32::from_rgba_unmultiplied(
                                    255,
                                    255,
                                    255,
                                    (255.0 * alpha) as u8,
                                ),
                            ));
                        });
                });

            // Pause timer while hovering
            if response.response.hovered() {
                self.toast_start = Some(std::time::Instant::now());
            }

            let elapsed = self
                .toast_start
                .map(|t| t.elapsed().as_secs_f32())
                .unwrap_or(0.0);
            if elapsed >= total_duration {
                self.toast_message = None;
                self.toast_start = None;
            } else {
                ctx.request_repaint();
            }
        }
    }
}
