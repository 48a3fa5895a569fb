//! Centralized theme constants for the CardDemo workstation
//! Every color, size and style in the UI should reference these

use crate::types::CardStatus;
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x02, 0x06, 0x17); // slate-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x0f, 0x17, 0x2a); // slate-900
pub const BG_INPUT: Color32 = Color32::from_rgb(0x0b, 0x12, 0x22); // input field background
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b); // slate-800
pub const BG_HOVER: Color32 = Color32::from_rgb(0x0b, 0x1c, 0x2b); // sky-tinted hover
pub const BG_HOVER_SUBTLE: Color32 = Color32::from_rgb(0x16, 0x20, 0x33); // neutral hover

// =============================================================================
// COLORS - Accent (Sky)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x38, 0xbd, 0xf8); // sky-400
pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(0x7d, 0xd3, 0xfc); // sky-300

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0); // slate-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8); // slate-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x64, 0x74, 0x8b); // slate-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b); // slate-800, faint outline
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x33, 0x41, 0x55); // slate-700

// =============================================================================
// COLORS - Selection
// =============================================================================
pub const TABLE_ROW_SELECTED: Color32 = Color32::from_rgb(0x0d, 0x20, 0x33); // sky tint for marked rows

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80); // green-400
pub const STATUS_WARNING: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24); // amber-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xfb, 0x71, 0x85); // rose-400

// =============================================================================
// COLORS - Segmented toggle
// =============================================================================
pub const TOGGLE_SELECTED: Color32 = Color32::from_rgb(0x07, 0x59, 0x85); // sky-800
pub const TOGGLE_UNSELECTED: Color32 = BG_SURFACE;
pub const TOGGLE_GLOW: Color32 = Color32::from_rgb(0x03, 0x69, 0xa1); // sky-700

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x33, 0x41, 0x55); // slate-700
pub const BTN_ACCENT: Color32 = ACCENT;

// =============================================================================
// COLORS - Card status chips
// =============================================================================
pub fn status_colors(status: CardStatus) -> (Color32, Color32) {
    let text = match status {
        CardStatus::Active => STATUS_SUCCESS,
        CardStatus::Inactive => TEXT_MUTED,
        CardStatus::Blocked => STATUS_ERROR,
        CardStatus::Expired => STATUS_WARNING,
        CardStatus::Unknown => TEXT_DIM,
    };
    // Chip background is the text color at ~4% alpha
    (with_alpha(text, 10), text)
}

/// Credit score color: good, fair, poor.
pub fn fico_color(score: i32) -> Color32 {
    if score >= 750 {
        STATUS_SUCCESS
    } else if score >= 650 {
        STATUS_WARNING
    } else {
        STATUS_ERROR
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SECTION: f32 = 12.0;
pub const FONT_SMALL: f32 = 11.0;
pub const FONT_CAPTION: f32 = 10.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const SIDEBAR_WIDTH: f32 = 240.0;
pub const ROW_HEIGHT: f32 = 36.0;
pub const BADGE_WIDTH: f32 = 74.0;
pub const BADGE_HEIGHT: f32 = 22.0;
pub const CHECKBOX_SIZE: f32 = 16.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_SMALL: f32 = 2.0;
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_XS: f32 = 2.0;
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================

fn widget_state(
    bg: Color32,
    weak_bg: Color32,
    border: Option<Color32>,
    text: Color32,
    text_stroke: f32,
    expansion: f32,
) -> egui::style::WidgetVisuals {
    egui::style::WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: weak_bg,
        bg_stroke: border.map_or(egui::Stroke::NONE, |c| egui::Stroke::new(STROKE_DEFAULT, c)),
        fg_stroke: egui::Stroke::new(text_stroke, text),
        corner_radius: RADIUS_DEFAULT.into(),
        expansion,
    }
}

pub fn apply_visuals(ctx: &egui::Context) {
    let pressed = Color32::from_rgb(0x26, 0x33, 0x4a);

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_BASE;
    visuals.window_fill = Color32::from_rgb(0x13, 0x1d, 0x30); // slightly elevated for popups/menus
    visuals.extreme_bg_color = BG_BASE;
    visuals.faint_bg_color = BG_ELEVATED;
    visuals.hyperlink_color = ACCENT;
    visuals.selection = egui::style::Selection {
        bg_fill: Color32::from_rgb(0x2b, 0x36, 0x4a), // neutral text-highlight color
        stroke: egui::Stroke::NONE,
    };
    visuals.widgets = egui::style::Widgets {
        noninteractive: widget_state(
            BG_ELEVATED,
            BG_SURFACE,
            Some(BORDER_SUBTLE),
            TEXT_PRIMARY,
            STROKE_DEFAULT,
            0.0,
        ),
        inactive: widget_state(
            Color32::TRANSPARENT,
            BG_ELEVATED,
            Some(BORDER_SUBTLE),
            TEXT_SECONDARY,
            STROKE_DEFAULT,
            0.0,
        ),
        hovered: widget_state(
            BG_HOVER,
            Color32::from_rgb(0x22, 0x2e, 0x42),
            None,
            TEXT_PRIMARY,
            STROKE_MEDIUM,
            0.0,
        ),
        active: widget_state(pressed, pressed, None, TEXT_PRIMARY, STROKE_DEFAULT, -2.0),
        open: widget_state(
            BG_SURFACE,
            BG_ELEVATED,
            Some(BORDER_SUBTLE),
            TEXT_PRIMARY,
            STROKE_DEFAULT,
            0.0,
        ),
    };
    visuals.striped = false;
    visuals.slider_trailing_fill = false;
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);
    visuals.popup_shadow = egui::epaint::Shadow {
        offset: [0, 4],
        blur: 12,
        spread: 0,
        color: Color32::from_black_alpha(80),
    };
    visuals.window_stroke = egui::Stroke::new(STROKE_DEFAULT, Color32::from_rgb(0x22, 0x2e, 0x42));
    visuals.window_corner_radius = egui::CornerRadius::same(8);
    visuals.menu_corner_radius = egui::CornerRadius::same(8);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.menu_margin = egui::Margin::symmetric(6, 4);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.bar_inner_margin = 2.0;
        style.spacing.scroll.bar_outer_margin = 2.0;
        style.spacing.scroll.handle_min_length = 24.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Translucent container for form panels.
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(with_alpha(BG_ELEVATED, 150))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_BASE)
        .inner_margin(egui::Margin::same(0))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
}

pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgb(0x0a, 0x11, 0x20))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

/// Bordered panel for a labeled detail section.
pub fn section_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgb(0x0d, 0x14, 0x24))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Plain gray button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent sky button (for primary actions like Search)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    let dark_text = Color32::from_rgb(0x08, 0x2f, 0x49); // sky-950
    egui::Button::new(egui::RichText::new(text.into()).color(dark_text))
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

/// One icon-and-label row of a context menu. Returns true if clicked.
pub fn menu_item(ui: &mut egui::Ui, icon: &str, label: &str) -> bool {
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, 24.0), egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        ui.painter().rect_filled(rect, RADIUS_DEFAULT, BG_HOVER_SUBTLE);
    }
    ui.painter().text(
        rect.left_center() + egui::vec2(SPACING_MD, 0.0),
        egui::Align2::LEFT_CENTER,
        format!("{icon}  {label}"),
        egui::FontId::proportional(FONT_LABEL),
        TEXT_SECONDARY,
    );
    response.clicked()
}

/// Fix the context menu width at 1.5x its widest label.
pub fn set_menu_width(ui: &mut egui::Ui, labels: &[&str]) {
    let font = egui::FontId::proportional(FONT_LABEL);
    let widest = ui.fonts(|fonts| {
        labels
            .iter()
            .map(|label| {
                fonts
                    .layout_no_wrap((*label).to_owned(), font.clone(), TEXT_SECONDARY)
                    .rect
                    .width()
            })
            .fold(0.0_f32, f32::max)
    });
    let width = (widest + 2.0 * SPACING_MD) * 1.5;
    ui.set_min_width(width);
    ui.set_max_width(width);
}

/// Checkbox row that fills the available width. Returns true if toggled.
pub fn settings_checkbox(ui: &mut egui::Ui, checked: bool, label: &str, enabled: bool) -> bool {
    let desired = egui::vec2(ui.available_width(), 20.0);
    let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click());
    if enabled && response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let box_rect = egui::Rect::from_center_size(
        egui::pos2(rect.min.x + CHECKBOX_SIZE / 2.0, rect.center().y),
        egui::vec2(CHECKBOX_SIZE, CHECKBOX_SIZE),
    );
    let painter = ui.painter();
    let border = if checked { ACCENT } else { BORDER_DEFAULT };
    painter.rect_stroke(
        box_rect,
        3.0,
        egui::Stroke::new(STROKE_MEDIUM, border),
        egui::StrokeKind::Inside,
    );
    if checked {
        painter.rect_filled(box_rect.shrink(3.0), RADIUS_SMALL, ACCENT);
    }

    let text_color = if enabled { TEXT_PRIMARY } else { TEXT_DIM };
    painter.text(
        egui::pos2(box_rect.max.x + SPACING_MD, rect.center().y),
        egui::Align2::LEFT_CENTER,
        label,
        egui::FontId::proportional(FONT_BODY),
        text_color,
    );
    enabled && response.clicked()
}

/// Fill and draw rect for a custom-painted button, reflecting hover and press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    match (response.is_pointer_button_down_on(), response.hovered()) {
        (true, _) => (lighten(base_fill, 0.06), rect.shrink(1.5)),
        (false, true) => (lighten(base_fill, 0.12), rect),
        _ => (base_fill, rect),
    }
}

fn lighten(color: Color32, amount: f32) -> Color32 {
    let channel = |c: u8| c.saturating_add(((255 - c) as f32 * amount) as u8);
    Color32::from_rgb(channel(color.r()), channel(color.g()), channel(color.b()))
}

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

// =============================================================================
// HELPER - Segmented toggle (pill-style)
// =============================================================================

/// Two-option segmented toggle. Returns true if the selection changed.
/// `left_active` indicates whether the left option is currently selected.
pub fn segmented_toggle(
    ui: &mut egui::Ui,
    left_label: &str,
    right_label: &str,
    left_active: &mut bool,
) -> bool {
    let widths = [56.0, 64.0];
    let total: f32 = widths.iter().sum();
    let (rect, response) = ui.allocate_exact_size(egui::vec2(total, 28.0), egui::Sense::click());
    let painter = ui.painter();

    painter.rect_filled(rect, 6.0, TOGGLE_UNSELECTED);

    let split_x = rect.min.x + widths[0];
    let segments = [
        egui::Rect::from_min_max(rect.min, egui::pos2(split_x, rect.max.y)),
        egui::Rect::from_min_max(egui::pos2(split_x, rect.min.y), rect.max),
    ];
    let active_idx = if *left_active { 0 } else { 1 };

    // Highlight insets 2px from the container edge but only 1px against the divider
    let inset = |seg: egui::Rect, idx: usize| {
        let (pad_left, pad_right) = if idx == 0 { (2.0, 1.0) } else { (1.0, 2.0) };
        egui::Rect::from_min_max(
            egui::pos2(seg.min.x + pad_left, seg.min.y + 2.0),
            egui::pos2(seg.max.x - pad_right, seg.max.y - 2.0),
        )
    };
    let glow = inset(segments[active_idx], active_idx);
    painter.rect_filled(glow, 4.0, TOGGLE_GLOW);
    painter.rect_filled(glow.shrink(1.0), 3.0, TOGGLE_SELECTED);

    for (idx, (seg, label)) in segments.iter().zip([left_label, right_label]).enumerate() {
        let color = if idx == active_idx {
            TEXT_PRIMARY
        } else {
            TEXT_MUTED
        };
        painter.text(
            inset(*seg, idx).center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(FONT_SMALL),
            color,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    let mut changed = false;
    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let want_left = pos.x < split_x;
            if want_left != *left_active {
                *left_active = want_left;
                changed = true;
            }
        }
    }
    changed
}
