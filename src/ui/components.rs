//! Reusable UI components
//!
//! Standalone widgets shared by the screens: status chips, labeled
//! field rows, selection cells and function-key hints.

use crate::theme;
use crate::types::CardStatus;
use eframe::egui;

/// Render a card status badge
pub fn status_chip(ui: &mut egui::Ui, status: CardStatus) {
    let (bg, fg) = theme::status_colors(status);
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(theme::BADGE_WIDTH, theme::BADGE_HEIGHT),
        egui::Sense::hover(),
    );
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, theme::RADIUS_SMALL, bg);
        painter.rect_stroke(
            rect,
            theme::RADIUS_SMALL,
            egui::Stroke::new(1.0, fg.gamma_multiply(0.35)),
            egui::StrokeKind::Inside,
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            status.label(),
            egui::FontId::proportional(theme::FONT_CAPTION),
            fg,
        );
    }
}

/// One selection letter cell for the card table (S or U). Painted as a small
/// toggle button; `active` fills it with the accent.
pub fn selection_cell(ui: &mut egui::Ui, letter: char, active: bool) -> egui::Response {
    let size = egui::vec2(22.0, 22.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if ui.is_rect_visible(rect) {
        let base = if active {
            theme::TOGGLE_SELECTED
        } else {
            theme::BG_SURFACE
        };
        let (fill, draw_rect) = theme::button_visual(&response, base, rect);
        let painter = ui.painter();
        painter.rect_filled(draw_rect, theme::RADIUS_SMALL, fill);
        if active {
            painter.rect_stroke(
                draw_rect,
                theme::RADIUS_SMALL,
                egui::Stroke::new(1.0, theme::ACCENT),
                egui::StrokeKind::Inside,
            );
        }
        let color = if active {
            theme::TEXT_PRIMARY
        } else {
            theme::TEXT_DIM
        };
        painter.text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            letter,
            egui::FontId::proportional(theme::FONT_SMALL),
            color,
        );
    }
    response
}

/// One label/value line inside a detail section
pub fn field_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.add_sized(
            egui::vec2(150.0, 18.0),
            egui::Label::new(
                egui::RichText::new(label)
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
            ),
        );
        let shown = if value.trim().is_empty() { "-" } else { value };
        ui.label(
            egui::RichText::new(shown)
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_SECONDARY),
        );
    });
}

/// Section heading with a Phosphor icon
pub fn section_header(ui: &mut egui::Ui, icon: &str, title: &str) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(icon)
                .size(theme::FONT_HEADING)
                .color(theme::ACCENT),
        );
        ui.label(
            egui::RichText::new(title)
                .size(theme::FONT_SECTION)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
    });
}

/// One entry of the function key legend along the bottom of a screen
pub fn key_hint(ui: &mut egui::Ui, key: &str, label: &str) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        let galley = ui.painter().layout_no_wrap(
            key.to_string(),
            egui::FontId::monospace(theme::FONT_CAPTION),
            theme::TEXT_SECONDARY,
        );
        let pad = egui::vec2(6.0, 2.0);
        let (rect, _) = ui.allocate_exact_size(galley.size() + pad * 2.0, egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, theme::RADIUS_SMALL, theme::BG_SURFACE);
        ui.painter()
            .galley(rect.min + pad, galley, theme::TEXT_SECONDARY);
        ui.label(
            egui::RichText::new(label)
                .size(theme::FONT_CAPTION)
                .color(theme::TEXT_DIM),
        );
    });
}
