//! Shared context menu for card rows in the list screen

use super::selection::SelectionTag;
use super::App;
use crate::theme;
use crate::types::CardRow;
use eframe::egui;

pub(crate) struct RowAction {
    pub view_detail: bool,
}

impl App {
    pub(crate) fn card_context_menu(
        &mut self,
        ui: &mut egui::Ui,
        row_idx: usize,
        card: &CardRow,
    ) -> RowAction {
        let mut action = RowAction { view_detail: false };
        ui.spacing_mut().item_spacing.y = 2.0;
        let any_selected = !self.card_list.selection.is_empty();

        let labels = [
            format!("{}  View Card", egui_phosphor::regular::EYE),
            format!("{}  Select for View (S)", egui_phosphor::regular::CHECK_SQUARE),
            format!("{}  Select for Update (U)", egui_phosphor::regular::PENCIL_SIMPLE),
            format!("{}  Copy Account Number", egui_phosphor::regular::COPY),
            format!("{}  Copy Card Number", egui_phosphor::regular::CREDIT_CARD),
            format!("{}  Clear Selections", egui_phosphor::regular::X_SQUARE),
        ];
        let label_refs: Vec<&str> = labels.iter().map(|s| s.as_str()).collect();
        theme::set_menu_width(ui, &label_refs);

        if theme::menu_item(ui, egui_phosphor::regular::EYE, "View Card") {
            action.view_detail = true;
            ui.close_menu();
        }
        if theme::menu_item(ui, egui_phosphor::regular::CHECK_SQUARE, "Select for View (S)") {
            self.card_list.toggle_selection(row_idx, SelectionTag::View);
            ui.close_menu();
        }
        if theme::menu_item(ui, egui_phosphor::regular::PENCIL_SIMPLE, "Select for Update (U)") {
            self.card_list.toggle_selection(row_idx, SelectionTag::Update);
            ui.close_menu();
        }
        ui.separator();
        if theme::menu_item(ui, egui_phosphor::regular::COPY, "Copy Account Number") {
            ui.ctx().copy_text(card.account_number.clone());
            self.show_toast("Account number copied");
            ui.close_menu();
        }
        if theme::menu_item(ui, egui_phosphor::regular::CREDIT_CARD, "Copy Card Number") {
            ui.ctx().copy_text(card.card_number.clone());
            self.show_toast("Card number copied");
            ui.close_menu();
        }
        if any_selected {
            ui.separator();
            if theme::menu_item(ui, egui_phosphor::regular::X_SQUARE, "Clear Selections") {
                self.card_list.selection.reset();
                ui.close_menu();
            }
        }

        action
    }
}
