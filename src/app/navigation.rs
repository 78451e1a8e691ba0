//! Navigation logic for panes, result cards and overlays

use super::core::App;

const CARD_PAGE: usize = 5;

impl App {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.dismiss_suggestions();
        self.needs_redraw = true;
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
        self.dismiss_suggestions();
        self.needs_redraw = true;
    }

    pub fn next_card(&mut self) {
        if !self.cards.is_empty() {
            self.selected_card = (self.selected_card + 1).min(self.cards.len() - 1);
            self.needs_redraw = true;
        }
    }

    pub fn previous_card(&mut self) {
        self.selected_card = self.selected_card.saturating_sub(1);
        self.needs_redraw = true;
    }

    pub fn page_down_cards(&mut self) {
        if !self.cards.is_empty() {
            self.selected_card = (self.selected_card + CARD_PAGE).min(self.cards.len() - 1);
            self.needs_redraw = true;
        }
    }

    pub fn page_up_cards(&mut self) {
        self.selected_card = self.selected_card.saturating_sub(CARD_PAGE);
        self.needs_redraw = true;
    }

    /// "View details" for the selected card.
    pub fn open_details(&mut self) -> Option<String> {
        let id = self.selected_card_view()?.id.clone();
        self.show_details = true;
        self.needs_redraw = true;
        Some(id)
    }

    pub fn close_details(&mut self) {
        self.show_details = false;
        self.needs_redraw = true;
    }
}
