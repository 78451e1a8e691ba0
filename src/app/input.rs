use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::core::App;
use super::types::{Focus, SearchMode};

impl App {
    /// Returns `false` when the user asked to quit.
    pub fn handle_key_input(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return true;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return false,
                KeyCode::Char('t') => {
                    self.set_mode(self.state.mode.next());
                }
                _ => {}
            }
            return true;
        }

        if self.show_details {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace) {
                self.close_details();
            }
            return true;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                return true;
            }
            KeyCode::BackTab => {
                self.focus_previous();
                return true;
            }
            _ => {}
        }

        match self.focus {
            Focus::SearchInput => self.handle_input_key(key.code),
            Focus::Results => return self.handle_results_key(key.code),
            Focus::Filters => return self.handle_filters_key(key.code),
        }
        true
    }

    fn handle_input_key(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Char(ch) => {
                self.input.push(ch);
                self.on_input_changed(Instant::now());
            }
            KeyCode::Backspace => {
                if self.input.pop().is_some() {
                    self.on_input_changed(Instant::now());
                }
            }
            KeyCode::Enter => match self.suggestions.selected.filter(|_| self.suggestions.visible) {
                Some(index) => self.select_suggestion(index),
                None => {
                    self.submit_query();
                }
            },
            KeyCode::Down => {
                if self.suggestions.visible {
                    self.suggestions.next();
                    self.needs_redraw = true;
                } else if !self.cards.is_empty() {
                    self.focus = Focus::Results;
                    self.needs_redraw = true;
                }
            }
            KeyCode::Up => {
                self.suggestions.previous();
                self.needs_redraw = true;
            }
            KeyCode::Esc => self.dismiss_suggestions(),
            KeyCode::PageDown => {
                self.load_more();
            }
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key_code: KeyCode) -> bool {
        match key_code {
            KeyCode::Char('q') => return false,
            KeyCode::Up | KeyCode::Char('k') => self.previous_card(),
            KeyCode::Down | KeyCode::Char('j') => self.next_card(),
            KeyCode::PageUp => self.page_up_cards(),
            KeyCode::PageDown => self.page_down_cards(),
            KeyCode::Enter => {
                if let Some(id) = self.open_details() {
                    cli_log::info!("Viewing details for product {id}");
                }
            }
            KeyCode::Char('m') => {
                self.load_more();
            }
            KeyCode::Char('/') | KeyCode::Esc => {
                self.focus = Focus::SearchInput;
                self.needs_redraw = true;
            }
            KeyCode::Char(ch) => {
                if let Some(mode) = SearchMode::from_digit(ch) {
                    self.set_mode(mode);
                }
            }
            _ => {}
        }
        true
    }

    fn handle_filters_key(&mut self, key_code: KeyCode) -> bool {
        match key_code {
            KeyCode::Char('q') => return false,
            KeyCode::Up | KeyCode::Char('k') => self.filter_panel.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.filter_panel.move_cursor(1),
            KeyCode::Char(' ') | KeyCode::Enter => self.filter_panel.toggle_current(),
            KeyCode::Left | KeyCode::Char('h') => self.filter_panel.adjust_current(-1),
            KeyCode::Right | KeyCode::Char('l') => self.filter_panel.adjust_current(1),
            KeyCode::Char('a') => self.apply_filters(),
            KeyCode::Char('r') => self.reset_filters(),
            KeyCode::Char('/') | KeyCode::Esc => self.focus = Focus::SearchInput,
            KeyCode::Char(ch) => {
                if let Some(mode) = SearchMode::from_digit(ch) {
                    self.set_mode(mode);
                }
            }
            _ => {}
        }
        self.needs_redraw = true;
        true
    }

    /// Left clicks: pick a suggestion, focus the input, or dismiss the list
    /// when the click lands outside both.
    pub fn handle_mouse_input(&mut self, event: MouseEvent) {
        if !matches!(event.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        let position = Position::new(event.column, event.row);

        if let Some(area) = self.regions.suggestions.filter(|_| self.suggestions.visible) {
            if area.contains(position) {
                // First and last rows are the list border
                let row = position.y.saturating_sub(area.y) as usize;
                let rows = area.height.saturating_sub(2) as usize;
                if row >= 1 && row <= rows {
                    let index = self.regions.suggestion_offset + row - 1;
                    if index < self.suggestions.items.len() {
                        self.select_suggestion(index);
                    }
                }
                return;
            }
        }

        if self.regions.input.contains(position) {
            self.focus = Focus::SearchInput;
            self.needs_redraw = true;
        } else {
            self.dismiss_suggestions();
        }
    }
}
