//! Prefix completions shown under the search input

use std::time::Instant;

use cli_log::*;

use crate::config::MIN_SUGGEST_PREFIX;
use crate::error::SearchError;
use super::core::App;

#[derive(Debug, Default, Clone)]
pub struct SuggestionList {
    pub items: Vec<String>,
    pub visible: bool,
    pub selected: Option<usize>,
}

impl SuggestionList {
    /// Replace the list wholesale and show it.
    pub fn show(&mut self, items: Vec<String>) {
        self.items = items;
        self.visible = !self.items.is_empty();
        self.selected = None;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.selected = None;
    }

    pub fn next(&mut self) {
        if !self.visible || self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.items.len() => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn previous(&mut self) {
        self.selected = match self.selected {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }
}

impl App {
    /// Called after every edit of the input: restart the quiet-period timer.
    pub fn on_input_changed(&mut self, now: Instant) {
        self.debounce.schedule(self.input.trim().to_string(), now);
        self.needs_redraw = true;
    }

    pub fn fire_due_suggestions(&mut self, now: Instant) {
        if let Some(prefix) = self.debounce.poll(now) {
            debug!("Debounce elapsed for prefix '{prefix}'");
            self.suggest(&prefix);
        }
    }

    /// Fetch completions for `prefix`. Prefixes shorter than two characters only
    /// hide the list.
    pub fn suggest(&mut self, prefix: &str) {
        if prefix.chars().count() < MIN_SUGGEST_PREFIX {
            self.suggestion_requests.invalidate();
            self.suggestions.hide();
            self.needs_redraw = true;
            return;
        }

        let seq = self.suggestion_requests.issue();
        self.spawn_suggestions(seq, prefix.to_string());
    }

    pub fn apply_suggestions(&mut self, seq: u64, outcome: Result<Vec<String>, SearchError>) {
        if !self.suggestion_requests.is_latest(seq) {
            debug!("Dropping superseded suggestions #{seq}");
            return;
        }

        match outcome {
            Ok(items) if !items.is_empty() => self.suggestions.show(items),
            Ok(_) => self.suggestions.hide(),
            Err(e) => {
                warn!("Suggestion request failed: {e}");
                self.suggestions.hide();
            }
        }
        self.needs_redraw = true;
    }

    /// Put the chosen completion in the input and search for it.
    pub fn select_suggestion(&mut self, index: usize) {
        let Some(text) = self.suggestions.items.get(index).cloned() else { return };
        self.input = text.clone();
        self.close_suggestions();

        let filters = self.gather_filters();
        self.search(&text, 1, filters, self.state.mode);
    }

    /// Hide the list (click outside, Esc, focus change). Pending and in-flight
    /// fetches are dropped too, so the list stays closed. Search state is left
    /// alone.
    pub fn dismiss_suggestions(&mut self) {
        let was_visible = self.suggestions.visible;
        self.debounce.cancel();
        self.suggestion_requests.invalidate();
        self.suggestions.hide();
        if was_visible {
            self.needs_redraw = true;
        }
    }

    /// Hide the list and make sure nothing pending can reopen it.
    pub(crate) fn close_suggestions(&mut self) {
        self.debounce.cancel();
        self.suggestion_requests.invalidate();
        self.suggestions.hide();
        self.needs_redraw = true;
    }
}
