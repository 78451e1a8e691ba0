//! Query dispatch: request building, pagination and applying results

use chrono::Local;
use cli_log::*;

use crate::api::SearchRequest;
use crate::config::PAGE_SIZE;
use crate::data::{FilterSet, ResultPage};
use crate::error::SearchError;
use crate::render::render_items;
use super::core::App;
use super::types::SearchMode;

impl App {
    /// Enter in the search input: search the trimmed input with the current
    /// filter selection, starting over at page 1.
    pub fn submit_query(&mut self) -> Option<u64> {
        let query = self.input.trim().to_string();
        if query.is_empty() {
            return None;
        }
        self.close_suggestions();
        let filters = self.gather_filters();
        self.search(&query, 1, filters, self.state.mode)
    }

    /// Issue one search call and update the canonical state. A blank query is
    /// ignored. Returns the request's sequence number.
    ///
    /// A page after the first is only fetched as the direct successor of the
    /// rendered pages of the same query, filters and mode; any other request
    /// starts over at page 1. `state.page` moves forward when the page arrives.
    pub fn search(&mut self, query: &str, page: u32, filters: FilterSet, mode: SearchMode) -> Option<u64> {
        if query.trim().is_empty() {
            return None;
        }
        let continues = page > 1
            && page == self.state.page + 1
            && !self.cards.is_empty()
            && query == self.state.query
            && mode == self.state.mode
            && filters == self.state.filters;
        if page > 1 && !continues {
            debug!("Page {page} does not follow the current results, searching page 1");
        }
        let page = if continues { page } else { 1 };

        if page == 1 {
            self.cards.clear();
            self.selected_card = 0;
            self.show_details = false;
            self.state.page = 1;
        }

        self.state.query = query.to_string();
        self.state.filters = filters;
        self.state.mode = mode;
        self.affordances.begin_request();
        self.last_failure = None;
        self.needs_redraw = true;

        let seq = self.search_requests.issue();
        let request = SearchRequest::new(&self.state.query, page, &self.state.filters, mode);
        info!(
            "Search #{seq}: '{}' mode={} page={} filters={:?}",
            request.query, mode, page, request.filters.labels()
        );
        self.spawn_search(seq, request);
        Some(seq)
    }

    /// Fetch the next page of the current query, appending to the results.
    /// Only available while the "load more" affordance is shown.
    pub fn load_more(&mut self) -> Option<u64> {
        if !self.affordances.load_more || !self.state.has_query() {
            return None;
        }
        let query = self.state.query.clone();
        let filters = self.state.filters.clone();
        self.search(&query, self.state.page + 1, filters, self.state.mode)
    }

    /// Switch the search mode; an active query is re-run from page 1.
    pub fn set_mode(&mut self, mode: SearchMode) -> Option<u64> {
        if mode == self.state.mode {
            return None;
        }
        self.needs_redraw = true;
        if !self.state.has_query() {
            self.state.mode = mode;
            return None;
        }
        let query = self.state.query.clone();
        let filters = self.state.filters.clone();
        self.search(&query, 1, filters, mode)
    }

    pub fn apply_search_result(&mut self, seq: u64, page: u32, outcome: Result<ResultPage, SearchError>) {
        if !self.search_requests.is_latest(seq) {
            debug!("Dropping superseded search reply #{seq}");
            return;
        }
        self.last_response_at = Some(Local::now());
        self.needs_redraw = true;

        let result = match outcome {
            Ok(result) => result,
            Err(e) => {
                warn!("Search #{seq} failed: {e}");
                self.affordances.show_failure();
                self.last_failure = Some(format!("Search failed ({})", e.kind()));
                return;
            }
        };

        if let Some(facets) = &result.facets {
            self.filter_panel.apply_facets(facets);
        }

        if result.items.is_empty() {
            info!("Search #{seq} returned no results");
            self.affordances.show_empty();
            return;
        }

        let full_page = result.items.len() == PAGE_SIZE;
        let cards = render_items(&result.items, &self.state.query);
        info!("Search #{seq} returned {} item(s) for page {page}", cards.len());
        if page == 1 {
            self.cards = cards;
        } else {
            self.cards.extend(cards);
        }
        self.state.page = page;
        self.affordances.show_page(full_page);
    }
}
