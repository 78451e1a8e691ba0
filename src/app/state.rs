//! Canonical search state

use crate::data::FilterSet;
use super::types::SearchMode;

/// The query, page, mode and filters the rendered result set belongs to.
/// Only the dispatch entry points write to it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub page: u32,
    pub mode: SearchMode,
    pub filters: FilterSet,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::with_mode(SearchMode::default())
    }
}

impl SearchState {
    pub fn with_mode(mode: SearchMode) -> Self {
        Self {
            query: String::new(),
            page: 1,
            mode,
            filters: FilterSet::default(),
        }
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }
}
