//! Type definitions for the application

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Retrieval strategy requested from the search service.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, EnumIter, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Keyword,
    Semantic,
    #[default]
    Hybrid,
}

impl SearchMode {
    /// Get the next mode, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Keyword => Self::Semantic,
            Self::Semantic => Self::Hybrid,
            Self::Hybrid => Self::Keyword,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Keyword => "Keyword",
            Self::Semantic => "Semantic",
            Self::Hybrid => "Hybrid",
        }
    }

    /// Mode bound to the number keys 1-3.
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Self::Keyword),
            '2' => Some(Self::Semantic),
            '3' => Some(Self::Hybrid),
            _ => None,
        }
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    #[default]
    SearchInput,
    Results,
    Filters,
}

impl Focus {
    /// Get the next pane in tab order.
    pub fn next(self) -> Self {
        match self {
            Self::SearchInput => Self::Results,
            Self::Results => Self::Filters,
            Self::Filters => Self::SearchInput,
        }
    }

    /// Get the previous pane in tab order.
    pub fn previous(self) -> Self {
        match self {
            Self::SearchInput => Self::Filters,
            Self::Results => Self::SearchInput,
            Self::Filters => Self::Results,
        }
    }
}

/// Visibility of the result-area affordances.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub loading: bool,
    pub results_visible: bool,
    pub no_results: bool,
    pub load_more: bool,
}

impl Affordances {
    /// State shown while a search is in flight.
    pub fn begin_request(&mut self) {
        *self = Self { loading: true, ..Self::default() };
    }

    pub fn show_page(&mut self, load_more: bool) {
        *self = Self { results_visible: true, load_more, ..Self::default() };
    }

    pub fn show_empty(&mut self) {
        *self = Self { results_visible: true, no_results: true, ..Self::default() };
    }

    /// Failures degrade to the "no results" state.
    pub fn show_failure(&mut self) {
        *self = Self { no_results: true, ..Self::default() };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn modes_use_lowercase_wire_names() {
        let modes: Vec<SearchMode> = SearchMode::iter().collect();
        let names: Vec<&str> = modes.iter().map(|mode| mode.as_ref()).collect();
        assert_eq!(names, vec!["keyword", "semantic", "hybrid"]);
        assert_eq!(SearchMode::from_str("Semantic").unwrap(), SearchMode::Semantic);
        assert!(SearchMode::from_str("fuzzy").is_err());
        assert_eq!(SearchMode::default(), SearchMode::Hybrid);
    }

    #[test]
    fn mode_cycle_visits_every_mode() {
        let mut mode = SearchMode::Keyword;
        for expected in [SearchMode::Semantic, SearchMode::Hybrid, SearchMode::Keyword] {
            mode = mode.next();
            assert_eq!(mode, expected);
        }
    }

    #[test]
    fn begin_request_hides_everything_but_loading() {
        let mut affordances = Affordances::default();
        affordances.show_page(true);
        affordances.begin_request();
        assert_eq!(affordances, Affordances { loading: true, ..Affordances::default() });
    }

    #[test]
    fn failure_clears_loading() {
        let mut affordances = Affordances::default();
        affordances.begin_request();
        affordances.show_failure();
        assert!(!affordances.loading);
        assert!(affordances.no_results);
        assert!(!affordances.load_more);
    }
}
