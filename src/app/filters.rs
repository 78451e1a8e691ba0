//! Filter selection: checkbox groups, rating sliders and re-querying

use strum::{EnumIter, IntoEnumIterator};

use crate::config::{RATING_MAX, RATING_MIN, RATING_STEP};
use crate::data::{FacetCounts, FilterCatalog, FilterSet};
use super::core::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum FilterKind {
    Category,
    Brand,
    Manufacturer,
}

impl FilterKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Category => "Categories",
            Self::Brand => "Brands",
            Self::Manufacturer => "Manufacturers",
        }
    }

    /// Key of this group in the facet map of a search response.
    pub fn facet_name(self) -> &'static str {
        match self {
            Self::Category => "categories",
            Self::Brand => "brands",
            Self::Manufacturer => "manufacturers",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub value: String,
    pub checked: bool,
    pub count: Option<u64>,
}

impl FilterOption {
    fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), checked: false, count: None }
    }
}

#[derive(Debug, Clone)]
pub struct FilterGroup {
    pub kind: FilterKind,
    pub options: Vec<FilterOption>,
}

/// A selectable line of the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRow {
    Choice { group: usize, index: usize },
    MinRating,
    MaxRating,
}

/// The filter controls as the user sees them. Checked state lives here until
/// it is gathered into a fresh [`FilterSet`].
#[derive(Debug, Clone)]
pub struct FilterPanel {
    pub groups: Vec<FilterGroup>,
    pub min_rating: f64,
    pub max_rating: f64,
    pub cursor: usize,
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::from_catalog(&FilterCatalog::default())
    }
}

impl FilterPanel {
    pub fn from_catalog(catalog: &FilterCatalog) -> Self {
        let groups = FilterKind::iter()
            .map(|kind| {
                let values = match kind {
                    FilterKind::Category => &catalog.categories,
                    FilterKind::Brand => &catalog.brands,
                    FilterKind::Manufacturer => &catalog.manufacturers,
                };
                let mut options: Vec<FilterOption> = Vec::with_capacity(values.len());
                for value in values {
                    let value = value.trim();
                    if !value.is_empty() && !options.iter().any(|o| o.value == value) {
                        options.push(FilterOption::new(value));
                    }
                }
                FilterGroup { kind, options }
            })
            .collect();

        Self {
            groups,
            min_rating: RATING_MIN,
            max_rating: RATING_MAX,
            cursor: 0,
        }
    }

    pub fn group(&self, kind: FilterKind) -> &FilterGroup {
        self.groups
            .iter()
            .find(|group| group.kind == kind)
            .unwrap_or(&self.groups[0])
    }

    fn group_mut(&mut self, kind: FilterKind) -> Option<&mut FilterGroup> {
        self.groups.iter_mut().find(|group| group.kind == kind)
    }

    /// Check or uncheck `value`, adding it as an option when it is not listed yet.
    pub fn set_checked(&mut self, kind: FilterKind, value: &str, checked: bool) {
        let Some(group) = self.group_mut(kind) else { return };
        match group.options.iter_mut().find(|option| option.value == value) {
            Some(option) => option.checked = checked,
            None => group.options.push(FilterOption { checked, ..FilterOption::new(value) }),
        }
    }

    pub fn set_min_rating(&mut self, value: f64) {
        self.min_rating = value.clamp(RATING_MIN, self.max_rating);
    }

    pub fn set_max_rating(&mut self, value: f64) {
        self.max_rating = value.clamp(self.min_rating, RATING_MAX);
    }

    /// Read the current selection into a new [`FilterSet`].
    pub fn gather(&self) -> FilterSet {
        let checked = |kind: FilterKind| {
            self.group(kind)
                .options
                .iter()
                .filter(|option| option.checked)
                .map(|option| option.value.clone())
                .collect()
        };

        FilterSet {
            categories: checked(FilterKind::Category),
            brands: checked(FilterKind::Brand),
            manufacturers: checked(FilterKind::Manufacturer),
            min_rating: self.min_rating,
            max_rating: self.max_rating,
        }
    }

    /// Uncheck everything and reopen the rating range to [0, 5].
    pub fn reset(&mut self) {
        for option in self.groups.iter_mut().flat_map(|group| group.options.iter_mut()) {
            option.checked = false;
        }
        self.min_rating = RATING_MIN;
        self.max_rating = RATING_MAX;
    }

    /// Show facet counts next to the options. Facet keys that are not options
    /// yet are appended; listed options absent from a reported facet count 0.
    pub fn apply_facets(&mut self, facets: &FacetCounts) {
        for group in &mut self.groups {
            let Some(buckets) = facets.get(group.kind.facet_name()) else { continue };

            for option in &mut group.options {
                option.count = Some(
                    buckets
                        .iter()
                        .find(|bucket| bucket.key == option.value)
                        .map_or(0, |bucket| bucket.doc_count),
                );
            }
            for bucket in buckets {
                let key = bucket.key.trim();
                if !key.is_empty() && !group.options.iter().any(|option| option.value == key) {
                    group.options.push(FilterOption {
                        count: Some(bucket.doc_count),
                        ..FilterOption::new(key)
                    });
                }
            }
        }
    }

    pub fn checked_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|group| &group.options)
            .filter(|option| option.checked)
            .count()
    }

    pub fn rows(&self) -> Vec<FilterRow> {
        let mut rows: Vec<FilterRow> = self
            .groups
            .iter()
            .enumerate()
            .flat_map(|(group, g)| (0..g.options.len()).map(move |index| FilterRow::Choice { group, index }))
            .collect();
        rows.push(FilterRow::MinRating);
        rows.push(FilterRow::MaxRating);
        rows
    }

    pub fn current_row(&self) -> FilterRow {
        let rows = self.rows();
        rows.get(self.cursor).copied().unwrap_or(FilterRow::MaxRating)
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let last = self.rows().len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    /// Space/Enter on the current row.
    pub fn toggle_current(&mut self) {
        if let FilterRow::Choice { group, index } = self.current_row() {
            if let Some(option) = self.groups[group].options.get_mut(index) {
                option.checked = !option.checked;
            }
        }
    }

    /// Left/Right on the current row moves a rating slider by whole steps.
    pub fn adjust_current(&mut self, steps: i32) {
        let delta = f64::from(steps) * RATING_STEP;
        match self.current_row() {
            FilterRow::MinRating => self.set_min_rating(self.min_rating + delta),
            FilterRow::MaxRating => self.set_max_rating(self.max_rating + delta),
            FilterRow::Choice { .. } => {}
        }
    }
}

impl App {
    pub fn gather_filters(&self) -> FilterSet {
        self.filter_panel.gather()
    }

    /// Clear the panel and the applied filters; re-run the active query, if any.
    pub fn reset_filters(&mut self) {
        self.filter_panel.reset();
        self.state.filters = FilterSet::default();
        self.needs_redraw = true;

        if self.state.has_query() {
            let query = self.state.query.clone();
            self.search(&query, 1, FilterSet::default(), self.state.mode);
        }
    }

    /// Re-run the active query with the current panel selection.
    pub fn apply_filters(&mut self) {
        let filters = self.gather_filters();
        if self.state.has_query() {
            let query = self.state.query.clone();
            self.search(&query, 1, filters, self.state.mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FacetBucket;
    use std::collections::BTreeSet;

    fn catalog() -> FilterCatalog {
        FilterCatalog {
            categories: vec!["Electronics".into(), "Tablets".into(), "Electronics".into()],
            brands: vec!["Amazon".into(), " ".into()],
            manufacturers: vec!["Amazon Digital Services".into()],
        }
    }

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn catalog_options_are_deduplicated() {
        let panel = FilterPanel::from_catalog(&catalog());
        assert_eq!(panel.group(FilterKind::Category).options.len(), 2);
        assert_eq!(panel.group(FilterKind::Brand).options.len(), 1);
    }

    #[test]
    fn gather_matches_checked_options_exactly() {
        let mut panel = FilterPanel::from_catalog(&catalog());
        panel.set_checked(FilterKind::Category, "Tablets", true);
        panel.set_checked(FilterKind::Brand, "Amazon", true);
        panel.set_checked(FilterKind::Brand, "Amazon", false);
        panel.set_checked(FilterKind::Manufacturer, "Amazon Digital Services", true);

        let filters = panel.gather();
        assert_eq!(filters.categories, set(&["Tablets"]));
        assert!(filters.brands.is_empty());
        assert_eq!(filters.manufacturers, set(&["Amazon Digital Services"]));
        assert_eq!(panel.checked_count(), 2);
    }

    #[test]
    fn gather_returns_a_fresh_set() {
        let mut panel = FilterPanel::from_catalog(&catalog());
        panel.set_checked(FilterKind::Category, "Electronics", true);
        let before = panel.gather();
        panel.set_checked(FilterKind::Category, "Electronics", false);
        assert_eq!(before.categories, set(&["Electronics"]));
        assert!(panel.gather().categories.is_empty());
    }

    #[test]
    fn reset_then_gather_is_default() {
        let mut panel = FilterPanel::from_catalog(&catalog());
        panel.set_checked(FilterKind::Category, "Electronics", true);
        panel.set_min_rating(2.0);
        panel.set_max_rating(4.0);
        panel.reset();
        assert_eq!(panel.gather(), FilterSet::default());
    }

    #[test]
    fn rating_bounds_never_cross() {
        let mut panel = FilterPanel::default();
        panel.set_max_rating(3.0);
        panel.set_min_rating(4.5);
        assert_eq!((panel.min_rating, panel.max_rating), (3.0, 3.0));
        panel.set_max_rating(1.0);
        assert_eq!(panel.max_rating, 3.0);
        panel.set_max_rating(9.0);
        panel.set_min_rating(-1.0);
        assert_eq!((panel.min_rating, panel.max_rating), (0.0, 5.0));
    }

    #[test]
    fn cursor_walks_options_then_sliders() {
        let mut panel = FilterPanel::from_catalog(&catalog());
        assert_eq!(panel.rows().len(), 6);
        panel.toggle_current();
        assert_eq!(panel.gather().categories, set(&["Electronics"]));

        panel.move_cursor(100);
        assert_eq!(panel.current_row(), FilterRow::MaxRating);
        panel.adjust_current(-2);
        assert_eq!(panel.max_rating, 4.0);

        panel.move_cursor(-1);
        assert_eq!(panel.current_row(), FilterRow::MinRating);
        panel.adjust_current(3);
        assert_eq!(panel.min_rating, 1.5);

        panel.move_cursor(-100);
        assert_eq!(panel.cursor, 0);
    }

    #[test]
    fn facets_update_counts_and_add_options() {
        let mut panel = FilterPanel::from_catalog(&catalog());
        let mut facets = FacetCounts::new();
        facets.insert(
            "categories".to_string(),
            vec![
                FacetBucket { key: "Electronics".to_string(), doc_count: 12 },
                FacetBucket { key: "Kindle Store".to_string(), doc_count: 3 },
            ],
        );

        panel.apply_facets(&facets);
        let categories = &panel.group(FilterKind::Category).options;
        assert_eq!(categories[0].count, Some(12));
        assert_eq!(categories[1].count, Some(0));
        assert_eq!(categories[2].value, "Kindle Store");
        assert_eq!(categories[2].count, Some(3));
        assert_eq!(panel.group(FilterKind::Brand).options[0].count, None);
    }
}
