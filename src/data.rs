use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::{RATING_MAX, RATING_MIN};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Review {
    pub title: Option<String>,
    pub text: Option<String>,
    pub rating: Option<f64>,
    pub username: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultItem {
    pub id: String,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub manufacturer: Option<String>,
    pub categories: Vec<String>,
    pub reviews: Vec<Review>,
}

impl ResultItem {
    /// Average over reviews that carry a rating, with the number of such reviews.
    /// Returns `(0.0, 0)` when nothing is rated.
    pub fn rating_summary(&self) -> (f64, usize) {
        let (sum, count) = self
            .reviews
            .iter()
            .filter_map(|review| review.rating)
            .fold((0.0, 0usize), |(sum, count), rating| (sum + rating, count + 1));

        if count == 0 {
            (0.0, 0)
        } else {
            (sum / count as f64, count)
        }
    }

    pub fn first_review(&self) -> Option<&Review> {
        self.reviews.first()
    }
}

/// One page of search results as returned by the backend.
#[derive(Debug, Clone, Default)]
pub struct ResultPage {
    pub items: Vec<ResultItem>,
    pub facets: Option<FacetCounts>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetBucket {
    pub key: String,
    pub doc_count: u64,
}

/// Facet name ("brands", "categories", ...) to its buckets.
pub type FacetCounts = BTreeMap<String, Vec<FacetBucket>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSet {
    pub categories: BTreeSet<String>,
    pub brands: BTreeSet<String>,
    pub manufacturers: BTreeSet<String>,
    pub min_rating: f64,
    pub max_rating: f64,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            categories: BTreeSet::new(),
            brands: BTreeSet::new(),
            manufacturers: BTreeSet::new(),
            min_rating: RATING_MIN,
            max_rating: RATING_MAX,
        }
    }
}

impl FilterSet {
    /// True when the rating bounds narrow the full [0, 5] range.
    pub fn has_rating_bounds(&self) -> bool {
        self.min_rating > RATING_MIN || self.max_rating < RATING_MAX
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.brands.is_empty()
            && self.manufacturers.is_empty()
            && !self.has_rating_bounds()
    }

    /// Badge labels for the active filters, in display order.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .categories
            .iter()
            .chain(&self.brands)
            .chain(&self.manufacturers)
            .cloned()
            .collect();
        if self.has_rating_bounds() {
            labels.push(format!("★ {}-{}", self.min_rating, self.max_rating));
        }
        labels
    }
}

/// Selectable filter values shown in the filter panel.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterCatalog {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub manufacturers: Vec<String>,
}

impl FilterCatalog {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read filter catalogue {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid filter catalogue {}", path.display()))
    }
}
