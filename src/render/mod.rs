//! Result rendering: turns result records into display-ready cards.
//!
//! Everything here is pure. The terminal layer in `ui` only maps the
//! [`CardView`] segments onto styled spans.

pub mod highlight;
pub mod text;

use std::fmt;

use serde::Serialize;

use crate::config::{MAX_CATEGORY_LABELS, PREVIEW_MAX_CHARS, UNKNOWN_BRAND, UNTITLED_PRODUCT};
use crate::data::ResultItem;

pub use highlight::{Highlighter, Segment};
pub use text::{format_rating, sanitize, truncate};

/// Marker wrapped around highlighted segments in plain-text output.
pub const PLAIN_HIGHLIGHT_MARKER: &str = "**";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewPreview {
    pub title: String,
    pub text: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    /// Identifier handed to the "view details" action.
    pub id: String,
    pub title: Vec<Segment>,
    pub brand: String,
    pub manufacturer: Option<String>,
    pub categories: Vec<String>,
    pub hidden_categories: usize,
    pub average_rating: f64,
    pub rating_count: usize,
    pub review_count: usize,
    pub review: Option<ReviewPreview>,
}

impl CardView {
    pub fn category_label(&self) -> String {
        self.categories.join(", ")
    }

    pub fn rating_label(&self) -> String {
        format!("★ {} ({})", format_rating(self.average_rating, self.rating_count), self.rating_count)
    }

    pub fn title_text(&self) -> String {
        self.title.iter().map(|segment| segment.text.as_str()).collect()
    }
}

/// Render one page of items against the active query.
pub fn render_items(items: &[ResultItem], query: &str) -> Vec<CardView> {
    let highlighter = Highlighter::new(query);
    items.iter().map(|item| render_item(item, &highlighter)).collect()
}

fn render_item(item: &ResultItem, highlighter: &Highlighter) -> CardView {
    let name = item
        .name
        .as_deref()
        .map(sanitize)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| UNTITLED_PRODUCT.to_string());

    let brand = item
        .brand
        .as_deref()
        .map(sanitize)
        .filter(|brand| !brand.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_BRAND.to_string());

    let categories: Vec<String> = item
        .categories
        .iter()
        .map(|category| sanitize(category).trim().to_string())
        .filter(|category| !category.is_empty())
        .collect();
    let hidden_categories = categories.len().saturating_sub(MAX_CATEGORY_LABELS);

    let (average_rating, rating_count) = item.rating_summary();

    let review = item.first_review().map(|review| {
        let title = review
            .title
            .as_deref()
            .map(sanitize)
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| "Review".to_string());
        let text = review
            .text
            .as_deref()
            .map(|text| truncate(&sanitize(text), PREVIEW_MAX_CHARS))
            .unwrap_or_default();
        ReviewPreview { title, text: highlighter.segments(&text) }
    });

    CardView {
        id: sanitize(&item.id),
        title: highlighter.segments(&name),
        brand,
        manufacturer: item.manufacturer.as_deref().map(sanitize),
        categories: categories.into_iter().take(MAX_CATEGORY_LABELS).collect(),
        hidden_categories,
        average_rating,
        rating_count,
        review_count: item.reviews.len(),
        review,
    }
}

fn write_segments(f: &mut fmt::Formatter<'_>, segments: &[Segment]) -> fmt::Result {
    for segment in segments {
        if segment.highlighted {
            write!(f, "{PLAIN_HIGHLIGHT_MARKER}{}{PLAIN_HIGHLIGHT_MARKER}", segment.text)?;
        } else {
            f.write_str(&segment.text)?;
        }
    }
    Ok(())
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.id)?;
        write_segments(f, &self.title)?;
        write!(f, "\n  Brand: {} | {}", self.brand, self.rating_label())?;
        if !self.categories.is_empty() {
            write!(f, "\n  Categories: {}", self.category_label())?;
        }
        if let Some(review) = &self.review {
            write!(f, "\n  {}: ", review.title)?;
            write_segments(f, &review.text)?;
        }
        Ok(())
    }
}
