//! Wire format of the search service

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::data::{FacetBucket, FacetCounts, ResultItem, ResultPage, Review};

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<RawRecord>,
    #[serde(default)]
    pub facets: Option<std::collections::BTreeMap<String, Vec<RawBucket>>>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<String>,
}

/// A result record, either pre-flattened or wrapped with `_id`/`_source`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawRecord {
    Wrapped {
        #[serde(rename = "_id", default)]
        id: Option<Value>,
        #[serde(rename = "_source")]
        source: RawProduct,
    },
    Flat(RawProduct),
}

#[derive(Debug, Default, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub categories: Option<RawCategories>,
    #[serde(default)]
    pub reviews: Option<Vec<RawReview>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawCategories {
    List(Vec<String>),
    Delimited(String),
}

#[derive(Debug, Default, Deserialize)]
pub struct RawReview {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawBucket {
    pub key: Value,
    #[serde(default)]
    pub doc_count: u64,
}

/// Accepts numbers, numeric strings and null. Anything else counts as "no rating".
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|rating| rating.is_finite()))
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl RawCategories {
    fn into_vec(self) -> Vec<String> {
        let raw = match self {
            RawCategories::List(list) => list,
            RawCategories::Delimited(joined) => joined.split(',').map(str::to_string).collect(),
        };
        raw.into_iter()
            .map(|category| category.trim().to_string())
            .filter(|category| !category.is_empty())
            .collect()
    }
}

impl From<RawReview> for Review {
    fn from(raw: RawReview) -> Self {
        Self {
            title: raw.title,
            text: raw.text,
            rating: raw.rating,
            username: raw.username,
            date: raw.date,
        }
    }
}

impl RawRecord {
    pub fn into_item(self) -> ResultItem {
        let (outer_id, product) = match self {
            RawRecord::Wrapped { id, source } => (id, source),
            RawRecord::Flat(product) => (None, product),
        };
        let id = outer_id
            .or(product.id)
            .map(|id| value_to_string(&id))
            .unwrap_or_default();

        ResultItem {
            id,
            name: product.name,
            brand: product.brand.filter(|brand| !brand.trim().is_empty()),
            manufacturer: product.manufacturer,
            categories: product.categories.map(RawCategories::into_vec).unwrap_or_default(),
            reviews: product
                .reviews
                .unwrap_or_default()
                .into_iter()
                .map(Review::from)
                .collect(),
        }
    }
}

impl SearchResponse {
    pub fn into_page(self) -> ResultPage {
        let facets = self.facets.map(|facets| {
            facets
                .into_iter()
                .map(|(name, buckets)| {
                    let buckets = buckets
                        .into_iter()
                        .map(|bucket| FacetBucket {
                            key: value_to_string(&bucket.key),
                            doc_count: bucket.doc_count,
                        })
                        .collect();
                    (name, buckets)
                })
                .collect::<FacetCounts>()
        });

        ResultPage {
            items: self.results.into_iter().map(RawRecord::into_item).collect(),
            facets,
        }
    }
}
