//! HTTP access to the search and suggestion endpoints

use std::time::Duration;

use async_trait::async_trait;
use cli_log::*;
use reqwest::Client;
use url::Url;

use crate::app::SearchMode;
use crate::config::{PAGE_SIZE, SEARCH_PATH, SUGGESTIONS_PATH};
use crate::data::{FilterSet, ResultPage};
use crate::error::SearchError;
use super::messages::{SearchResponse, SuggestionResponse};

/// Everything the search endpoint needs for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub mode: SearchMode,
    pub page: u32,
    pub size: usize,
    pub filters: FilterSet,
}

impl SearchRequest {
    pub fn new(query: &str, page: u32, filters: &FilterSet, mode: SearchMode) -> Self {
        Self {
            query: query.to_string(),
            mode,
            page,
            size: PAGE_SIZE,
            filters: filters.clone(),
        }
    }

    /// Query string parameters in wire order. Filter values repeat their key.
    /// `page` is only sent for follow-up pages so first-page requests stay minimal.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("q", self.query.clone()),
            ("search_type", self.mode.as_ref().to_string()),
            ("size", self.size.to_string()),
        ];
        if self.page > 1 {
            pairs.push(("page", self.page.to_string()));
        }
        pairs.extend(self.filters.categories.iter().map(|c| ("category", c.clone())));
        pairs.extend(self.filters.brands.iter().map(|b| ("brand", b.clone())));
        pairs.extend(self.filters.manufacturers.iter().map(|m| ("manufacturer", m.clone())));

        if self.filters.has_rating_bounds() {
            pairs.push(("min_rating", self.filters.min_rating.to_string()));
            pairs.push(("max_rating", self.filters.max_rating.to_string()));
        }
        pairs
    }
}

/// The two calls the controller makes. Implemented over HTTP in production and
/// by scripted backends in tests.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<ResultPage, SearchError>;

    async fn suggest(&self, prefix: &str) -> Result<Vec<String>, SearchError>;
}

pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(endpoint: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base = Url::parse(endpoint)
            .map_err(|e| anyhow::anyhow!("Invalid endpoint '{endpoint}': {e}"))?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    pub fn search_url(&self, request: &SearchRequest) -> Url {
        let mut url = self.endpoint_url(SEARCH_PATH);
        url.query_pairs_mut().extend_pairs(request.query_pairs());
        url
    }

    pub fn suggestions_url(&self, prefix: &str) -> Url {
        let mut url = self.endpoint_url(SUGGESTIONS_PATH);
        url.query_pairs_mut().append_pair("prefix", prefix);
        url
    }

    fn endpoint_url(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        let joined = format!("{}{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url.set_query(None);
        url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, SearchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl SearchBackend for HttpBackend {
    async fn search(&self, request: &SearchRequest) -> Result<ResultPage, SearchError> {
        let url = self.search_url(request);
        debug!("GET {url}");
        let response: SearchResponse = self.get_json(url).await?;
        Ok(response.into_page())
    }

    async fn suggest(&self, prefix: &str) -> Result<Vec<String>, SearchError> {
        let url = self.suggestions_url(prefix);
        debug!("GET {url}");
        let response: SuggestionResponse = self.get_json(url).await?;
        Ok(response.suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(endpoint: &str) -> HttpBackend {
        HttpBackend::new(endpoint, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn plain_query_sends_fixed_parameters() {
        let request = SearchRequest::new("wireless mouse", 1, &FilterSet::default(), SearchMode::Hybrid);
        assert_eq!(
            request.query_pairs(),
            vec![
                ("q", "wireless mouse".to_string()),
                ("search_type", "hybrid".to_string()),
                ("size", "12".to_string()),
            ]
        );
    }

    #[test]
    fn filters_repeat_their_keys() {
        let mut filters = FilterSet::default();
        filters.categories.insert("Electronics".to_string());
        filters.categories.insert("Computers".to_string());
        filters.brands.insert("Logitech".to_string());
        filters.manufacturers.insert("Logitech Inc".to_string());
        filters.min_rating = 3.5;

        let pairs = SearchRequest::new("mouse", 2, &filters, SearchMode::Keyword).query_pairs();
        assert_eq!(&pairs[1], &("search_type", "keyword".to_string()));
        assert_eq!(&pairs[3], &("page", "2".to_string()));
        assert_eq!(
            &pairs[4..],
            &[
                ("category", "Computers".to_string()),
                ("category", "Electronics".to_string()),
                ("brand", "Logitech".to_string()),
                ("manufacturer", "Logitech Inc".to_string()),
                ("min_rating", "3.5".to_string()),
                ("max_rating", "5".to_string()),
            ]
        );
    }

    #[test]
    fn search_url_encodes_parameters() {
        let request = SearchRequest::new("usb-c & hdmi", 1, &FilterSet::default(), SearchMode::Semantic);
        let url = backend("http://localhost:8000").search_url(&request);
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/search?q=usb-c+%26+hdmi&search_type=semantic&size=12"
        );
    }

    #[test]
    fn endpoint_path_prefix_is_kept() {
        let url = backend("https://shop.example/search-proxy/").suggestions_url("ec");
        assert_eq!(url.as_str(), "https://shop.example/search-proxy/api/suggestions?prefix=ec");
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        assert!(HttpBackend::new("not a url", Duration::from_secs(1)).is_err());
    }
}
