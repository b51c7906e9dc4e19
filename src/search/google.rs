// file: src/search/google.rs
// description: Google Custom Search JSON API client
// reference: https://developers.google.com/custom-search/v1/reference/rest/v1/cse/list

use crate::config::{MAX_SEARCH_RESULTS, SearchConfig};
use crate::error::{DetectorError, Result};
use crate::search::SearchProvider;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Option<Vec<SearchItem>>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    link: Option<String>,
}

pub struct GoogleSearch {
    client: Client,
    endpoint: String,
    api_key: String,
    cse_id: String,
    max_query_chars: usize,
    excluded_domains: Vec<String>,
}

impl GoogleSearch {
    /// Fails with `DetectorError::Search` when either credential is missing,
    /// so an unconfigured search can never pass for an empty one.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let api_key = non_blank(config.api_key.as_deref()).ok_or_else(|| {
            DetectorError::Search("missing Google API key (PLAGISCAN_API_KEY)".to_string())
        })?;
        let cse_id = non_blank(config.cse_id.as_deref()).ok_or_else(|| {
            DetectorError::Search("missing custom search engine id (PLAGISCAN_CSE_ID)".to_string())
        })?;

        Ok(Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            api_key,
            cse_id,
            max_query_chars: config.max_query_chars,
            excluded_domains: config.excluded_domains.clone(),
        })
    }

    fn build_query(&self, text: &str) -> String {
        text.chars().take(self.max_query_chars).collect()
    }

    fn extract_links(&self, body: &str) -> Result<Vec<String>> {
        let response: SearchResponse = serde_json::from_str(body).map_err(|e| {
            DetectorError::Search(format!("Failed to parse search response: {}", e))
        })?;

        let Some(items) = response.items else {
            warn!("Search API returned 0 items");
            return Ok(Vec::new());
        };

        let links = items
            .into_iter()
            .filter_map(|item| item.link)
            .filter(|link| link.starts_with("http"))
            .filter(|link| {
                !self
                    .excluded_domains
                    .iter()
                    .any(|domain| link.contains(domain.as_str()))
            })
            .collect();

        Ok(links)
    }
}

impl SearchProvider for GoogleSearch {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let query = self.build_query(query);
        let num = limit.clamp(1, MAX_SEARCH_RESULTS).to_string();

        debug!("Querying search API with {} chars", query.chars().count());

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.cse_id.as_str()),
                ("q", query.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(|e| DetectorError::Search(format!("Network error calling search API: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DetectorError::Search(format!(
                "Search API request failed with status {}: {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DetectorError::Search(format!("Failed to read search response: {}", e)))?;

        let links = self.extract_links(&body)?;
        info!("Search returned {} candidate source(s)", links.len());
        Ok(links)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn configured() -> SearchConfig {
        let mut config = Config::default_config().search;
        config.api_key = Some("key".to_string());
        config.cse_id = Some("cse".to_string());
        config
    }

    #[test]
    fn test_missing_credentials_is_search_failure() {
        let mut config = configured();
        config.api_key = Some("   ".to_string());

        match GoogleSearch::new(&config) {
            Err(err) => assert!(err.is_upstream_failure()),
            Ok(_) => panic!("expected missing key to fail"),
        }
    }

    #[test]
    fn test_query_truncated_by_characters() {
        let search = GoogleSearch::new(&configured()).unwrap();
        let long = "ä".repeat(500);
        assert_eq!(search.build_query(&long).chars().count(), 300);
    }

    #[test]
    fn test_extract_links_filters() {
        let search = GoogleSearch::new(&configured()).unwrap();
        let body = r#"{"items": [
            {"link": "https://example.com/a"},
            {"link": "https://www.youtube.com/watch?v=1"},
            {"link": "ftp://example.com/b"},
            {"title": "no link"},
            {"link": "http://example.org/c"}
        ]}"#;

        assert_eq!(
            search.extract_links(body).unwrap(),
            vec!["https://example.com/a", "http://example.org/c"]
        );
    }

    #[test]
    fn test_missing_items_is_empty_not_failure() {
        let search = GoogleSearch::new(&configured()).unwrap();
        let body = r#"{"searchInformation": {"totalResults": "0"}}"#;
        assert!(search.extract_links(body).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_body_is_failure() {
        let search = GoogleSearch::new(&configured()).unwrap();
        assert!(search.extract_links("<html>").is_err());
    }

    #[tokio::test]
    async fn test_blank_query_skips_request() {
        let search = GoogleSearch::new(&configured()).unwrap();
        assert!(search.search("   ", 7).await.unwrap().is_empty());
    }
}
