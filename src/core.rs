//! Core section: page search and retrieval.

use serde::Deserialize;

use crate::error::Result;
use crate::http::Transport;
use crate::types::{Language, Page, SearchResult};

/// The search endpoints reject limits above 100.
const MAX_SEARCH_LIMIT: u32 = 100;

#[derive(Deserialize)]
struct SearchResponse {
    pages: Vec<SearchResult>,
}

/// Client for the core REST endpoints (search, page info).
#[derive(Clone)]
pub struct CoreClient {
    transport: Transport,
    path: String,
}

impl CoreClient {
    pub(crate) fn new(transport: Transport, language: Language) -> Self {
        Self {
            transport,
            path: format!("/core/v1/wikipedia/{}", language.code()),
        }
    }

    /// Search page content for `query`, returning at most `limit` hits.
    pub async fn search_content(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>> {
        self.search("page", query, limit).await
    }

    /// Autocomplete-style search over page titles.
    pub async fn search_titles(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>> {
        self.search("title", query, limit).await
    }

    async fn search(&self, endpoint: &str, query: &str, limit: u32) -> Result<Vec<SearchResult>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let limit = limit.min(MAX_SEARCH_LIMIT);

        let response: SearchResponse = self
            .transport
            .get_json(
                &format!("{}/search/{}", self.path, endpoint),
                &[("q", query.to_string()), ("limit", limit.to_string())],
            )
            .await?;

        Ok(response.pages)
    }

    /// Fetch metadata for a single page by title.
    pub async fn get_page(&self, title: &str) -> Result<Page> {
        // Page keys use underscores where titles have spaces.
        let key = title.replace(' ', "_");
        self.transport
            .get_json(&format!("{}/page/{}/bare", self.path, key), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unroutable() -> CoreClient {
        // Nothing listens here; any issued request would fail.
        CoreClient::new(Transport::new("http://127.0.0.1:1"), Language::En)
    }

    #[test]
    fn test_path_follows_language() {
        let core = CoreClient::new(Transport::new("http://localhost"), Language::De);
        assert_eq!(core.path, "/core/v1/wikipedia/de");
    }

    #[tokio::test]
    async fn test_zero_limit_returns_empty_without_request() {
        let core = unroutable();
        let hits = core.search_content("Python", 0).await.unwrap();
        assert!(hits.is_empty());

        let hits = core.search_titles("Python", 0).await.unwrap();
        assert!(hits.is_empty());
    }
}
