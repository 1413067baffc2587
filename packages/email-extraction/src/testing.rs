//! Testing utilities including in-memory fetcher and searcher doubles.
//!
//! These let applications exercise the full pipeline without network calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use url::Url;

use crate::error::{FetchError, FetchResult, SearchError, SearchOutcome};
use crate::traits::fetcher::{FetchedPage, PageFetcher};
use crate::traits::searcher::{SearchHit, WebSearcher};

/// In-memory fetcher serving canned pages by exact URL.
///
/// Unknown URLs fail with a connection-style error. Every call is recorded.
#[derive(Default, Clone)]
pub struct MockFetcher {
    pages: Arc<RwLock<HashMap<String, String>>>,
    timeouts: Arc<RwLock<Vec<String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    pub fn with_page(self, url: &str, body: impl Into<String>) -> Self {
        self.pages
            .write()
            .unwrap()
            .insert(normalize(url), body.into());
        self
    }

    /// Make requests for `url` time out.
    pub fn with_timeout(self, url: &str) -> Self {
        self.timeouts.write().unwrap().push(normalize(url));
        self
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

fn normalize(url: &str) -> String {
    Url::parse(url)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| url.to_string())
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &Url) -> FetchResult<FetchedPage> {
        let key = url.to_string();
        self.calls.write().unwrap().push(key.clone());

        if self.timeouts.read().unwrap().contains(&key) {
            return Err(FetchError::Timeout { url: key });
        }

        match self.pages.read().unwrap().get(&key) {
            Some(body) => Ok(FetchedPage::new(url.clone(), body.clone())),
            None => Err(FetchError::Http(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                format!("connection refused: {key}"),
            )))),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// In-memory searcher returning canned hits by exact query.
#[derive(Default, Clone)]
pub struct MockSearcher {
    results: Arc<RwLock<HashMap<String, Vec<SearchHit>>>>,
    failing: bool,
    queries: Arc<RwLock<Vec<String>>>,
}

impl MockSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add hits for a query.
    pub fn with_results(self, query: &str, hits: Vec<SearchHit>) -> Self {
        self.results
            .write()
            .unwrap()
            .insert(query.to_string(), hits);
        self
    }

    /// Fail every search with an HTTP 500.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Queries received so far, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.read().unwrap().clone()
    }
}

#[async_trait]
impl WebSearcher for MockSearcher {
    async fn search(&self, query: &str) -> SearchOutcome<Vec<SearchHit>> {
        self.queries.write().unwrap().push(query.to_string());

        if self.failing {
            return Err(SearchError::Status(500));
        }

        Ok(self
            .results
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_fetcher_serves_and_records() {
        let fetcher = MockFetcher::new()
            .with_page("https://a.org", "hello")
            .with_timeout("https://a.org/slow");

        let page = fetcher
            .fetch(&Url::parse("https://a.org/").unwrap())
            .await
            .unwrap();
        assert_eq!(page.body, "hello");

        let slow = fetcher
            .fetch(&Url::parse("https://a.org/slow").unwrap())
            .await;
        assert!(matches!(slow, Err(FetchError::Timeout { .. })));

        let missing = fetcher
            .fetch(&Url::parse("https://a.org/missing").unwrap())
            .await;
        assert!(matches!(missing, Err(FetchError::Http(_))));

        assert_eq!(fetcher.call_count(), 3);
    }

    #[tokio::test]
    async fn test_mock_searcher() {
        let searcher = MockSearcher::new()
            .with_results("q", vec![SearchHit::new().with_title("t")]);

        assert_eq!(searcher.search("q").await.unwrap().len(), 1);
        assert!(searcher.search("other").await.unwrap().is_empty());
        assert_eq!(searcher.queries(), vec!["q", "other"]);

        assert!(MockSearcher::new().failing().search("q").await.is_err());
    }
}
