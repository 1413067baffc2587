//! Serper.dev-backed web searcher.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::{SearchError, SearchOutcome};
use crate::fetchers::DEFAULT_TIMEOUT;
use crate::security::SecretString;
use crate::traits::searcher::{SearchHit, WebSearcher};

/// Production search endpoint.
pub const SERPER_ENDPOINT: &str = "https://google.serper.dev/search";

#[derive(Serialize)]
struct Request<'a> {
    q: &'a str,
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

#[derive(Deserialize)]
struct OrganicResult {
    title: Option<String>,
    snippet: Option<String>,
    link: Option<String>,
}

impl From<OrganicResult> for SearchHit {
    fn from(r: OrganicResult) -> Self {
        SearchHit {
            link: r.link,
            title: r.title,
            snippet: r.snippet,
        }
    }
}

/// Google results via Serper.dev.
///
/// Authenticates with an `X-API-KEY` header. The key is held as a
/// [`SecretString`] and never logged.
pub struct SerperWebSearcher {
    api_key: SecretString,
    client: reqwest::Client,
    endpoint: String,
}

impl SerperWebSearcher {
    /// Create a searcher with the default timeout.
    pub fn new(api_key: impl Into<SecretString>) -> SearchOutcome<Self> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    /// Create a searcher with a custom request timeout.
    pub fn with_timeout(api_key: impl Into<SecretString>, timeout: Duration) -> SearchOutcome<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Http(Box::new(e)))?;

        Ok(Self {
            api_key: api_key.into(),
            client,
            endpoint: SERPER_ENDPOINT.to_string(),
        })
    }

    /// Point the searcher at a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl WebSearcher for SerperWebSearcher {
    async fn search(&self, query: &str) -> SearchOutcome<Vec<SearchHit>> {
        debug!(query = %query, "Serper search starting");

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", self.api_key.expose())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&Request { q: query })
            .send()
            .await
            .map_err(|e| SearchError::Http(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body: Response = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(Box::new(e)))?;

        debug!(query = %query, results = body.organic.len(), "Serper search completed");

        Ok(body.organic.into_iter().map(SearchHit::from).collect())
    }

    fn name(&self) -> &str {
        "serper"
    }
}

impl std::fmt::Debug for SerperWebSearcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerperWebSearcher")
            .field("api_key", &self.api_key)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
