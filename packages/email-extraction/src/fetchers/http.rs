//! HTTP-based page fetcher.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::{FetchedPage, PageFetcher};

/// Timeout applied to every page request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Client identifier sent with every page request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; EmailScraper/1.0)";

/// Fetches pages with a single GET each.
///
/// Statuses 200..=399 are accepted. Redirects are followed (at most five),
/// so a 3xx only reaches the caller when the redirect chain ends on one.
///
/// ```rust,ignore
/// use email_extraction::HttpFetcher;
///
/// let fetcher = HttpFetcher::with_options(Duration::from_secs(10), "MyBot/1.0")?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpFetcher {
    /// Create a fetcher with the default timeout and user agent.
    pub fn new() -> FetchResult<Self> {
        Self::with_options(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a fetcher with a custom timeout and user agent.
    pub fn with_options(timeout: Duration, user_agent: impl Into<String>) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        Ok(Self {
            client,
            user_agent: user_agent.into(),
        })
    }

    /// Replace the user agent sent with each request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use a preconfigured HTTP client. The client's own timeout applies.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// The user agent sent with each request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn map_request_error(url: &Url, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Http(Box::new(e))
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> FetchResult<FetchedPage> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedScheme {
                url: url.to_string(),
                scheme: url.scheme().to_string(),
            });
        }

        debug!(url = %url, "HTTP fetch starting");
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                Self::map_request_error(url, e)
            })?;

        let status = response.status();
        if !(status.is_success() || status.is_redirection()) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Body(Box::new(e))
            }
        })?;

        debug!(
            url = %url,
            final_url = %final_url,
            status = status.as_u16(),
            content_length = body.len(),
            "Page fetched successfully"
        );

        let mut page = FetchedPage::new(url.clone(), body)
            .with_final_url(final_url)
            .with_status(status.as_u16());
        if let Some(ct) = content_type {
            page = page.with_content_type(ct);
        }

        Ok(page)
    }

    fn name(&self) -> &str {
        "http"
    }
}
