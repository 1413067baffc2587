//! Page fetcher trait for pluggable page retrieval.
//!
//! The pipeline only ever asks "give me the text behind this URL". How that
//! happens (plain HTTP, a rendering service, canned fixtures in tests) is the
//! fetcher's business, as are the timeout and client identification policy.
//!
//! ```rust,ignore
//! use email_extraction::{HttpFetcher, PageFetcher};
//!
//! let fetcher = HttpFetcher::new()?;
//! let page = fetcher.fetch(&url::Url::parse("https://example.com")?).await?;
//! println!("{} bytes from {}", page.body.len(), page.final_url);
//! ```

use async_trait::async_trait;
use url::Url;

use crate::error::FetchResult;

/// A fetched page, before any extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// URL that was requested
    pub url: Url,

    /// URL after redirects
    pub final_url: Url,

    /// HTTP status of the final response
    pub status: u16,

    /// Content-Type header if present
    pub content_type: Option<String>,

    /// Raw response body (HTML, plain text, JSON, ...)
    pub body: String,
}

impl FetchedPage {
    /// Create a page that was served directly from `url` with status 200.
    pub fn new(url: Url, body: impl Into<String>) -> Self {
        Self {
            final_url: url.clone(),
            url,
            status: 200,
            content_type: None,
            body: body.into(),
        }
    }

    /// Set the post-redirect URL.
    pub fn with_final_url(mut self, final_url: Url) -> Self {
        self.final_url = final_url;
        self
    }

    /// Set the HTTP status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Fetches a single page.
///
/// Implementations must bound every request with a timeout and report it as
/// [`FetchError::Timeout`](crate::error::FetchError::Timeout); statuses
/// outside 200..=399 are errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one URL.
    async fn fetch(&self, url: &Url) -> FetchResult<FetchedPage>;

    /// Short identifier for logs and health output.
    fn name(&self) -> &str;
}
