//! Web searcher trait for the last-resort search stage.
//!
//! When neither the homepage nor its contact-like pages mention an address,
//! the pipeline asks a search provider what it has indexed for the site.
//! Only the title and snippet text of each hit are used; linked pages are
//! never fetched.

use async_trait::async_trait;

use crate::error::SearchOutcome;

/// One organic result from a search provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHit {
    /// Result URL, if the provider returned one.
    pub link: Option<String>,

    /// Title of the result.
    pub title: Option<String>,

    /// Snippet/description text.
    pub snippet: Option<String>,
}

impl SearchHit {
    /// Create an empty hit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Add a title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a snippet.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Title and snippet joined by a space. Missing parts are empty.
    pub fn text(&self) -> String {
        format!(
            "{} {}",
            self.title.as_deref().unwrap_or(""),
            self.snippet.as_deref().unwrap_or("")
        )
    }
}

/// Query used to look for addresses published on `host`.
pub fn site_query(host: &str) -> String {
    format!("site:{} email", host)
}

/// Web search trait for the fallback stage.
///
/// # Implementations
///
/// - `SerperWebSearcher` - Serper.dev Google search API
/// - `MockWebSearcher` - For testing
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebSearcher: Send + Sync {
    /// Run a query and return organic results in provider order.
    async fn search(&self, query: &str) -> SearchOutcome<Vec<SearchHit>>;

    /// Short identifier for logs and health output.
    fn name(&self) -> &str;
}
