//! The staged scrape: homepage, then contact-like pages, then web search.
//!
//! Each stage runs only when every earlier stage came up empty, and every
//! network call is awaited before the next decision. Only validation and the
//! homepage fetch can fail the scrape; later failures are logged and skipped.

use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

use super::contact::discover_contact_pages;
use super::emails::{extract_emails, EmailSet};
use crate::error::{ExtractionError, Result};
use crate::traits::fetcher::PageFetcher;
use crate::traits::searcher::{site_query, WebSearcher};
use crate::types::config::ScrapeConfig;
use crate::types::extraction::{ExtractionResult, Stage};

/// Finds email addresses published by a website.
///
/// The searcher is optional: without one the search stage is skipped and a
/// scrape that finds nothing on the site returns an empty result.
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use email_extraction::{EmailScraper, HttpFetcher, SerperWebSearcher};
///
/// let scraper = EmailScraper::new(Arc::new(HttpFetcher::new()?))
///     .with_searcher(Arc::new(SerperWebSearcher::new(api_key)?));
///
/// let result = scraper.scrape("https://example.org").await?;
/// println!("{:?}", result.emails);
/// ```
pub struct EmailScraper {
    fetcher: Arc<dyn PageFetcher>,
    searcher: Option<Arc<dyn WebSearcher>>,
    config: ScrapeConfig,
}

impl EmailScraper {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            searcher: None,
            config: ScrapeConfig::default(),
        }
    }

    /// Enable the search stage.
    pub fn with_searcher(mut self, searcher: Arc<dyn WebSearcher>) -> Self {
        self.searcher = Some(searcher);
        self
    }

    pub fn with_config(mut self, config: ScrapeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    pub fn fetcher_name(&self) -> &str {
        self.fetcher.name()
    }

    /// Name of the search provider, if the search stage is enabled.
    pub fn searcher_name(&self) -> Option<&str> {
        self.searcher.as_deref().map(|s| s.name())
    }

    /// Parse `raw` as an absolute http(s) URL with a host.
    pub fn validate(raw: &str) -> Result<Url> {
        let invalid = |reason: String| ExtractionError::InvalidInput {
            url: raw.to_string(),
            reason,
        };

        let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(invalid("URL has no host".to_string()));
        }

        Ok(url)
    }

    /// Run every stage needed to find addresses for `raw_url`.
    pub async fn scrape(&self, raw_url: &str) -> Result<ExtractionResult> {
        let url = Self::validate(raw_url)?;
        info!(url = %url, "Scrape starting");

        // Stage 1: homepage
        let homepage = self
            .fetcher
            .fetch(&url)
            .await
            .map_err(|source| ExtractionError::FetchFailed {
                url: url.to_string(),
                source,
            })?;

        let emails = extract_emails(&homepage.body);
        if !emails.is_empty() {
            return Ok(self.finish(&url, emails, Stage::Homepage));
        }

        // Stage 2: contact-like pages linked from the homepage
        let emails = self.scan_contact_pages(&homepage.body, &url).await;
        if !emails.is_empty() {
            return Ok(self.finish(&url, emails, Stage::ContactPages));
        }

        // Stage 3: web search, only when a provider is configured
        if let Some(searcher) = &self.searcher {
            let found = self.search_fallback(searcher.as_ref(), &url).await;
            if !found.is_empty() {
                let emails = emails.merge_front(found);
                return Ok(self.finish(&url, emails, Stage::Search));
            }
        }

        info!(url = %url, "Scrape completed without emails");
        Ok(ExtractionResult::empty(url.as_str()))
    }

    /// Probe contact-like pages in document order until one yields addresses.
    async fn scan_contact_pages(&self, homepage_html: &str, base: &Url) -> EmailSet {
        let mut pages = discover_contact_pages(homepage_html, base, &self.config.contact_keywords);
        if let Some(max) = self.config.max_contact_pages {
            pages.truncate(max);
        }
        debug!(url = %base, candidates = pages.len(), "Contact-like pages discovered");

        for page_url in pages {
            match self.fetcher.fetch(&page_url).await {
                Ok(page) => {
                    let found = extract_emails(&page.body);
                    if !found.is_empty() {
                        debug!(page = %page_url, count = found.len(), "Contact page yielded emails");
                        return found;
                    }
                }
                Err(e) => {
                    warn!(page = %page_url, error = %e, "Skipping contact page");
                }
            }
        }

        EmailSet::new()
    }

    /// Search the provider's index for addresses on the target's host.
    async fn search_fallback(&self, searcher: &dyn WebSearcher, url: &Url) -> EmailSet {
        let Some(host) = url.host_str() else {
            return EmailSet::new();
        };

        let query = site_query(host);
        match searcher.search(&query).await {
            Ok(hits) => {
                let combined = hits
                    .iter()
                    .map(|hit| hit.text())
                    .collect::<Vec<_>>()
                    .join(" ");
                extract_emails(&combined)
            }
            Err(e) => {
                warn!(query = %query, error = %e, "Search fallback failed");
                EmailSet::new()
            }
        }
    }

    fn finish(&self, url: &Url, emails: EmailSet, stage: Stage) -> ExtractionResult {
        info!(url = %url, stage = %stage, count = emails.len(), "Scrape found emails");
        ExtractionResult::new(url.as_str(), emails)
    }
}

impl std::fmt::Debug for EmailScraper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailScraper")
            .field("fetcher", &self.fetcher_name())
            .field("searcher", &self.searcher_name())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, SearchError};
    use crate::traits::fetcher::{FetchedPage, MockPageFetcher};
    use crate::traits::searcher::{MockWebSearcher, SearchHit};

    fn page(url: &Url, body: &str) -> FetchedPage {
        FetchedPage::new(url.clone(), body)
    }

    #[tokio::test]
    async fn test_invalid_url_makes_no_request() {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().never();

        let scraper = EmailScraper::new(Arc::new(fetcher));
        for raw in ["not a url", "/relative/path", "ftp://files.example.com", "https://"] {
            let err = scraper.scrape(raw).await.unwrap_err();
            assert!(
                matches!(err, ExtractionError::InvalidInput { .. }),
                "{raw} gave {err:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_homepage_hit_skips_later_stages() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|url| Ok(page(url, "a@b.com <a href='/contact'>x</a> a@b.com")));

        let mut searcher = MockWebSearcher::new();
        searcher.expect_search().never();

        let scraper = EmailScraper::new(Arc::new(fetcher)).with_searcher(Arc::new(searcher));
        let result = scraper.scrape("https://b.com").await.unwrap();

        assert_eq!(result.url, "https://b.com/");
        assert_eq!(result.emails.into_vec(), vec!["a@b.com"]);
    }

    #[tokio::test]
    async fn test_homepage_failure_is_fatal() {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().times(1).returning(|url| {
            Err(FetchError::Timeout {
                url: url.to_string(),
            })
        });

        let mut searcher = MockWebSearcher::new();
        searcher.expect_search().never();

        let scraper = EmailScraper::new(Arc::new(fetcher)).with_searcher(Arc::new(searcher));
        let err = scraper.scrape("https://slow.example").await.unwrap_err();

        match err {
            ExtractionError::FetchFailed { url, source } => {
                assert_eq!(url, "https://slow.example/");
                assert!(matches!(source, FetchError::Timeout { .. }));
            }
            other => panic!("expected FetchFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_contact_pages_stop_at_first_hit() {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().returning(|url| match url.path() {
            "/" => Ok(page(
                url,
                r#"<a href="/about">About</a><a href="/contact">Contact</a><a href="/team">Team</a>"#,
            )),
            "/about" => Err(FetchError::Status {
                url: url.to_string(),
                status: 500,
            }),
            "/contact" => Ok(page(url, "mail info@site.org or info@site.org")),
            other => panic!("unexpected fetch of {other}"),
        });

        let scraper = EmailScraper::new(Arc::new(fetcher));
        let result = scraper.scrape("https://site.org").await.unwrap();

        assert_eq!(result.emails.into_vec(), vec!["info@site.org"]);
    }

    #[tokio::test]
    async fn test_max_contact_pages_caps_probing() {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().times(2).returning(|url| match url.path() {
            "/" => Ok(page(url, r#"<a href="/about">About</a><a href="/contact">Contact</a>"#)),
            _ => Ok(page(url, "nothing here")),
        });

        let scraper = EmailScraper::new(Arc::new(fetcher))
            .with_config(ScrapeConfig::new().with_max_contact_pages(1));
        let result = scraper.scrape("https://site.org").await.unwrap();

        assert!(result.emails.is_empty());
    }

    #[tokio::test]
    async fn test_search_fallback_uses_site_query() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|url| Ok(page(url, "<p>No contact details</p>")));

        let mut searcher = MockWebSearcher::new();
        searcher
            .expect_search()
            .withf(|query| query.to_string() == "site:www.site.org email")
            .times(1)
            .returning(|_| {
                Ok(vec![
                    SearchHit::new()
                        .with_title("Site - press@site.org")
                        .with_snippet("reach hello@site.org"),
                    SearchHit::new().with_snippet("press@site.org again"),
                ])
            });

        let scraper = EmailScraper::new(Arc::new(fetcher)).with_searcher(Arc::new(searcher));
        let result = scraper.scrape("https://www.site.org/").await.unwrap();

        assert_eq!(
            result.emails.into_vec(),
            vec!["press@site.org", "hello@site.org"]
        );
    }

    #[tokio::test]
    async fn test_search_failure_yields_empty_result() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|url| Ok(page(url, "<p>Nothing</p>")));

        let mut searcher = MockWebSearcher::new();
        searcher
            .expect_search()
            .times(1)
            .returning(|_| Err(SearchError::Status(429)));

        let scraper = EmailScraper::new(Arc::new(fetcher)).with_searcher(Arc::new(searcher));
        let result = scraper.scrape("https://quiet.example").await.unwrap();

        assert_eq!(result, ExtractionResult::empty("https://quiet.example/"));
    }

    #[test]
    fn test_validate_normalizes() {
        let url = EmailScraper::validate("  HTTPS://Example.COM  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }
}
