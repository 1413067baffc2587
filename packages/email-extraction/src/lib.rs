//! Email Extraction for a Single Website
//!
//! Given one URL, finds the email addresses the site publishes, falling back
//! through progressively more expensive sources until one yields results:
//!
//! 1. the homepage itself
//! 2. contact-like pages linked from the homepage (`contact`, `about`,
//!    `imprint`, `team`)
//! 3. an external web search restricted to the site's host (optional)
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use email_extraction::{EmailScraper, HttpFetcher};
//!
//! let scraper = EmailScraper::new(Arc::new(HttpFetcher::new()?));
//! let result = scraper.scrape("https://example.org").await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Network seams (PageFetcher, WebSearcher)
//! - [`pipeline`] - Email matching, contact discovery, staged scrape
//! - [`fetchers`] - HTTP page fetcher
//! - [`searchers`] - Serper.dev web searcher
//! - [`security`] - Credential handling
//! - [`testing`] - In-memory doubles for testing

pub mod error;
pub mod fetchers;
pub mod pipeline;
pub mod searchers;
pub mod security;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ExtractionError, FetchError, SearchError};
pub use traits::{
    fetcher::{FetchedPage, PageFetcher},
    searcher::{site_query, SearchHit, WebSearcher},
};
pub use types::{
    config::ScrapeConfig,
    extraction::{ExtractionRequest, ExtractionResult, Stage},
};

pub use pipeline::{discover_contact_pages, extract_emails, EmailScraper, EmailSet, CONTACT_KEYWORDS};

pub use fetchers::HttpFetcher;
pub use searchers::SerperWebSearcher;
pub use security::SecretString;

pub use testing::{MockFetcher, MockSearcher};
