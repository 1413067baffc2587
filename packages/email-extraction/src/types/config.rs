//! Pipeline configuration.

use crate::pipeline::contact::default_keywords;

/// Tuning for the staged scrape.
///
/// Network policy (timeouts, user agent) lives on the fetcher and searcher;
/// this only shapes what the pipeline does with their output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    /// Lower-cased substrings that make a link contact-like.
    pub contact_keywords: Vec<String>,

    /// Maximum contact-like pages to probe (None = all of them).
    pub max_contact_pages: Option<usize>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            contact_keywords: default_keywords(),
            max_contact_pages: None,
        }
    }
}

impl ScrapeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contact keywords. Keywords are lower-cased.
    pub fn with_contact_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.contact_keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Cap the number of contact-like pages fetched.
    pub fn with_max_contact_pages(mut self, max: usize) -> Self {
        self.max_contact_pages = Some(max);
        self
    }
}
