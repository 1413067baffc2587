//! Request and result values for one scrape.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pipeline::emails::EmailSet;

/// Input to a scrape: the target URL as received.
///
/// `url` is optional so callers can tell "missing" apart from "invalid".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractionRequest {
    pub url: Option<String>,
}

impl ExtractionRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    /// The URL, or None when it is absent or empty.
    pub fn target(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

/// Addresses found for a target. An empty `emails` is a valid outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Normalized absolute target URL
    pub url: String,

    /// Unique addresses in first-seen order
    pub emails: EmailSet,
}

impl ExtractionResult {
    pub fn new(url: impl Into<String>, emails: EmailSet) -> Self {
        Self {
            url: url.into(),
            emails,
        }
    }

    pub fn empty(url: impl Into<String>) -> Self {
        Self::new(url, EmailSet::new())
    }
}

/// Phase of the fallback pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Homepage,
    ContactPages,
    Search,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Homepage => "homepage",
            Stage::ContactPages => "contact_pages",
            Stage::Search => "search",
        };
        f.write_str(s)
    }
}
