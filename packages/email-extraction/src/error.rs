//! Typed errors for the email extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so the HTTP layer can
//! map each failure to a status code without string matching.

use thiserror::Error;

/// Errors that end a scrape without a result.
///
/// Only two conditions are fatal. Everything that goes wrong after the
/// homepage was fetched is absorbed by the pipeline.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The target is not an absolute http(s) URL. No network I/O happened.
    #[error("invalid URL {url:?}: {reason}")]
    InvalidInput { url: String, reason: String },

    /// The homepage could not be fetched.
    #[error("failed to fetch {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: FetchError,
    },
}

impl ExtractionError {
    /// Lower-level cause, suitable for a `details` field in an API response.
    pub fn details(&self) -> String {
        match self {
            Self::InvalidInput { reason, .. } => reason.clone(),
            Self::FetchFailed { source, .. } => source.to_string(),
        }
    }
}

/// Errors that can occur while fetching a single page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed (DNS, connect, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request exceeded the fetch timeout
    #[error("timeout fetching {url}")]
    Timeout { url: String },

    /// Server answered outside the accepted 200..=399 range
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Only http and https are fetched
    #[error("unsupported URL scheme {scheme:?} for {url}")]
    UnsupportedScheme { url: String, scheme: String },

    /// Response body could not be read
    #[error("failed to read body: {0}")]
    Body(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors returned by an external search provider.
#[derive(Debug, Error)]
pub enum SearchError {
    /// HTTP request failed
    #[error("search request failed: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Provider answered with a non-success status
    #[error("search API error: HTTP {0}")]
    Status(u16),

    /// Response body was not the expected JSON
    #[error("search response could not be decoded: {0}")]
    Decode(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for search operations.
pub type SearchOutcome<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failed_details_carry_cause() {
        let err = ExtractionError::FetchFailed {
            url: "https://example.com/".to_string(),
            source: FetchError::Timeout {
                url: "https://example.com/".to_string(),
            },
        };

        assert_eq!(err.details(), "timeout fetching https://example.com/");
        assert!(err.to_string().starts_with("failed to fetch https://example.com/"));
    }

    #[test]
    fn test_invalid_input_details() {
        let err = ExtractionError::InvalidInput {
            url: "not a url".to_string(),
            reason: "relative URL without a base".to_string(),
        };

        assert_eq!(err.details(), "relative URL without a base");
    }
}
