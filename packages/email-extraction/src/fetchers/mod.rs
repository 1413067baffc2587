//! Page fetcher implementations.
//!
//! - `HttpFetcher` - plain HTTP(S) GET with timeout and client identification
//! - `MockFetcher` - canned pages for tests (see [`crate::testing`])

mod http;

pub use http::{HttpFetcher, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

// Re-export from traits for convenience
pub use crate::traits::fetcher::{FetchedPage, PageFetcher};
