//! Web searcher implementations.
//!
//! - `SerperWebSearcher` - Serper.dev Google search API
//! - `MockWebSearcher` - canned results for tests (see [`crate::testing`])

mod serper;

pub use serper::{SerperWebSearcher, SERPER_ENDPOINT};

// Re-export from traits for convenience
pub use crate::traits::searcher::{site_query, SearchHit, WebSearcher};
