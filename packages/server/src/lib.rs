// Email Scraper - API Core
//
// HTTP surface for the email extraction pipeline. The pipeline itself lives
// in the email-extraction package; this crate owns configuration and routing.

pub mod config;
pub mod server;

pub use config::*;
