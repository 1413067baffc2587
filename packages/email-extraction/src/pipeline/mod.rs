//! Extraction pipeline: matching, contact discovery and the staged scrape.

pub mod contact;
pub mod emails;
pub mod scrape;

pub use contact::{discover_contact_pages, CONTACT_KEYWORDS};
pub use emails::{extract_emails, EmailSet};
pub use scrape::EmailScraper;
