//! Contact-page discovery.
//!
//! Finds links on a homepage that likely lead to a page listing contact
//! details. Only one hop is considered; discovered pages are never parsed
//! for further links.

use indexmap::IndexSet;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

/// Substrings that mark an href as contact-like (matched case-insensitively).
pub const CONTACT_KEYWORDS: &[&str] = &["contact", "about", "imprint", "team"];

/// Absolute URLs of contact-like links in `html`, in document order.
///
/// Hrefs are resolved against `base`. Hrefs that fail to resolve, and
/// links to anything other than http(s) pages, are dropped. Each URL
/// appears once.
pub fn discover_contact_pages(html: &str, base: &Url, keywords: &[String]) -> Vec<Url> {
    let document = Html::parse_document(html);
    let link_selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    let hrefs: IndexSet<&str> = document
        .select(&link_selector)
        .filter_map(|el| el.value().attr("href"))
        .filter(|href| {
            let low = href.to_lowercase();
            keywords.iter().any(|k| low.contains(k.as_str()))
        })
        .collect();

    let pages: IndexSet<Url> = hrefs
        .into_iter()
        .filter_map(|href| match base.join(href) {
            Ok(url) => Some(url),
            Err(e) => {
                debug!(href = %href, error = %e, "Skipping unresolvable link");
                None
            }
        })
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .collect();

    pages.into_iter().collect()
}

/// Default keywords as owned strings.
pub fn default_keywords() -> Vec<String> {
    CONTACT_KEYWORDS.iter().map(|k| k.to_string()).collect()
}
