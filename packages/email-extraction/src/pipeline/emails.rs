//! Email address matching.
//!
//! Matching is deliberately loose: anything shaped like
//! `local@domain.tld` counts, with no RFC 5322 validation. Markup is not
//! stripped first, so addresses inside attributes (`mailto:` links) match too.

use indexmap::IndexSet;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

/// Insertion-ordered, case-sensitive set of email addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailSet(IndexSet<String>);

impl EmailSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one address. Returns false if it was already present.
    pub fn insert(&mut self, email: impl Into<String>) -> bool {
        self.0.insert(email.into())
    }

    /// Append addresses not yet present, keeping existing order.
    pub fn extend(&mut self, other: impl IntoIterator<Item = String>) {
        self.0.extend(other);
    }

    /// Return a set with `front` first, followed by the addresses of `self`
    /// that `front` does not already contain.
    pub fn merge_front(self, front: EmailSet) -> EmailSet {
        let mut merged = front;
        merged.0.extend(self.0);
        merged
    }

    pub fn contains(&self, email: &str) -> bool {
        self.0.contains(email)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

impl FromIterator<String> for EmailSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for EmailSet {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Every address in `text`, each once, in first-seen order.
pub fn extract_emails(text: &str) -> EmailSet {
    RE_EMAIL
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extracts_and_dedupes_in_order() {
        let html = r#"
            <a href="mailto:a@b.com">a@b.com</a>
            <p>Sales: sales@shop.example.co.uk</p>
            <footer>a@b.com</footer>
        "#;

        let emails = extract_emails(html).into_vec();
        assert_eq!(emails, vec!["a@b.com", "sales@shop.example.co.uk"]);
    }

    #[test]
    fn test_case_sensitive_membership() {
        let emails = extract_emails("Info@Site.org info@site.org");
        assert_eq!(emails.len(), 2);
    }

    #[test]
    fn test_loose_matching() {
        // No RFC validation: consecutive dots and a plus tag both pass
        let emails = extract_emails("first..last+tag@mail..example.io");
        assert!(emails.contains("first..last+tag@mail..example.io"));

        // Single-letter TLDs never match
        assert!(extract_emails("user@host.x").is_empty());
        assert!(extract_emails("no addresses here").is_empty());
    }

    #[test]
    fn test_merge_front_orders_front_first() {
        let existing: EmailSet = ["b@x.com".to_string(), "c@x.com".to_string()]
            .into_iter()
            .collect();
        let front: EmailSet = ["c@x.com".to_string(), "a@x.com".to_string()]
            .into_iter()
            .collect();

        let merged = existing.merge_front(front).into_vec();
        assert_eq!(merged, vec!["c@x.com", "a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_serializes_as_array() {
        let set: EmailSet = ["a@b.com".to_string()].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["a@b.com"]"#);
    }

    proptest! {
        #[test]
        fn prop_no_duplicates(local in "[a-z]{1,8}", domain in "[a-z]{1,8}", repeats in 1usize..5) {
            let email = format!("{local}@{domain}.com");
            let text = vec![email.clone(); repeats].join(" , ");
            let found = extract_emails(&text).into_vec();
            prop_assert_eq!(found, vec![email]);
        }

        #[test]
        fn prop_extraction_is_deterministic(text in "[ -~]{0,200}") {
            prop_assert_eq!(extract_emails(&text), extract_emails(&text));
        }

        #[test]
        fn prop_every_match_contains_at_sign(text in "[a-z@. ]{0,120}") {
            for email in extract_emails(&text) {
                prop_assert!(email.contains('@'));
            }
        }
    }
}
