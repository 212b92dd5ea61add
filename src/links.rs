//! Link detection in message bodies.
//!
//! [`LinkDetector`] is passed explicitly to the extractors that count links;
//! there is no process-wide detector. [`UrlExtractor`] is the default,
//! regex-based heuristic:
//!
//! - scheme URLs (`http://`, `https://`, `ftp://`)
//! - `www.` hosts
//! - bare domains ending in a known top-level domain, optionally with a path
//!
//! Bare domains right after `@` are e-mail addresses and are skipped.
//! Trailing sentence punctuation is not part of a URL.
//!
//! ```rust
//! use chatstat::links::{LinkDetector, UrlExtractor};
//!
//! let urls = UrlExtractor::new();
//! assert_eq!(urls.find_urls("see https://example.com/a, or rust-lang.org."), ["https://example.com/a", "rust-lang.org"]);
//! assert_eq!(urls.count_urls("mail me: bob@example.com"), 0);
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ChatstatError;

/// Top-level domains recognised on bare domains.
pub const DEFAULT_TLDS: &[&str] = &[
    "com", "org", "net", "edu", "gov", "mil", "int", "io", "co", "me", "app", "dev", "info", "biz",
    "tv", "ly", "gl", "gg", "ai", "xyz", "site", "online", "tech", "us", "uk", "ca", "au", "de",
    "fr", "es", "it", "nl", "ru", "in", "jp", "cn", "br", "mx", "za", "pk", "bd", "ng",
];

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}', '\'', '"'];

static DEFAULT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&build_pattern(DEFAULT_TLDS)).expect("default URL pattern is valid")
});

fn build_pattern(tlds: &[&str]) -> String {
    let tld_alternation = tlds
        .iter()
        .map(|tld| regex::escape(tld))
        .collect::<Vec<_>>()
        .join("|");

    format!(
        r#"(?i)\b(?:(?:https?|ftp)://[^\s<>"]+|www\.[^\s<>"]+|(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+(?:{tld_alternation})\b(?:/[^\s<>"]*)?)"#
    )
}

/// Finds URLs in text.
pub trait LinkDetector {
    /// Returns every URL in `text`, in order of appearance.
    fn find_urls<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Number of URLs in `text`.
    fn count_urls(&self, text: &str) -> usize {
        self.find_urls(text).len()
    }
}

/// Regex heuristic URL finder.
#[derive(Debug, Clone)]
pub struct UrlExtractor {
    pattern: Regex,
}

impl UrlExtractor {
    /// Creates an extractor with [`DEFAULT_TLDS`].
    pub fn new() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.clone(),
        }
    }

    /// Creates an extractor that recognises bare domains under `tlds` only.
    pub fn with_tlds(tlds: &[&str]) -> Result<Self, ChatstatError> {
        if tlds.is_empty() {
            return Err(ChatstatError::invalid_config("TLD list must not be empty"));
        }
        let pattern = Regex::new(&build_pattern(tlds))
            .map_err(|e| ChatstatError::invalid_config(format!("URL pattern: {}", e)))?;
        Ok(Self { pattern })
    }
}

impl Default for UrlExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkDetector for UrlExtractor {
    fn find_urls<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern
            .find_iter(text)
            .filter(|m| !text[..m.start()].ends_with('@'))
            .map(|m| m.as_str().trim_end_matches(TRAILING_PUNCTUATION))
            .filter(|url| !url.is_empty())
            .collect()
    }
}
