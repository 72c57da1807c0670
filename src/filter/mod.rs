//! Wildcard URL filter.
//!
//! Patterns are literal text where `*` matches any run of characters.
//! Matching is case-insensitive and unanchored. When a pattern cannot be
//! compiled the filter falls back to substring containment, so matching never
//! fails.

use crate::base::error::CaptureError;
use regex::{Regex, RegexBuilder};

/// Compiled-program budget for a filter pattern.
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A compiled URL filter.
#[derive(Debug, Clone, Default)]
pub enum UrlFilter {
    /// Empty or whitespace-only pattern.
    #[default]
    All,
    Wildcard(Regex),
    /// Lowercased raw pattern, used when compilation failed.
    Substring(String),
}

impl UrlFilter {
    /// Compile `pattern`, degrading to substring matching on failure.
    pub fn compile(pattern: &str) -> Self {
        Self::compile_with_limit(pattern, DEFAULT_SIZE_LIMIT)
    }

    /// [`UrlFilter::compile`] with an explicit compiled-size budget.
    pub fn compile_with_limit(pattern: &str, size_limit: usize) -> Self {
        match Self::try_compile_with_limit(pattern, size_limit) {
            Ok(filter) => filter,
            Err(e) => {
                tracing::debug!(error = %e, "falling back to substring filter");
                UrlFilter::Substring(pattern.trim().to_lowercase())
            }
        }
    }

    /// Compile `pattern` as a wildcard expression.
    pub fn try_compile(pattern: &str) -> Result<Self, CaptureError> {
        Self::try_compile_with_limit(pattern, DEFAULT_SIZE_LIMIT)
    }

    pub fn try_compile_with_limit(pattern: &str, size_limit: usize) -> Result<Self, CaptureError> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Ok(UrlFilter::All);
        }

        RegexBuilder::new(&wildcard_to_regex(pattern))
            .case_insensitive(true)
            .size_limit(size_limit)
            .build()
            .map(UrlFilter::Wildcard)
            .map_err(|e| CaptureError::InvalidFilterPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn is_match(&self, url: &str) -> bool {
        match self {
            UrlFilter::All => true,
            UrlFilter::Wildcard(regex) => regex.is_match(url),
            UrlFilter::Substring(needle) => url.to_lowercase().contains(needle.as_str()),
        }
    }
}

/// Whether `url` satisfies the user pattern.
pub fn matches(pattern: &str, url: &str) -> bool {
    UrlFilter::compile(pattern).is_match(url)
}

/// Escape everything except `*`, which becomes `.*`.
fn wildcard_to_regex(pattern: &str) -> String {
    pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_to_regex() {
        assert_eq!(wildcard_to_regex("*.png"), r".*\.png");
        assert_eq!(wildcard_to_regex("a(b)"), r"a\(b\)");
        assert_eq!(wildcard_to_regex("**"), ".*.*");
    }

    #[test]
    fn test_empty_pattern_is_all() {
        assert!(matches!(UrlFilter::compile(""), UrlFilter::All));
        assert!(matches!(UrlFilter::compile("   \t"), UrlFilter::All));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        assert!(matches("a.test", "https://a.test/"));
        assert!(!matches("a.test", "https://aXtest/"));
        assert!(matches("?x=1", "https://a.test/p?x=1"));
        assert!(!matches("?x=1", "https://a.test/px=1"));
    }

    #[test]
    fn test_substring_fallback_is_case_insensitive() {
        let filter = UrlFilter::Substring("api".into());
        assert!(filter.is_match("https://x.test/API/v1"));
        assert!(!filter.is_match("https://x.test/v1"));
    }

    #[test]
    fn test_oversized_pattern_falls_back_to_substring() {
        let err = UrlFilter::try_compile_with_limit("API*v1", 0).unwrap_err();
        assert!(matches!(err, CaptureError::InvalidFilterPattern { .. }));

        // The raw pattern is matched as plain text, `*` included.
        let filter = UrlFilter::compile_with_limit("  API*v1 ", 0);
        assert!(matches!(&filter, UrlFilter::Substring(needle) if needle == "api*v1"));
        assert!(filter.is_match("https://x.test/Api*V1/items"));
        assert!(!filter.is_match("https://x.test/api/v1"));
    }

    #[test]
    fn test_pattern_is_trimmed() {
        assert!(matches("  *.js  ", "https://x.test/app.js"));
    }
}
