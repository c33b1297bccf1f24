//! Budget path patterns
//!
//! A restricted robots.txt grammar: a pattern starts with `/`, may contain
//! a single `*` wildcard, and may end with a single `$` anchor. Patterns are
//! checked with [`is_valid_pattern`] when budgets are validated; matching
//! assumes a valid pattern and never fails.

use crate::url::extract_path_and_query;

const WILDCARD: char = '*';
const ANCHOR: char = '$';

/// Grammar check applied by the budget validator.
pub fn is_valid_pattern(pattern: &str) -> bool {
    let has_leading_slash = pattern.starts_with('/');
    let wildcard_count = pattern.matches(WILDCARD).count();
    let anchor_count = pattern.matches(ANCHOR).count();
    let anchor_at_end = match pattern.find(ANCHOR) {
        Some(pos) => pos == pattern.len() - 1,
        None => true,
    };

    has_leading_slash && wildcard_count <= 1 && anchor_count <= 1 && anchor_at_end
}

/// Match a URL path (path plus query string) against a pattern.
pub fn matches(url_path: &str, pattern: &str) -> bool {
    let (body, anchored) = match pattern.strip_suffix(ANCHOR) {
        Some(body) => (body, true),
        None => (pattern, false),
    };

    match (body.split_once(WILDCARD), anchored) {
        (None, false) => url_path.starts_with(body),
        (None, true) => url_path == body,
        (Some((before, after)), false) => url_path
            .strip_prefix(before)
            .is_some_and(|rest| rest.contains(after)),
        (Some((before, after)), true) => url_path.starts_with(before) && url_path.ends_with(after),
    }
}

/// Match a full URL against a pattern using its path and query string.
pub fn url_matches(url: &str, pattern: &str) -> bool {
    matches(&extract_path_and_query(url), pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_match() {
        assert!(matches("/a/b", "/a"));
        assert!(!matches("/a", "/a/b"));
        assert!(matches("/anything", "/"));
    }

    #[test]
    fn test_anchor_match() {
        assert!(!matches("/js/app.js", "/js$"));
        assert!(matches("/js", "/js$"));
        assert!(!matches("/js?x=1", "/js$"));
    }

    #[test]
    fn test_wildcard_match() {
        assert!(matches("/vendor-abc-chunk.js", "/vendor*chunk"));
        assert!(!matches("/vendor-abc-other.js", "/vendor*chunk"));
        assert!(matches("/vendorchunk", "/vendor*chunk"));
        assert!(matches("/a/b/c", "/*"));
    }

    #[test]
    fn test_wildcard_and_anchor_match() {
        assert!(matches("/vendor-x-chunk.js", "/vendor*chunk.js$"));
        assert!(!matches("/vendor-x-chunk.css", "/vendor*chunk.js$"));
        // Prefix and suffix are checked independently and may overlap
        assert!(matches("/ab", "/ab*b$"));
        assert!(!matches("/a", "/ab*b$"));
    }

    #[test]
    fn test_url_matches_uses_query() {
        assert!(url_matches("https://example.com/search?q=shoes", "/search?q="));
        assert!(url_matches("https://example.com/page.html#top", "/page.html$"));
        assert!(!url_matches("https://example.com/", "/checkout"));
    }

    #[test]
    fn test_is_valid_pattern() {
        assert!(is_valid_pattern("/"));
        assert!(is_valid_pattern("/*"));
        assert!(is_valid_pattern("/vendor*chunk.js$"));
        assert!(!is_valid_pattern("checkout"));
        assert!(!is_valid_pattern("/a*b*c"));
        assert!(!is_valid_pattern("/a$b"));
        assert!(!is_valid_pattern("/a$$"));
        assert!(!is_valid_pattern(""));
    }
}
