// src/exclude.rs
// =============================================================================
// This module decides which URLs stay out of the sitemap.
//
// The operator configures a list of exclusion patterns - plain substrings,
// not globs or regexes. A URL is excluded when ANY pattern appears anywhere
// in the FULL URL string. That makes one mechanism cover both cases:
//
//   "/admin/"  -> excludes a whole section of the site
//   ".pdf"     -> excludes a file type wherever it lives
//
// Matching is case-sensitive and stops at the first hit.
//
// An excluded URL is never fetched and never recorded, but the crawl engine
// still marks it visited so it doesn't get re-queued over and over.
// =============================================================================

// Returns true if the URL matches any exclusion pattern
//
// Parameters:
//   url: the FULL URL (scheme + host + path), not just the path
//   patterns: the configured exclusion substrings
//
// Example:
//   is_excluded("https://example.com/files/report.pdf", &[".pdf"]) -> true
pub fn is_excluded(url: &str, patterns: &[String]) -> bool {
    // .any() short-circuits: we stop checking as soon as one pattern matches
    patterns.iter().any(|pattern| url.contains(pattern.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_path_prefix_pattern() {
        let p = patterns(&["/admin/"]);
        assert!(is_excluded("https://example.com/admin/users", &p));
        assert!(!is_excluded("https://example.com/blog", &p));
    }

    #[test]
    fn test_extension_pattern_matches_anywhere() {
        let p = patterns(&[".pdf"]);
        assert!(is_excluded("https://example.com/files/report.pdf", &p));
        assert!(is_excluded("https://example.com/.pdf-archive/x", &p));
    }

    #[test]
    fn test_pattern_can_match_the_host() {
        // Patterns are tested against the full URL string, host included
        let p = patterns(&["staging."]);
        assert!(is_excluded("https://staging.example.com/", &p));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let p = patterns(&["/Admin/"]);
        assert!(!is_excluded("https://example.com/admin/users", &p));
    }

    #[test]
    fn test_empty_pattern_list_excludes_nothing() {
        assert!(!is_excluded("https://example.com/anything", &[]));
    }

    #[test]
    fn test_any_of_several_patterns() {
        let p = patterns(&["/cart/", "/checkout/", ".jpg"]);
        assert!(is_excluded("https://example.com/checkout/pay", &p));
        assert!(is_excluded("https://example.com/img/photo.jpg", &p));
        assert!(!is_excluded("https://example.com/products", &p));
    }
}
