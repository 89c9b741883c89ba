// src/classify.rs
// =============================================================================
// This module assigns a sitemap priority to each discovered URL.
//
// Search engines use <priority> as a hint for how important a page is
// relative to the rest of the site (1.0 = most important, 0.0 = least).
// We classify by looking at the URL's path:
//
//   /, /index.html, /index.php  -> home priority (default 1.0)
//   contains /category/         -> category priority (default 0.8)
//   contains /product/          -> product priority (default 0.6)
//   contains /post/             -> post priority (default 0.6)
//   anything else               -> other priority (default 0.4)
//
// Rules are checked in that fixed order and only the FIRST match applies.
// Matching is case-sensitive and unanchored (the substring can appear
// anywhere in the path).
//
// Rust concepts:
// - Pure functions: Same input always gives the same output, no side effects
// - Structs with Default: Sensible starting values the config can override
// =============================================================================

use serde::{Deserialize, Serialize};
use url::Url;

// The five priority weights, one per page category
//
// These live in the configuration file, so every field gets a
// #[serde(default = ...)] pointing at its default value. That way a config
// that only sets 'home' still gets sensible values for the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Priorities {
    /// Priority for the site root / index page
    #[serde(default = "default_home")]
    pub home: f32,

    /// Priority for category listing pages (path contains /category/)
    #[serde(default = "default_category")]
    pub category: f32,

    /// Priority for product pages (path contains /product/)
    #[serde(default = "default_product")]
    pub product: f32,

    /// Priority for blog posts (path contains /post/)
    #[serde(default = "default_post")]
    pub post: f32,

    /// Priority for everything else
    #[serde(default = "default_other")]
    pub other: f32,
}

// serde's field-level defaults need free functions, so we define one per
// weight and reuse them in the Default impl below
fn default_home() -> f32 {
    1.0
}
fn default_category() -> f32 {
    0.8
}
fn default_product() -> f32 {
    0.6
}
fn default_post() -> f32 {
    0.6
}
fn default_other() -> f32 {
    0.4
}

impl Default for Priorities {
    fn default() -> Self {
        Priorities {
            home: default_home(),
            category: default_category(),
            product: default_product(),
            post: default_post(),
            other: default_other(),
        }
    }
}

// Returns the priority weight for a URL
//
// Parameters:
//   url: the URL to classify (absolute URL or bare path)
//   priorities: the configured weights
//
// Returns: the weight of the first matching category
//
// Examples:
//   "https://example.com/"                -> priorities.home
//   "https://example.com/category/shoes"  -> priorities.category
//   "https://example.com/about"           -> priorities.other
pub fn priority_for(url: &str, priorities: &Priorities) -> f32 {
    // Pull out the path component. If the string doesn't parse as an
    // absolute URL, treat the whole thing as a path (e.g. "/about").
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.to_string(),
    };

    // First match wins - the order of these checks matters
    if path == "/" || path == "/index.html" || path == "/index.php" {
        priorities.home
    } else if path.contains("/category/") {
        priorities.category
    } else if path.contains("/product/") {
        priorities.product
    } else if path.contains("/post/") {
        priorities.post
    } else {
        priorities.other
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why f32 for priorities?
//    - Sitemap priorities are decimals between 0.0 and 1.0
//    - f32 has plenty of precision for one-decimal weights
//    - The config validates the 0..=1 range before a crawl starts
//
// 2. What is #[serde(default = "...")]?
//    - When a field is missing from the JSON, serde calls the named
//      function to fill it in instead of failing
//    - This mirrors how the tool merges partial configs with defaults
//
// 3. Why match on Url::parse instead of unwrap()?
//    - The classifier also gets called with bare paths in tests
//    - Falling back to "treat it as a path" keeps the function total:
//      it always returns a weight, never panics
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_home() {
        let p = Priorities::default();
        assert_eq!(priority_for("https://example.com/", &p), 1.0);
    }

    #[test]
    fn test_index_documents_are_home() {
        let p = Priorities::default();
        assert_eq!(priority_for("https://example.com/index.html", &p), 1.0);
        assert_eq!(priority_for("https://example.com/index.php", &p), 1.0);
    }

    #[test]
    fn test_url_without_path_is_home() {
        // Url::parse normalizes "https://example.com" to path "/"
        let p = Priorities::default();
        assert_eq!(priority_for("https://example.com", &p), 1.0);
    }

    #[test]
    fn test_category_product_post_buckets() {
        let p = Priorities::default();
        assert_eq!(priority_for("https://example.com/category/shoes", &p), 0.8);
        assert_eq!(priority_for("https://example.com/product/42", &p), 0.6);
        assert_eq!(priority_for("https://example.com/post/hello-world", &p), 0.6);
    }

    #[test]
    fn test_everything_else_is_other() {
        let p = Priorities::default();
        assert_eq!(priority_for("https://example.com/about", &p), 0.4);
        assert_eq!(priority_for("https://example.com/contact/form", &p), 0.4);
    }

    #[test]
    fn test_first_match_wins() {
        // A path containing both /category/ and /product/ classifies as
        // category because that rule is checked first
        let p = Priorities::default();
        assert_eq!(
            priority_for("https://example.com/category/product/1", &p),
            0.8
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let p = Priorities::default();
        assert_eq!(priority_for("https://example.com/Category/shoes", &p), 0.4);
    }

    #[test]
    fn test_bare_path_input() {
        let p = Priorities::default();
        assert_eq!(priority_for("/category/boots", &p), 0.8);
    }

    #[test]
    fn test_classifier_is_idempotent() {
        let p = Priorities::default();
        let first = priority_for("https://example.com/post/a", &p);
        let second = priority_for("https://example.com/post/a", &p);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_weights_are_used() {
        let p = Priorities {
            home: 0.9,
            category: 0.5,
            product: 0.3,
            post: 0.2,
            other: 0.1,
        };
        assert_eq!(priority_for("https://example.com/", &p), 0.9);
        assert_eq!(priority_for("https://example.com/misc", &p), 0.1);
    }
}
