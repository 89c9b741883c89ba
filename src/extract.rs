// src/extract.rs
// =============================================================================
// This module extracts same-host link paths from an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser), so broken or partial
//   markup never causes an error - we just recover whatever anchors we can
//
// We also use the `url` crate to:
// - Resolve relative hrefs against the site's base URL
// - Compare hosts so we never follow links off the site
//
// The output is a list of normalized PATHS (not full URLs), because the
// crawl engine keys its queue and visited set on paths. A link with no
// explicit path (e.g. href="https://example.com") normalizes to "/".
// Query strings and fragments are dropped by Url::path().
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

// Extracts all same-host link paths from HTML content
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   base: the site's base URL (for resolving relative links and
//         for the same-host check)
//
// Returns: Vec<String> of paths in document order, deduplicated
//
// Example:
//   html = "<a href='/docs'>Docs</a> <a href='https://other.com/x'>Out</a>"
//   base = https://example.com
//   result = ["/docs"]          (the cross-host link is discarded)
pub fn extract_paths(html: &str, base: &Url) -> Vec<String> {
    let mut paths = Vec::new();

    // Dedup within one page while keeping first-occurrence order,
    // so the crawl stays deterministic
    let mut seen = HashSet::new();

    // Parse the HTML into a document. This never fails - html5ever
    // builds the best tree it can out of whatever it is given.
    let document = Html::parse_document(html);

    // Create a CSS selector to find all <a> tags with an href attribute.
    // Selector::parse returns Result, so we use .unwrap() which panics on
    // error. This is OK here because our selector is a constant and known
    // to be valid.
    let selector = Selector::parse("a[href]").unwrap();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if href.is_empty() {
                continue;
            }

            // Resolve to a same-host path, or skip the link
            if let Some(path) = resolve_path(base, href) {
                if seen.insert(path.clone()) {
                    paths.push(path);
                }
            }
        }
    }

    paths
}

// Resolves one href to a normalized same-host path
//
// Parameters:
//   base: the site's base URL
//   href: the href value (might be relative, might be absolute)
//
// Returns: Some(path) for same-host http(s) links, None otherwise
//
// Examples (base = https://example.com):
//   "/docs"                    -> Some("/docs")
//   "about"                    -> Some("/about")
//   "https://example.com"      -> Some("/")       (no explicit path)
//   "https://other.com/x"      -> None            (different host)
//   "mailto:hi@example.com"    -> None            (not a page)
fn resolve_path(base: &Url, href: &str) -> Option<String> {
    // Skip anchors and special protocols
    if href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    // Url::join handles both absolute and relative hrefs:
    // absolute ones replace the base, relative ones resolve against it
    let resolved = base.join(href).ok()?;

    // Only follow web pages
    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }

    // Never leave the site: the link's host must match the base host.
    // Relative links inherit the base host, so they always pass.
    if resolved.host_str() != base.host_str() {
        return None;
    }

    // Url::path() is "/" when the URL names no explicit path, and it
    // excludes the query string and fragment
    Some(resolved.path().to_string())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return paths instead of full URLs?
//    - The crawl engine owns exactly one site (one base URL)
//    - Keying on paths makes dedup trivial: "/docs" is "/docs" no matter
//      how the page happened to write the link
//
// 2. What does base.join(href) do?
//    - The same resolution a browser does for a link on a page
//    - "https://example.com".join("/docs") = "https://example.com/docs"
//    - If href is already absolute, join just returns it parsed
//
// 3. Why does malformed HTML not need special handling?
//    - html5ever implements the browser error-recovery rules
//    - Html::parse_document always produces a tree, so the worst case is
//      that some anchors are missing - never a crash, never an Err
//
// 4. What is seen.insert(...)?
//    - HashSet::insert returns true only if the value was NOT already
//      in the set, which gives us "push the first occurrence only"
//      in a single call
// -----------------------------------------------------------------------------
