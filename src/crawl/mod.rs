// src/crawl/mod.rs
// =============================================================================
// This module handles the website crawl.
//
// Submodules:
// - engine: the breadth-first traversal loop and its error type
// - fetch: the PageFetcher trait and the reqwest-backed implementation
//
// The split keeps the traversal logic transport-free: the engine only ever
// sees "URL in, body or failure out", which is also what makes the whole
// crawl testable against an in-memory fake site.
// =============================================================================

mod engine;
mod fetch;

// Re-export the pieces the rest of the application uses. PageFetcher
// itself stays internal: outside this module only the concrete HttpFetcher
// is ever named.
pub use engine::{crawl_site, CrawlError};
pub use fetch::HttpFetcher;
