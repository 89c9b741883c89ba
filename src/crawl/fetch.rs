// src/crawl/fetch.rs
// =============================================================================
// This module defines how the crawl engine gets page bodies.
//
// The engine never assumes a specific transport: it talks to a PageFetcher
// trait, and the binary plugs in the real HTTP implementation. Tests plug
// in an in-memory fake instead, so the whole traversal can be exercised
// without a network.
//
// Rust concepts:
// - Traits: Rust's interfaces - a contract any fetcher must satisfy
// - async-trait: async functions in traits need this helper macro
// =============================================================================

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

// The fetch capability the crawl engine depends on
//
// One method: absolute URL in, page body out (or an error). Any failure -
// network trouble, a non-success status code - is reported as Err and the
// engine treats it as non-fatal.
#[async_trait]
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String>;
}

// The real implementation: fetches pages over HTTP(S) with reqwest
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the fetcher with a shared client
    //
    // The client is created once and reused for every request, which gives
    // us connection pooling for free. The 10 second timeout is per request;
    // the overall crawl deadline is enforced separately by the engine.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("sitemap-forge/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(HttpFetcher { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        // A page that answers 404 or 500 has no links worth extracting
        if !response.status().is_success() {
            return Err(anyhow!("HTTP {}", response.status()));
        }

        let html = response.text().await?;
        Ok(html)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of passing a Client around?
//    - The engine's contract is "URL in, body or failure out" - nothing
//      about HTTP. A trait keeps that boundary explicit and lets the
//      engine tests use a HashMap-backed fake site
//
// 2. What does #[async_trait] do?
//    - Plain Rust traits can't have async methods that work as trait
//      objects, so this macro rewrites them to return boxed futures
//    - The same pattern shows up in most async Rust codebases
// -----------------------------------------------------------------------------
