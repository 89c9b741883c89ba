// src/config.rs
// =============================================================================
// This module holds the crawl configuration.
//
// Configuration comes from three layers, later layers winning:
// 1. Built-in defaults (the Default impl below)
// 2. An optional JSON config file (--config path/to/file.json)
// 3. Individual CLI flags
//
// Every field carries #[serde(default)], so a config file that only sets
// the values the operator cares about still loads - missing keys fall back
// to the defaults instead of failing.
//
// The core crawl code treats the config as already validated: normalize()
// and validate() run once in main before anything touches the network.
// =============================================================================

use crate::classify::Priorities;
use crate::sitemap::ChangeFreq;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

// Everything one crawl run needs to know
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Site base URL: scheme + host, no trailing slash (normalize() trims it)
    pub base_url: String,

    /// Name of the generated file
    pub sitemap_filename: String,

    /// Directory the sitemap is written into
    pub sitemap_dir: PathBuf,

    /// Stop recording entries once this many pages are in the document
    pub max_urls: usize,

    /// Overall wall-clock budget for the crawl, in seconds.
    /// Exceeding it aborts the whole run.
    pub crawl_timeout: u64,

    /// Substring patterns; a URL containing any of them is left out
    pub exclude_paths: Vec<String>,

    /// Per-category priority weights (each 0.0 to 1.0)
    pub priorities: Priorities,

    /// changefreq label applied to every entry unless overridden
    pub default_changefreq: ChangeFreq,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        CrawlConfig {
            base_url: String::new(),
            sitemap_filename: "sitemap.xml".to_string(),
            sitemap_dir: PathBuf::from("."),
            max_urls: 50_000,
            crawl_timeout: 3600,
            exclude_paths: [
                "/admin/",
                "/login/",
                "/wp-admin/",
                "/cart/",
                "/checkout/",
                "/private/",
                ".jpg",
                ".jpeg",
                ".gif",
                ".png",
                ".pdf",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            priorities: Priorities::default(),
            default_changefreq: ChangeFreq::Weekly,
        }
    }
}

impl CrawlConfig {
    /// Loads a config from a JSON file, filling missing keys with defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;

        let config: CrawlConfig = serde_json::from_str(&text)
            .with_context(|| format!("could not parse config file {}", path.display()))?;

        Ok(config)
    }

    /// Trims the trailing slash from the base URL so path concatenation
    /// never produces "https://example.com//page"
    pub fn normalize(&mut self) {
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
    }

    // Rejects configurations the crawl cannot work with
    //
    // Checks:
    // - the base URL parses, uses http(s) and names a host
    // - every priority weight lies in [0, 1]
    // - the entry limit is at least 1
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            bail!("no base URL given (pass one as an argument or set it in the config file)");
        }

        let parsed = Url::parse(&self.base_url)
            .with_context(|| format!("invalid base URL '{}'", self.base_url))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            bail!(
                "base URL '{}' must use http or https, not '{}'",
                self.base_url,
                parsed.scheme()
            );
        }

        if parsed.host_str().is_none() {
            bail!("base URL '{}' has no host", self.base_url);
        }

        for (name, weight) in [
            ("home", self.priorities.home),
            ("category", self.priorities.category),
            ("product", self.priorities.product),
            ("post", self.priorities.post),
            ("other", self.priorities.other),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                bail!(
                    "priority '{}' is {} but must be between 0.0 and 1.0",
                    name,
                    weight
                );
            }
        }

        if self.max_urls == 0 {
            bail!("max_urls must be at least 1");
        }

        Ok(())
    }

    // Applies one --priority override of the form "name=weight",
    // e.g. "category=0.9"
    pub fn apply_priority_override(&mut self, spec: &str) -> Result<()> {
        let Some((name, weight)) = spec.split_once('=') else {
            bail!("invalid priority override '{}' (expected name=weight)", spec);
        };

        let weight: f32 = weight
            .trim()
            .parse()
            .with_context(|| format!("invalid priority weight in '{}'", spec))?;

        match name.trim() {
            "home" => self.priorities.home = weight,
            "category" => self.priorities.category = weight,
            "product" => self.priorities.product = weight,
            "post" => self.priorities.post = weight,
            "other" => self.priorities.other = weight,
            other => bail!(
                "unknown priority category '{}' (expected home, category, product, post or other)",
                other
            ),
        }

        Ok(())
    }

    /// Where the sitemap file ends up
    pub fn output_path(&self) -> PathBuf {
        self.sitemap_dir.join(&self.sitemap_filename)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[serde(default)] on the struct do?
//    - Any field missing from the JSON gets its value from Default
//    - Combined with the field-level defaults inside Priorities, a
//      one-line config file like {"base_url": "https://x.com"} just works
//
// 2. What is .with_context()?
//    - anyhow's way of wrapping an error with a human-readable message
//    - The original error stays attached underneath for debugging
//
// 3. Why validate() instead of a constructor that can't fail?
//    - The config is assembled from several layers (defaults, file, flags)
//      and only makes sense to check once it is complete
// -----------------------------------------------------------------------------
