// src/sitemap/mod.rs
// =============================================================================
// This module holds the in-memory sitemap document.
//
// Submodules:
// - xml: serializes the document to sitemap-protocol-0.9 XML
//
// A SitemapDocument is just an ordered list of page entries. Entries are
// appended in discovery order and never removed, merged or reordered -
// sitemap readers may treat document order as a weak relevance signal, so
// we preserve it all the way to the serialized output.
//
// Each entry carries the four fields the sitemap protocol defines per URL:
//   <loc>        the absolute page URL
//   <lastmod>    a calendar date (YYYY-MM-DD, no time component)
//   <changefreq> one of a fixed set of labels (always .. never)
//   <priority>   a weight between 0.0 and 1.0
// =============================================================================

mod xml;

use crate::classify::{priority_for, Priorities};
use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// How frequently a page is expected to change
//
// These are the exact labels the sitemap protocol allows. Search engines
// treat them as hints, not commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    /// The lowercase label used in the XML output
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFreq {
    type Err = anyhow::Error;

    // Parses the CLI / config label. Only the seven protocol values are
    // accepted; anything else is a configuration error.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "always" => Ok(ChangeFreq::Always),
            "hourly" => Ok(ChangeFreq::Hourly),
            "daily" => Ok(ChangeFreq::Daily),
            "weekly" => Ok(ChangeFreq::Weekly),
            "monthly" => Ok(ChangeFreq::Monthly),
            "yearly" => Ok(ChangeFreq::Yearly),
            "never" => Ok(ChangeFreq::Never),
            other => Err(anyhow!(
                "invalid changefreq '{}' (expected always, hourly, daily, weekly, monthly, yearly or never)",
                other
            )),
        }
    }
}

// One page's sitemap record
//
// Never mutated after creation - add_entry builds it once with all
// defaults applied and pushes it onto the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageEntry {
    /// Absolute page URL
    pub loc: String,
    /// Last-modified date (calendar date, no time component)
    pub lastmod: NaiveDate,
    /// How often the page is expected to change
    pub changefreq: ChangeFreq,
    /// Relative importance, 0.0 to 1.0
    pub priority: f32,
}

// The ordered collection of page entries produced by one crawl
//
// The document owns the defaults (priority weights, changefreq label) so
// that add_entry can fill in whatever the caller leaves as None.
#[derive(Debug, Clone)]
pub struct SitemapDocument {
    entries: Vec<PageEntry>,
    priorities: Priorities,
    default_changefreq: ChangeFreq,
}

impl SitemapDocument {
    /// Creates an empty document with the given defaults
    pub fn new(priorities: Priorities, default_changefreq: ChangeFreq) -> Self {
        SitemapDocument {
            entries: Vec::new(),
            priorities,
            default_changefreq,
        }
    }

    // Appends one entry, filling in defaults for anything not supplied
    //
    // Defaults:
    //   priority   -> the URL classifier's result for loc
    //   changefreq -> the document's configured default label
    //   lastmod    -> today's date (the date the crawl runs - deliberately
    //                 NOT a per-page modification date)
    //
    // This is also the manual-insertion path: callers outside the crawl
    // loop can add any URL unconditionally, with no exclusion filtering
    // and no visited-set bookkeeping.
    pub fn add_entry(
        &mut self,
        loc: impl Into<String>,
        priority: Option<f32>,
        changefreq: Option<ChangeFreq>,
        lastmod: Option<NaiveDate>,
    ) {
        let loc = loc.into();

        self.entries.push(PageEntry {
            priority: priority.unwrap_or_else(|| priority_for(&loc, &self.priorities)),
            changefreq: changefreq.unwrap_or(self.default_changefreq),
            lastmod: lastmod.unwrap_or_else(|| Local::now().date_naive()),
            loc,
        });
    }

    /// Number of entries recorded so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in discovery order
    pub fn entries(&self) -> &[PageEntry] {
        &self.entries
    }

    /// Serializes the document to a pretty-printed sitemap-0.9 XML string
    ///
    /// Pure formatting - no I/O happens here. Writing the bytes somewhere
    /// is the caller's job.
    pub fn to_xml(&self) -> Result<String> {
        xml::write_urlset(&self.entries)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is impl Into<String>?
//    - A generic bound: the caller can pass &str, String, or anything
//      convertible into a String
//    - Saves callers from writing .to_string() everywhere
//
// 2. Why unwrap_or_else instead of unwrap_or?
//    - unwrap_or(value) evaluates the value even when it isn't needed
//    - unwrap_or_else(|| ...) only runs the closure when the Option is
//      None, so we don't classify the URL or read the clock for nothing
//
// 3. What is NaiveDate?
//    - A calendar date without a time zone or time of day
//    - Exactly what <lastmod> needs in its YYYY-MM-DD form
// -----------------------------------------------------------------------------
