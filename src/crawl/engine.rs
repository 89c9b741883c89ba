// src/crawl/engine.rs
// =============================================================================
// This module implements the crawl itself: a breadth-first traversal of the
// site's internal link graph, starting from the root path.
//
// How it works:
// 1. Start with "/" in a queue
// 2. Dequeue a path, skip it if already visited, otherwise mark it visited
// 3. If the full URL matches an exclusion pattern, move on (no entry, no fetch)
// 4. Record a sitemap entry for the page
// 5. Fetch the page HTML (a failed fetch is logged and skipped, the entry stays)
// 6. Extract same-host links and queue the ones we haven't seen
// 7. Repeat until the queue empties, the entry limit is reached, or the
//    overall time budget runs out
//
// Termination:
// - Empty queue or entry limit -> normal, the document is valid (possibly
//   truncated)
// - Time budget exceeded -> fatal CrawlError::Timeout; the caller decides
//   what to do with the partial document (this tool drops it)
//
// Politeness:
// - Adds a small delay after each successful fetch to avoid overwhelming
//   the server
// - Only crawls the configured host, never external sites
//
// All crawl state (queue, visited set, start time) is created at the top of
// crawl_site and dropped at the end - nothing is shared between runs, so
// repeated or concurrent invocations can never interfere.
//
// Rust concepts:
// - HashSet: To track visited/queued paths (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first crawling
// - thiserror: Derives Display/Error for our typed error enum
// =============================================================================

use crate::config::CrawlConfig;
use crate::crawl::fetch::PageFetcher;
use crate::exclude::is_excluded;
use crate::extract::extract_paths;
use crate::sitemap::SitemapDocument;
use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};
use thiserror::Error;
use url::Url;

// The ways a crawl run can fail as a whole
//
// Note what is NOT here: a failed page fetch (logged and skipped) and
// hitting the max-entry limit (a normal termination that yields a valid,
// truncated document).
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The configured base URL does not parse to something crawlable
    #[error("invalid base URL '{0}': needs an http(s) scheme and a host")]
    InvalidBaseUrl(String),

    /// The run exceeded its wall-clock budget. Fatal: the partial document
    /// is never serialized or persisted.
    #[error("crawl exceeded the {limit:?} time budget after recording {entries} entries")]
    Timeout { limit: Duration, entries: usize },
}

// Crawls the site and returns the populated sitemap document
//
// Parameters:
//   config: validated crawl configuration (base URL, bounds, exclusions,
//           priorities, default changefreq)
//   fetcher: the page-fetch capability (HTTP in production, a fake in tests)
//
// Returns: the document with one entry per reachable, non-excluded page,
//          or CrawlError::Timeout if the time budget ran out first
pub async fn crawl_site<F: PageFetcher + Sync>(
    config: &CrawlConfig,
    fetcher: &F,
) -> Result<SitemapDocument, CrawlError> {
    // The extractor needs a parsed base URL for link resolution and the
    // same-host check. Config validation normally catches bad URLs before
    // we get here, but the engine guards its own contract too.
    let base = Url::parse(&config.base_url)
        .map_err(|_| CrawlError::InvalidBaseUrl(config.base_url.clone()))?;
    if base.host_str().is_none() {
        return Err(CrawlError::InvalidBaseUrl(config.base_url.clone()));
    }

    let mut doc = SitemapDocument::new(config.priorities.clone(), config.default_changefreq);

    // The frontier: paths discovered but not yet processed, in FIFO order
    // so the traversal is breadth-first
    let mut queue: VecDeque<String> = VecDeque::new();
    queue.push_back("/".to_string());

    // Paths that have been dequeued (whether or not they produced an entry)
    let mut visited: HashSet<String> = HashSet::new();

    // Everything ever pushed onto the queue. Checking this set instead of
    // scanning the queue keeps enqueueing O(1) without changing behavior.
    let mut enqueued: HashSet<String> = HashSet::new();
    enqueued.insert("/".to_string());

    let start = Instant::now();
    let limit = Duration::from_secs(config.crawl_timeout);

    while !queue.is_empty() && doc.len() < config.max_urls {
        // Coarse-grained deadline check, once per iteration. A single slow
        // fetch can overrun the budget until the next check fires.
        if start.elapsed() > limit {
            return Err(CrawlError::Timeout {
                limit,
                entries: doc.len(),
            });
        }

        let Some(path) = queue.pop_front() else {
            break;
        };

        // Skip if already visited (doesn't consume crawl budget)
        if visited.contains(&path) {
            continue;
        }
        visited.insert(path.clone());

        let full_url = format!("{}{}", config.base_url, path);

        // Excluded URLs stay in the visited set (so they're never re-queued)
        // but are never fetched and never recorded
        if is_excluded(&full_url, &config.exclude_paths) {
            continue;
        }

        // Record the entry BEFORE fetching: a page we can't download is
        // still a page that exists on the site
        doc.add_entry(full_url.clone(), None, None, None);

        println!("  Crawling: {}", full_url);

        let html = match fetcher.fetch(&full_url).await {
            Ok(html) => html,
            Err(e) => {
                // Non-fatal: keep the entry, skip link extraction
                eprintln!("  Warning: failed to fetch {}: {}", full_url, e);
                continue;
            }
        };

        // Queue every newly discovered same-host path
        for link in extract_paths(&html, &base) {
            if !visited.contains(&link) && !enqueued.contains(&link) {
                enqueued.insert(link.clone());
                queue.push_back(link);
            }
        }

        // Polite crawling: small delay between requests
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    Ok(doc)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why two sets (visited AND enqueued)?
//    - visited answers "has this path been dequeued?"
//    - enqueued answers "is this path anywhere in the pipeline?"
//    - Checking both before pushing means a path can never sit in the
//      queue twice, and a visited path is never pushed again
//
// 2. Why is the entry added before the fetch?
//    - The page was reached through a link, so it belongs in the sitemap
//      whether or not this particular download succeeds
//    - This matches the "failed fetch keeps its entry" contract
//
// 3. What is let-else?
//    - let Some(path) = queue.pop_front() else { break; };
//    - Binds the value when the pattern matches, otherwise runs the else
//      block - a tidy way to avoid unwrap() on an Option
// -----------------------------------------------------------------------------
