// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Assemble the crawl configuration (defaults -> config file -> flags)
// 3. Run the crawl and serialize the resulting sitemap document
// 4. Write the bytes to disk and report the result
// 5. Exit with proper code (0 = success, 1 = crawl failed, 2 = error)
//
// The crawl engine itself never touches the filesystem: it hands back a
// document, and everything around it - checking the output directory,
// writing the file, printing status - happens here.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod classify; // src/classify.rs - URL priority classification
mod config; // src/config.rs - crawl configuration
mod crawl; // src/crawl/ - the traversal engine and page fetcher
mod exclude; // src/exclude.rs - URL exclusion patterns
mod extract; // src/extract.rs - HTML link extraction
mod sitemap; // src/sitemap/ - document model and XML serializer

// Import items we need from our modules
use cli::{Cli, Commands};
use clap::Parser; // Parser trait enables the parse() method
use config::CrawlConfig;
use crawl::{crawl_site, CrawlError, HttpFetcher};
use sitemap::ChangeFreq;
use std::path::Path;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{bail, Context, Result};

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = sitemap generated
//   Ok(1) = crawl failed (e.g. time budget exceeded)
//   Err = unexpected error (exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            base_url,
            config,
            output_dir,
            filename,
            max_urls,
            timeout,
            exclude,
            priority,
            changefreq,
            extra_url,
        } => {
            // Layer the configuration: defaults, then file, then flags
            let mut cfg = match config {
                Some(path) => CrawlConfig::load(&path)?,
                None => CrawlConfig::default(),
            };

            if let Some(url) = base_url {
                cfg.base_url = url;
            }
            if let Some(dir) = output_dir {
                cfg.sitemap_dir = dir;
            }
            if let Some(name) = filename {
                cfg.sitemap_filename = name;
            }
            if let Some(n) = max_urls {
                cfg.max_urls = n;
            }
            if let Some(secs) = timeout {
                cfg.crawl_timeout = secs;
            }
            // --exclude replaces the configured list entirely rather than
            // appending to it, so one flag can mean "no exclusions but this"
            if !exclude.is_empty() {
                cfg.exclude_paths = exclude;
            }
            for spec in &priority {
                cfg.apply_priority_override(spec)?;
            }
            if let Some(label) = changefreq {
                cfg.default_changefreq = label.parse::<ChangeFreq>()?;
            }

            cfg.normalize();
            cfg.validate()?;

            handle_generate(cfg, extra_url).await
        }
        Commands::Init { path } => handle_init(&path),
    }
}

// Handles the 'generate' subcommand: crawl, serialize, write, report
async fn handle_generate(config: CrawlConfig, extra_urls: Vec<String>) -> Result<i32> {
    println!("🔍 Crawling website: {}", config.base_url);
    println!(
        "📊 Limits: {} URLs max, {} second time budget",
        config.max_urls, config.crawl_timeout
    );

    let fetcher = HttpFetcher::new()?;

    // A crawl failure is a failed RUN, not a program bug: report it and
    // exit 1. On timeout the partial document is dropped - a half-crawled
    // sitemap would silently hide pages from search engines.
    let mut doc = match crawl_site(&config, &fetcher).await {
        Ok(doc) => doc,
        Err(CrawlError::Timeout { limit, entries }) => {
            eprintln!(
                "❌ Crawl timed out after {:?}; {} page(s) were recorded but nothing was written",
                limit, entries
            );
            return Ok(1);
        }
        Err(e) => {
            eprintln!("❌ Crawl failed: {}", e);
            return Ok(1);
        }
    };

    // Manual entries bypass the crawl entirely: no exclusion filtering,
    // no visited bookkeeping, appended exactly as given
    for url in &extra_urls {
        doc.add_entry(url.clone(), None, None, None);
    }

    println!("📄 Recorded {} page(s)", doc.len());

    // Serialize first, then deal with the filesystem
    let xml = doc.to_xml()?;

    // The engine never checks the destination - that's this layer's job
    if !config.sitemap_dir.is_dir() {
        bail!(
            "output directory {} does not exist",
            config.sitemap_dir.display()
        );
    }

    let output_path = config.output_path();
    std::fs::write(&output_path, xml.as_bytes())
        .with_context(|| format!("could not write {}", output_path.display()))?;

    println!(
        "✅ Sitemap written to {} ({:.2} KB)",
        output_path.display(),
        xml.len() as f64 / 1024.0
    );

    Ok(0)
}

// Handles the 'init' subcommand: write a default config file
fn handle_init(path: &Path) -> Result<i32> {
    // Refuse to clobber an existing config - the operator may have spent
    // real time tuning it
    if path.exists() {
        bail!("{} already exists, not overwriting it", path.display());
    }

    let defaults = CrawlConfig::default();
    let json = serde_json::to_string_pretty(&defaults)?;
    std::fs::write(path, json)
        .with_context(|| format!("could not write {}", path.display()))?;

    println!("✅ Default config written to {}", path.display());
    println!("   Edit it (base_url at minimum), then run:");
    println!("   sitemap-forge generate --config {}", path.display());

    Ok(0)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does run() return Result<i32> instead of exiting directly?
//    - Keeping process::exit in one place (main) means destructors run
//      normally everywhere else
//    - It also makes the exit-code policy easy to read: 0 ok, 1 failed
//      run, 2 unexpected error
//
// 2. What is {:#} in eprintln!("Error: {:#}", e)?
//    - anyhow's "alternate" formatting: prints the error AND the chain of
//      contexts attached with .with_context()
//
// 3. Why crawl first and check the directory after?
//    - Serialization only happens after a crawl that terminated normally,
//      so a timed-out run never leaves a half-written sitemap behind
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // A compile-time-ish sanity check that the CLI definition is coherent
    // (conflicting flags, duplicate names, etc. panic here, not in prod)
    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_init_writes_a_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let code = handle_init(&path).unwrap();
        assert_eq!(code, 0);

        let loaded = CrawlConfig::load(&path).unwrap();
        assert_eq!(loaded.max_urls, 50_000);

        // A second init against the same path must refuse
        assert!(handle_init(&path).is_err());
    }
}
