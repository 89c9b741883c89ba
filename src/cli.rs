// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Two subcommands:
// - generate: crawl a site and write its sitemap.xml
// - init: write a default JSON config file the operator can edit
//
// Flags mirror the configuration surface: everything that can live in the
// config file can also be set (or overridden) on the command line.
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "sitemap-forge",
    version = "0.1.0",
    about = "Crawl a website and generate a sitemap.xml for search engines",
    long_about = "sitemap-forge discovers the reachable pages of a website by following its \
                  internal links breadth-first from the root, classifies each page into a \
                  priority bucket, and writes a sitemap-protocol-0.9 XML document."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (generate, init)
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a website and write its sitemap
    ///
    /// Example: sitemap-forge generate https://example.com --max-urls 500
    Generate {
        /// Website base URL (e.g., https://example.com).
        /// Optional when the config file sets base_url.
        base_url: Option<String>,

        /// JSON config file to load before applying any flags
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory to write the sitemap into (default: current directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Name of the generated file (default: sitemap.xml)
        #[arg(long)]
        filename: Option<String>,

        /// Stop after recording this many pages (default: 50000)
        #[arg(long)]
        max_urls: Option<usize>,

        /// Abort the whole run after this many seconds (default: 3600)
        #[arg(long)]
        timeout: Option<u64>,

        /// Exclusion pattern - a substring that disqualifies any URL
        /// containing it. Repeatable; when given, replaces the configured
        /// list entirely.
        #[arg(long = "exclude")]
        exclude: Vec<String>,

        /// Priority override as name=weight (e.g., --priority category=0.9).
        /// Repeatable. Categories: home, category, product, post, other.
        #[arg(long = "priority")]
        priority: Vec<String>,

        /// changefreq label applied to every entry
        /// (always, hourly, daily, weekly, monthly, yearly, never)
        #[arg(long)]
        changefreq: Option<String>,

        /// Extra URL to append to the sitemap after the crawl, verbatim -
        /// no exclusion filtering, no visited bookkeeping. Repeatable.
        #[arg(long = "extra-url")]
        extra_url: Vec<String>,
    },

    /// Write a default config file to edit and pass back via --config
    ///
    /// Example: sitemap-forge init mysite.json
    Init {
        /// Where to write the config file
        #[arg(default_value = "sitemap-forge.json")]
        path: PathBuf,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<T> for most flags?
//    - None means "the flag wasn't given", so main knows whether to keep
//      the config-file value or override it
//    - A plain default here would make it impossible to tell the two apart
//
// 2. Why Vec<String> for --exclude and --priority?
//    - clap collects every occurrence of a repeatable flag into the Vec
//    - --exclude .pdf --exclude /admin/ gives vec![".pdf", "/admin/"]
//
// 3. Why is base_url positional AND optional?
//    - The common case is `generate https://example.com` with no config
//      file, but an operator driving everything from JSON shouldn't have
//      to repeat the URL on the command line
// -----------------------------------------------------------------------------
