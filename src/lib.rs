//! sitedex - Same-site web crawler with keyword search
//!
//! Fetches the pages reachable from a seed URL by following same-site
//! hyperlinks, extracts the visible text of each page into an in-memory
//! index keyed by URL, and answers exact-substring keyword queries over
//! that index.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`crawler`] - Traversal policy: visited set, link resolution, scoping
//! - [`parser`] - HTML parsing and visible-text extraction
//! - [`index`] - In-memory URL-to-text index with substring search
//! - [`report`] - Search result formatting
//! - [`models`] - Core data structures and types
//! - [`utils`] - Common utilities and helpers
//!
//! # Example
//!
//! ```no_run
//! use sitedex::config::Config;
//! use sitedex::crawler::Crawler;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let mut crawler = Crawler::new(&config.crawler)?;
//!     crawler.crawl("https://example.com").await;
//!
//!     for url in crawler.index().search("test") {
//!         println!("{url}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod crawler;
pub mod index;
pub mod models;
pub mod parser;
pub mod report;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::crawler::Crawler;
    pub use crate::index::PageIndex;
    pub use crate::models::{CrawlFailure, CrawlStats, ParsedPage};
    pub use crate::utils::error::{CrawlerError, FetchError, ParseError};
}

// Direct re-exports for convenience
pub use models::{CrawlFailure, CrawlStats, ParsedPage};
