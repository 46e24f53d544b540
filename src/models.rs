// Core data structures for the sitedex crawler

use serde::{Deserialize, Serialize};

/// Plain-text view of one fetched page
///
/// Produced by the HTML parser: the visible text content of the page plus
/// every anchor `href` value in document order. Link targets are kept raw;
/// resolution against the owning page happens in the crawler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedPage {
    /// Visible text content, whitespace-normalized
    pub text: String,

    /// Raw anchor `href` values in document order
    pub links: Vec<String>,
}

/// A fetch or parse failure recorded during a crawl session
///
/// Failures are local to one URL and never abort the traversal. The reason
/// is the display string of the underlying error; no structured cause is
/// kept past this point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlFailure {
    /// The URL whose fetch or parse failed
    pub url: String,

    /// Human-readable failure description
    pub reason: String,
}

impl CrawlFailure {
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// Summary counters for a finished crawl session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlStats {
    /// Pages successfully fetched, parsed and indexed
    pub pages_indexed: usize,

    /// Pages whose fetch or parse failed
    pub pages_failed: usize,

    /// Distinct URLs dispatched for fetch (success or failure)
    pub urls_seen: usize,
}
