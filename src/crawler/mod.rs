//! Same-site crawl traversal
//!
//! This module implements the core crawling logic: starting from a seed URL
//! it walks the same-site link graph depth-first, feeding extracted page
//! text into the index and recording failures without aborting traversal.

pub mod fetcher;
pub mod url;

use std::collections::HashSet;

use crate::config::CrawlerConfig;
use crate::index::PageIndex;
use crate::models::{CrawlFailure, CrawlStats, ParsedPage};
use crate::parser::PageParser;
use crate::utils::error::CrawlerError;
use self::fetcher::PageFetcher;

/// One crawl session
///
/// Owns the visited set, the page index and the recorded failures. All
/// three live exactly as long as the session; nothing is shared or static.
///
/// The traversal uses an explicit work-list rather than call-stack
/// recursion, so arbitrarily deep or cyclic sites cannot exhaust the stack.
/// Popping from the list reproduces the pre-order a recursive depth-first
/// walk would visit: a page's first link and everything reachable from it
/// are exhausted before the page's second link.
pub struct Crawler {
    fetcher: PageFetcher,
    parser: PageParser,

    /// URLs already dispatched for fetch, successful or not
    visited: HashSet<String>,

    /// Text of successfully fetched pages, keyed by URL
    index: PageIndex,

    /// Fetch/parse failures recorded during traversal
    failures: Vec<CrawlFailure>,
}

impl Crawler {
    /// Create a new crawl session
    ///
    /// # Errors
    ///
    /// Returns `CrawlerError` if the HTTP client or the HTML parser cannot
    /// be constructed.
    pub fn new(config: &CrawlerConfig) -> Result<Self, CrawlerError> {
        let fetcher = PageFetcher::new(config)?;
        let parser = PageParser::new()?;

        Ok(Self {
            fetcher,
            parser,
            visited: HashSet::new(),
            index: PageIndex::new(),
            failures: Vec::new(),
        })
    }

    /// Crawl the site reachable from `seed`, scoped to the seed itself
    pub async fn crawl(&mut self, seed: &str) {
        self.crawl_scoped(seed, seed).await;
    }

    /// Crawl the site reachable from `seed` with an explicit scope root
    ///
    /// A discovered link is followed only when its resolved URL contains
    /// `scope_root` as a substring (see [`url::in_scope`]). The scope root
    /// is fixed for the whole traversal.
    ///
    /// Every URL is fetched at most once: it is marked visited before the
    /// fetch, so self-links and cycles terminate. A fetch or parse failure
    /// is recorded, the URL stays out of the index, and the traversal
    /// continues with the next pending URL.
    pub async fn crawl_scoped(&mut self, seed: &str, scope_root: &str) {
        let mut pending = vec![seed.to_string()];

        while let Some(current) = pending.pop() {
            if self.visited.contains(&current) {
                continue;
            }
            self.visited.insert(current.clone());

            let page = match self.fetch_page(&current).await {
                Ok(page) => page,
                Err(e) => {
                    let reason = e.to_string();
                    tracing::debug!(url = %current, error = %reason, "page crawl failed");
                    self.failures.push(CrawlFailure::new(current, reason));
                    continue;
                }
            };

            tracing::debug!(url = %current, links = page.links.len(), "page indexed");

            // Push in reverse so the first link on the page is followed
            // first, matching depth-first discovery order.
            for href in page.links.iter().rev() {
                if href.is_empty() {
                    continue;
                }
                let Some(resolved) = url::resolve(href, &current) else {
                    continue;
                };
                if url::in_scope(&resolved, scope_root) {
                    pending.push(resolved);
                }
            }

            self.index.insert(current, page.text);
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<ParsedPage, CrawlerError> {
        let body = self.fetcher.fetch(url).await?;
        Ok(self.parser.parse(&body))
    }

    /// The index of successfully crawled pages
    pub fn index(&self) -> &PageIndex {
        &self.index
    }

    /// URLs dispatched for fetch during this session
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    /// Failures recorded during this session
    pub fn failures(&self) -> &[CrawlFailure] {
        &self.failures
    }

    /// Summary counters for this session
    pub fn stats(&self) -> CrawlStats {
        CrawlStats {
            pages_indexed: self.index.len(),
            pages_failed: self.failures.len(),
            urls_seen: self.visited.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawler_creation() {
        let crawler = Crawler::new(&CrawlerConfig::default());
        assert!(crawler.is_ok());
    }

    #[test]
    fn test_new_session_is_empty() {
        let crawler = Crawler::new(&CrawlerConfig::default()).unwrap();
        assert!(crawler.index().is_empty());
        assert!(crawler.visited().is_empty());
        assert!(crawler.failures().is_empty());
        assert_eq!(crawler.stats(), CrawlStats::default());
    }
}
