//! In-memory text index with keyword search
//!
//! This module stores the text extracted from successfully crawled pages,
//! keyed by URL, and answers exact-substring keyword queries over it. The
//! index is independent of the crawler and lives for one crawl session;
//! there is no deletion and no persistence.

use std::collections::HashMap;

/// Insertion-ordered mapping from URL to extracted page text
///
/// Iteration and search results follow insertion order, which makes query
/// output deterministic for a given crawl.
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    /// URLs in insertion order
    order: Vec<String>,

    /// Page text keyed by URL
    pages: HashMap<String, String>,
}

impl PageIndex {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a page into the index
    ///
    /// A URL already present keeps its original text and position; the
    /// crawler only ever inserts each URL once, so this is a no-op guard
    /// rather than an update path.
    pub fn insert(&mut self, url: impl Into<String>, text: impl Into<String>) {
        let url = url.into();
        if self.pages.contains_key(&url) {
            return;
        }
        self.order.push(url.clone());
        self.pages.insert(url, text.into());
    }

    /// Get the stored text for a URL
    pub fn get(&self, url: &str) -> Option<&str> {
        self.pages.get(url).map(String::as_str)
    }

    /// Check whether a URL has been indexed
    pub fn contains(&self, url: &str) -> bool {
        self.pages.contains_key(url)
    }

    /// Number of indexed pages
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over `(url, text)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().filter_map(|url| {
            self.pages
                .get(url)
                .map(|text| (url.as_str(), text.as_str()))
        })
    }

    /// Find all pages whose text contains the keyword
    ///
    /// The match is a case-insensitive substring test; there is no ranking,
    /// scoring or fuzzy matching. Results are returned in insertion order.
    /// An empty keyword matches every indexed page.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitedex::index::PageIndex;
    ///
    /// let mut index = PageIndex::new();
    /// index.insert("https://a.test/", "This page contains keyword");
    /// index.insert("https://b.test/", "This one does not");
    ///
    /// assert_eq!(index.search("Keyword"), vec!["https://a.test/"]);
    /// ```
    pub fn search(&self, keyword: &str) -> Vec<&str> {
        let needle = keyword.to_lowercase();
        self.iter()
            .filter(|(_, text)| text.to_lowercase().contains(&needle))
            .map(|(url, _)| url)
            .collect()
    }
}
