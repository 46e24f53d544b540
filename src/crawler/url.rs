//! Link resolution and crawl-scope checks
//!
//! This module decides what a raw anchor `href` means relative to the page
//! it appeared on, and whether the resolved URL belongs to the site being
//! crawled.

use url::Url;

/// Check whether a raw href carries its own network location
///
/// A target with a network location (`https://host/...`, `//host/...`) is
/// treated as already absolute by the crawler; anything else is resolved
/// against the owning page's URL.
///
/// # Examples
///
/// ```
/// use sitedex::crawler::url::has_network_location;
///
/// assert!(has_network_location("https://example.com/about"));
/// assert!(has_network_location("//cdn.example.com/lib.js"));
/// assert!(!has_network_location("/about"));
/// assert!(!has_network_location("docs/intro.html"));
/// ```
pub fn has_network_location(href: &str) -> bool {
    if href.starts_with("//") {
        return true;
    }
    Url::parse(href).map(|u| u.has_host()).unwrap_or(false)
}

/// Resolve a raw href against the URL of the page it appeared on
///
/// A target with a network location is returned verbatim; a relative target
/// is joined onto the base with standard base-relative resolution. Returns
/// `None` when the base cannot be parsed or the join fails, in which case
/// the crawler drops the link.
///
/// # Examples
///
/// ```
/// use sitedex::crawler::url::resolve;
///
/// let absolute = resolve("/about", "https://example.com/").unwrap();
/// assert_eq!(absolute, "https://example.com/about");
///
/// let external = resolve("https://other.test/page", "https://example.com/").unwrap();
/// assert_eq!(external, "https://other.test/page");
/// ```
pub fn resolve(href: &str, base: &str) -> Option<String> {
    if has_network_location(href) {
        return Some(href.to_string());
    }

    let base_url = Url::parse(base).ok()?;
    base_url.join(href).ok().map(String::from)
}

/// Check whether a resolved URL is inside the crawl scope
///
/// The test is literal substring containment of the scope root anywhere in
/// the URL, not host equality. The scope root `example.com` therefore also
/// matches `https://evil.test/?ref=example.com`. This loose containment is
/// the compatibility contract for scope decisions; callers wanting stricter
/// scoping must narrow the scope root itself.
///
/// # Examples
///
/// ```
/// use sitedex::crawler::url::in_scope;
///
/// assert!(in_scope("https://example.com/about", "https://example.com"));
/// assert!(!in_scope("https://other.test/page", "https://example.com"));
/// ```
pub fn in_scope(url: &str, scope_root: &str) -> bool {
    url.contains(scope_root)
}
