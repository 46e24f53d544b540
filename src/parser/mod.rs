//! HTML parsing and text extraction
//!
//! This module turns a raw HTML body into the plain-text view the crawler
//! indexes: the visible text content plus the anchor `href` values in
//! document order.

pub mod html;

// Re-export main parser
pub use html::PageParser;
