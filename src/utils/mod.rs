//! Common utilities and helper functions
//!
//! This module provides shared utilities used across the application.

pub mod error;

use regex::Regex;
use std::sync::OnceLock;

/// Normalize whitespace in text
///
/// Collapses any run of whitespace (spaces, tabs, newlines) into a single
/// space and trims leading/trailing whitespace.
///
/// # Examples
///
/// ```
/// use sitedex::utils::normalize_whitespace;
///
/// let text = "  Hello \t\n  World  ";
/// assert_eq!(normalize_whitespace(text), "Hello World");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();

    let re = WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").expect("Invalid regex pattern"));

    re.replace_all(text.trim(), " ").to_string()
}
