//! Search result presentation
//!
//! Pure formatting of a search result sequence onto an output stream; no
//! state and no side effects beyond the writes.

use std::io::{self, Write};

/// Render search results onto a writer
///
/// A non-empty sequence produces a header followed by one line per URL; an
/// empty sequence produces a single "no results" line and never the header.
///
/// # Errors
///
/// Propagates any I/O error from the underlying writer.
///
/// # Examples
///
/// ```
/// use sitedex::report::render_results;
///
/// let mut out = Vec::new();
/// render_results(&["https://example.com/about"], &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(text, "Search results:\n- https://example.com/about\n");
/// ```
pub fn render_results<W: Write>(results: &[&str], out: &mut W) -> io::Result<()> {
    if results.is_empty() {
        writeln!(out, "No results found.")?;
        return Ok(());
    }

    writeln!(out, "Search results:")?;
    for url in results {
        writeln!(out, "- {url}")?;
    }
    Ok(())
}
