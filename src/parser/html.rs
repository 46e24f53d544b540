//! HTML page parser
//!
//! Extracts the visible text of a page and the raw targets of its anchor
//! elements. Malformed markup degrades to best-effort extraction; the parser
//! never rejects a document.

use ego_tree::NodeRef;
use scraper::{node::Node, Html, Selector};

use crate::models::ParsedPage;
use crate::utils::error::ParseError;
use crate::utils::normalize_whitespace;

/// Elements whose text content is not rendered on the page
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// HTML parser producing the plain-text view of a page
///
/// Selectors are compiled once at construction and reused for every page.
pub struct PageParser {
    anchors: Selector,
}

impl PageParser {
    /// Create a new parser with compiled selectors
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Selector` if a selector fails to compile.
    pub fn new() -> Result<Self, ParseError> {
        let anchors = Selector::parse("a").map_err(|e| ParseError::Selector(e.to_string()))?;
        Ok(Self { anchors })
    }

    /// Parse a raw HTML body into text and link targets
    ///
    /// The text is the concatenation of all visible text nodes (script and
    /// style subtrees excluded), whitespace-normalized. Links are the `href`
    /// attribute values of every anchor element, in document order; anchors
    /// without an `href` contribute nothing. Targets are returned raw,
    /// including empty and off-site values; filtering is the crawler's job.
    pub fn parse(&self, html: &str) -> ParsedPage {
        let document = Html::parse_document(html);

        let mut text = String::new();
        collect_visible_text(*document.root_element(), &mut text);

        let links = document
            .select(&self.anchors)
            .filter_map(|anchor| anchor.value().attr("href"))
            .map(str::to_string)
            .collect();

        ParsedPage {
            text: normalize_whitespace(&text),
            links,
        }
    }
}

/// Append the text of all visible descendants of `node` to `out`
fn collect_visible_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&text),
            Node::Element(element) => {
                if !HIDDEN_ELEMENTS.contains(&element.name()) {
                    collect_visible_text(child, out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> PageParser {
        PageParser::new().unwrap()
    }

    #[test]
    fn test_extracts_text_and_links() {
        let html = r#"
            <html><body>
                <h1>Welcome!</h1>
                <a href="/about">About Us</a>
                <a href="https://external.test">External Link</a>
            </body></html>
        "#;
        let page = parser().parse(html);

        assert!(page.text.contains("Welcome!"));
        assert!(page.text.contains("About Us"));
        assert_eq!(page.links, vec!["/about", "https://external.test"]);
    }

    #[test]
    fn test_links_in_document_order() {
        let html = r#"
            <p><a href="/first">1</a></p>
            <div><a href="/second">2</a><a href="/third">3</a></div>
        "#;
        let page = parser().parse(html);
        assert_eq!(page.links, vec!["/first", "/second", "/third"]);
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = r#"<a name="top">anchor</a><a href="/real">link</a>"#;
        let page = parser().parse(html);
        assert_eq!(page.links, vec!["/real"]);
    }

    #[test]
    fn test_empty_href_is_kept_raw() {
        let html = r#"<a href="">empty</a>"#;
        let page = parser().parse(html);
        assert_eq!(page.links, vec![""]);
    }

    #[test]
    fn test_script_and_style_text_excluded() {
        let html = r#"
            <html><head>
                <style>body { color: red; }</style>
                <script>var hidden = "secret";</script>
            </head><body>Visible content</body></html>
        "#;
        let page = parser().parse(html);

        assert!(page.text.contains("Visible content"));
        assert!(!page.text.contains("secret"));
        assert!(!page.text.contains("color"));
    }

    #[test]
    fn test_text_is_whitespace_normalized() {
        let html = "<p>Hello\n\n   World</p>";
        let page = parser().parse(html);
        assert_eq!(page.text, "Hello World");
    }

    #[test]
    fn test_malformed_markup_degrades_gracefully() {
        let html = r#"<div><a href="/broken">unclosed <p>still here"#;
        let page = parser().parse(html);

        assert!(page.text.contains("still here"));
        assert_eq!(page.links, vec!["/broken"]);
    }

    #[test]
    fn test_empty_document() {
        let page = parser().parse("");
        assert_eq!(page.text, "");
        assert!(page.links.is_empty());
    }
}
