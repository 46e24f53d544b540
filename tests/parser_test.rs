//! Integration tests for the HTML page parser

use sitedex::parser::PageParser;

fn parser() -> PageParser {
    PageParser::new().unwrap()
}

#[test]
fn test_full_document_extraction() {
    let html = r#"<!DOCTYPE html>
<html>
<head>
    <title>Sample</title>
    <style>.hidden { display: none; }</style>
    <script>console.log("tracking");</script>
</head>
<body>
    <nav><a href="/">Home</a><a href="/docs">Docs</a></nav>
    <main>
        <h1>Getting started</h1>
        <p>Install the tool and run it against your site.</p>
        <a href="intro.html">Introduction</a>
    </main>
    <footer><a href="https://external.invalid/imprint">Imprint</a></footer>
</body>
</html>"#;

    let page = parser().parse(html);

    assert!(page.text.contains("Getting started"));
    assert!(page.text.contains("Install the tool"));
    assert!(!page.text.contains("tracking"));
    assert!(!page.text.contains("display: none"));
    assert_eq!(
        page.links,
        vec![
            "/",
            "/docs",
            "intro.html",
            "https://external.invalid/imprint"
        ]
    );
}

#[test]
fn test_entities_are_decoded() {
    let html = "<p>Fish &amp; Chips &lt;daily&gt;</p>";
    let page = parser().parse(html);
    assert_eq!(page.text, "Fish & Chips <daily>");
}

#[test]
fn test_nested_anchor_text_is_visible() {
    let html = r#"<p>See <a href="/more">the <em>full</em> story</a> here</p>"#;
    let page = parser().parse(html);
    assert_eq!(page.text, "See the full story here");
    assert_eq!(page.links, vec!["/more"]);
}

#[test]
fn test_duplicate_hrefs_are_kept() {
    // Deduplication is the crawler's job, not the parser's
    let html = r#"<a href="/p">one</a><a href="/p">two</a>"#;
    let page = parser().parse(html);
    assert_eq!(page.links, vec!["/p", "/p"]);
}

#[test]
fn test_unclosed_tags_still_parse() {
    let html = r#"<html><body><p>first<p>second<a href="/x">x"#;
    let page = parser().parse(html);
    assert!(page.text.contains("first"));
    assert!(page.text.contains("second"));
    assert_eq!(page.links, vec!["/x"]);
}

#[test]
fn test_non_html_body_is_plain_text() {
    // A parser fed non-HTML degrades to treating it as text
    let page = parser().parse("just some plain text, no markup");
    assert_eq!(page.text, "just some plain text, no markup");
    assert!(page.links.is_empty());
}
