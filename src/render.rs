use pulldown_cmark::{Parser, html};

/// Convert markdown-formatted text into HTML for embedding in a page.
///
/// CommonMark defaults cover everything the provider is asked to produce:
/// paragraphs, links, emphasis, and lists. The output is injected into the
/// answer template as-is; no sanitization pass runs on top of the conversion.
pub fn markdown_to_html(text: &str) -> String {
    let parser = Parser::new(text);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
