//! Markdown rendering for profile text.

use pulldown_cmark::{Options, Parser, html};

/// Render a Markdown string to HTML.
///
/// Raw HTML in the input is passed through, so only trusted, compiled-in
/// text should be rendered here.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Render a sequence of Markdown paragraphs as one HTML fragment.
pub fn render_paragraphs(paragraphs: &[&str]) -> String {
    render_markdown(&paragraphs.join("\n\n"))
}
