//! Markdown rendering for model replies

use pulldown_cmark::{Event, Options, Parser, html};

/// Render Markdown to HTML.
///
/// Raw HTML in the source is emitted as escaped text, so a reply can format
/// itself but never inject markup.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
