use markdown::{Constructs, Options, ParseOptions};
use spdlog::warn;

use crate::content::ContentBody;

/// Renders a markdown body to HTML. Block based bodies are not rendered.
pub fn render_body(body: Option<&ContentBody>) -> Option<String> {
    match body {
        Some(ContentBody::PlainText(md_text)) => render_markdown(md_text),
        _ => None,
    }
}

fn render_markdown(md_text: &str) -> Option<String> {
    match markdown::to_html_with_options(md_text, &render_options()) {
        Ok(html) => Some(html),
        Err(e) => {
            warn!("Error rendering markdown body, leaving it out of the feed. Desc={}", e);
            None
        }
    }
}

fn render_options() -> Options {
    let mut options = Options::gfm();
    options.parse = ParseOptions {
        constructs: Constructs {
            math_flow: true,
            math_text: true,
            ..Constructs::gfm()
        },
        ..ParseOptions::gfm()
    };
    // Posts are written by the site owner, keep their inline html
    options.compile.allow_dangerous_html = true;
    options
}
