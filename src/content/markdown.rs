//! Markdown rendering

use pulldown_cmark::{html, Options, Parser};

/// Markdown-to-HTML converter
///
/// A thin wrapper over pulldown-cmark: body text in, HTML fragment out.
/// Front-matter is handled separately in `FrontMatter::parse()`.
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // Fixed syntax subset: CommonMark plus tables and strikethrough
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        Self { options }
    }

    /// Render markdown to an HTML fragment
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
