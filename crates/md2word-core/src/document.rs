//! Document state: the Markdown source and the HTML derived from it.
//!
//! HTML is a pure function of the current Markdown text. It is recomputed on
//! every text change and never updated from edits made in the preview.

use std::fmt;
use std::sync::Arc;

use markdown_weaver::{Options, Parser, html};

use crate::error::ParseError;

/// Markdown to HTML conversion. Must be pure: same text, same HTML.
pub trait MarkdownParser {
    fn parse(&self, text: &str) -> Result<String, ParseError>;
}

/// Default parser backed by `markdown-weaver`, configured close to GFM.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeaverMarkdown;

impl WeaverMarkdown {
    pub fn options() -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_GFM
    }
}

impl MarkdownParser for WeaverMarkdown {
    fn parse(&self, text: &str) -> Result<String, ParseError> {
        let parser = Parser::new_ext(text, Self::options());
        let mut html_buf = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut html_buf, parser);
        Ok(html_buf)
    }
}

/// Markdown source plus its rendered HTML.
#[derive(Clone)]
pub struct DocumentState {
    markdown: String,
    html: String,
    parser: Option<Arc<dyn MarkdownParser>>,
}

impl fmt::Debug for DocumentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentState")
            .field("markdown_len", &self.markdown.len())
            .field("html_len", &self.html.len())
            .field("has_parser", &self.parser.is_some())
            .finish()
    }
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl DocumentState {
    /// Document using the default `WeaverMarkdown` parser.
    pub fn new(markdown: impl Into<String>) -> Self {
        Self::with_parser(markdown, Some(Arc::new(WeaverMarkdown)))
    }

    /// Document with an explicit parser, or none at all.
    ///
    /// Without a parser the document still accepts text; the HTML stays empty.
    pub fn with_parser(
        markdown: impl Into<String>,
        parser: Option<Arc<dyn MarkdownParser>>,
    ) -> Self {
        let mut doc = Self {
            markdown: markdown.into(),
            html: String::new(),
            parser,
        };
        doc.rederive();
        doc
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Replace the Markdown source and re-derive the HTML.
    ///
    /// Re-derivation runs even when the text is unchanged; it is idempotent.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.markdown = text.into();
        self.rederive();
    }

    fn rederive(&mut self) {
        match self.render() {
            Ok(html) => self.html = html,
            Err(e) => {
                tracing::warn!(error = %e, "markdown render skipped, preview left empty");
                self.html.clear();
            }
        }
    }

    fn render(&self) -> Result<String, ParseError> {
        let parser = self.parser.as_ref().ok_or(ParseError::Unavailable)?;
        parser.parse(&self.markdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingParser;

    impl MarkdownParser for FailingParser {
        fn parse(&self, _text: &str) -> Result<String, ParseError> {
            Err(ParseError::Failed("boom".into()))
        }
    }

    #[test]
    fn test_heading_and_paragraph() {
        let doc = DocumentState::new("# Title\n\nHello *world*");
        assert_eq!(
            doc.html(),
            "<h1>Title</h1>\n<p>Hello <em>world</em></p>\n"
        );
    }

    #[test]
    fn test_tables_enabled() {
        let doc = DocumentState::new("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(doc.html().contains("<table>"));
        assert!(doc.html().contains("<td>1</td>"));
    }

    #[test]
    fn test_set_text_rederives() {
        let mut doc = DocumentState::new("one");
        doc.set_text("two");
        assert_eq!(doc.markdown(), "two");
        assert_eq!(doc.html(), "<p>two</p>\n");
    }

    #[test]
    fn test_missing_parser_degrades_to_empty() {
        let mut doc = DocumentState::with_parser("# hi", None);
        assert_eq!(doc.html(), "");
        doc.set_text("# still nothing");
        assert_eq!(doc.markdown(), "# still nothing");
        assert_eq!(doc.html(), "");
    }

    #[test]
    fn test_failing_parser_clears_previous_html() {
        let mut doc = DocumentState::new("text");
        assert!(!doc.html().is_empty());
        doc.parser = Some(Arc::new(FailingParser));
        doc.set_text("other");
        assert_eq!(doc.html(), "");
    }
}
