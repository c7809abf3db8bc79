//! Text node

use super::{escape_html, html_indentation, markdown_indentation, plain_text_indentation, Render};
use std::fmt;

/// A literal run of text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Render for Text {
    fn render_html(&self, indentation: usize) -> String {
        let mut out = html_indentation(indentation);
        out.push_str(&escape_html(&self.text));
        out
    }

    fn render_plain_text(&self, indentation: usize) -> String {
        let mut out = plain_text_indentation(indentation);
        out.push_str(&self.text);
        out
    }

    fn render_markdown(&self, indentation: usize) -> String {
        let mut out = markdown_indentation(indentation);
        out.push_str(&self.text);
        out
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
