//! Generic markup
//!
//!     A policy is rendered through a small tree of typed nodes. Every node can render itself
//!     to HTML, plain text and Markdown, recursively, given the indentation level it starts at.
//!     Indentation is a rendering concern only: it is passed down the tree and never stored.
//!
//! Node kinds
//!
//!     | Node            | HTML                          | Plain text            | Markdown          |
//!     |-----------------|-------------------------------|-----------------------|-------------------|
//!     | Text            | escaped text                  | text                  | text              |
//!     | Link            | `<a href title>`              | `label – desc (url)`  | `[label](url)`    |
//!     | Image           | `<img src alt width height>`  | `src (alt)`           | `![alt](src)`     |
//!     | Abbreviation    | `<abbr title>`                | `short (expansion)`   | `short (expansion)` |
//!     | Concatenation   | children, one per line        | children, space-joined| children, space-joined |
//!     | DefinitionList  | `<dl>` of `<dt>`/`<dd>`       | term + indented lines | nested bullets    |
//!
//! Indentation units
//!
//!     HTML and plain text indent with one tab per level, Markdown with two spaces per level.
//!     The prefix is only written on lines that open a new block.
//!
//! Construction
//!
//!     Nodes are built with consuming builders (`Link::new(url).with_label(..)`) and are
//!     immutable afterwards. Strings convert into `Text` nodes wherever a node is expected.

pub mod abbreviation;
pub mod concatenation;
pub mod definition_list;
pub mod image;
pub mod link;
pub mod node;
pub mod text;

pub use abbreviation::Abbreviation;
pub use concatenation::Concatenation;
pub use definition_list::{DefinitionGroup, DefinitionList};
pub use image::Image;
pub use link::Link;
pub use node::MarkupNode;
pub use text::Text;

/// Indentation unit for a single level in HTML
pub const INDENTATION_UNIT_HTML: &str = "\t";

/// Indentation unit for a single level in plain text
pub const INDENTATION_UNIT_PLAIN_TEXT: &str = "\t";

/// Indentation unit for a single level in Markdown
pub const INDENTATION_UNIT_MARKDOWN: &str = "  ";

pub const SPACE: &str = " ";
pub const EN_DASH: &str = "–";
pub const MIDDLE_DOT: &str = "·";

/// Rendering contract shared by every markup node
///
/// All three operations are pure: the same node and indentation always produce the same
/// string, and rendering never fails for a tree that could be constructed.
pub trait Render {
    /// Render as HTML, starting at the given indentation level
    fn render_html(&self, indentation: usize) -> String;

    /// Render as plain text, starting at the given indentation level
    fn render_plain_text(&self, indentation: usize) -> String;

    /// Render as Markdown, starting at the given indentation level
    fn render_markdown(&self, indentation: usize) -> String;

    fn to_html(&self) -> String {
        self.render_html(0)
    }

    fn to_plain_text(&self) -> String {
        self.render_plain_text(0)
    }

    fn to_markdown(&self) -> String {
        self.render_markdown(0)
    }
}

pub(crate) fn html_indentation(level: usize) -> String {
    INDENTATION_UNIT_HTML.repeat(level)
}

pub(crate) fn plain_text_indentation(level: usize) -> String {
    INDENTATION_UNIT_PLAIN_TEXT.repeat(level)
}

pub(crate) fn markdown_indentation(level: usize) -> String {
    INDENTATION_UNIT_MARKDOWN.repeat(level)
}

/// Escape text for use in HTML content and double- or single-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_leaves_unicode_alone() {
        assert_eq!(escape_html("Datenschutzerklärung – „Sie“"), "Datenschutzerklärung – „Sie“");
    }

    #[test]
    fn test_indentation_units() {
        assert_eq!(html_indentation(2), "\t\t");
        assert_eq!(plain_text_indentation(1), "\t");
        assert_eq!(markdown_indentation(3), "      ");
        assert_eq!(markdown_indentation(0), "");
    }
}
