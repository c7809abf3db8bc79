//! Inline sequence of nodes

use super::{markdown_indentation, plain_text_indentation, MarkupNode, Render, SPACE};

/// An ordered sequence of nodes rendered one after another
///
/// HTML keeps every child as its own block at the same indentation. Plain text and Markdown
/// render children inline, separated by a single space.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Concatenation {
    elements: Vec<MarkupNode>,
}

impl Concatenation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(mut self, element: impl Into<MarkupNode>) -> Self {
        self.elements.push(element.into());
        self
    }

    pub fn elements(&self) -> &[MarkupNode] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<N: Into<MarkupNode>> FromIterator<N> for Concatenation {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Render for Concatenation {
    fn render_html(&self, indentation: usize) -> String {
        self.elements
            .iter()
            .map(|element| element.render_html(indentation))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_plain_text(&self, indentation: usize) -> String {
        let inline = self
            .elements
            .iter()
            .map(|element| element.render_plain_text(0))
            .collect::<Vec<_>>()
            .join(SPACE);
        plain_text_indentation(indentation) + &inline
    }

    fn render_markdown(&self, indentation: usize) -> String {
        let inline = self
            .elements
            .iter()
            .map(|element| element.render_markdown(0))
            .collect::<Vec<_>>()
            .join(SPACE);
        markdown_indentation(indentation) + &inline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{Abbreviation, Link};

    fn sample() -> Concatenation {
        Concatenation::new()
            .element("Art. 6(1)(a)")
            .element(Abbreviation::new("GDPR").with_expansion("General Data Protection Regulation"))
    }

    #[test]
    fn test_concatenation_plain_text_is_space_joined() {
        assert_eq!(
            sample().render_plain_text(1),
            "\tArt. 6(1)(a) GDPR (General Data Protection Regulation)"
        );
    }

    #[test]
    fn test_concatenation_html_keeps_blocks() {
        let concatenation = Concatenation::new()
            .element("Write to")
            .element(Link::new("mailto:a@b.c").with_label("a@b.c"));
        assert_eq!(
            concatenation.render_html(1),
            "\tWrite to\n\t<a href=\"mailto:a@b.c\">\n\t\ta@b.c\n\t</a>"
        );
    }

    #[test]
    fn test_concatenation_markdown() {
        let concatenation: Concatenation = vec!["a", "b", "c"].into_iter().collect();
        assert_eq!(concatenation.len(), 3);
        assert_eq!(concatenation.render_markdown(1), "  a b c");
    }

    #[test]
    fn test_empty_concatenation() {
        let concatenation = Concatenation::new();
        assert!(concatenation.is_empty());
        assert_eq!(concatenation.to_html(), "");
        assert_eq!(concatenation.to_plain_text(), "");
    }
}
