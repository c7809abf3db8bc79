//! The closed set of markup node kinds

use super::{Abbreviation, Concatenation, DefinitionList, Image, Link, Render, Text};
use crate::scope::Scope;

/// Any markup node that can appear as a link label, a term or a definition
///
/// Definition groups are not listed here: they only ever live inside a [`DefinitionList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Text(Text),
    Link(Link),
    Image(Image),
    Abbreviation(Abbreviation),
    Concatenation(Concatenation),
    DefinitionList(DefinitionList),
}

impl MarkupNode {
    /// Name of the node kind, as used in debug output
    pub fn node_type(&self) -> &'static str {
        match self {
            MarkupNode::Text(_) => "Text",
            MarkupNode::Link(_) => "Link",
            MarkupNode::Image(_) => "Image",
            MarkupNode::Abbreviation(_) => "Abbreviation",
            MarkupNode::Concatenation(_) => "Concatenation",
            MarkupNode::DefinitionList(_) => "DefinitionList",
        }
    }

    /// True for a text node without any content
    pub fn is_blank(&self) -> bool {
        matches!(self, MarkupNode::Text(text) if text.as_str().is_empty())
    }

    pub fn is_definition_list(&self) -> bool {
        matches!(self, MarkupNode::DefinitionList(_))
    }

    fn as_render(&self) -> &dyn Render {
        match self {
            MarkupNode::Text(node) => node,
            MarkupNode::Link(node) => node,
            MarkupNode::Image(node) => node,
            MarkupNode::Abbreviation(node) => node,
            MarkupNode::Concatenation(node) => node,
            MarkupNode::DefinitionList(node) => node,
        }
    }
}

impl Render for MarkupNode {
    fn render_html(&self, indentation: usize) -> String {
        self.as_render().render_html(indentation)
    }

    fn render_plain_text(&self, indentation: usize) -> String {
        self.as_render().render_plain_text(indentation)
    }

    fn render_markdown(&self, indentation: usize) -> String {
        self.as_render().render_markdown(indentation)
    }
}

impl From<&str> for MarkupNode {
    fn from(text: &str) -> Self {
        MarkupNode::Text(Text::new(text))
    }
}

impl From<String> for MarkupNode {
    fn from(text: String) -> Self {
        MarkupNode::Text(Text::new(text))
    }
}

impl From<Text> for MarkupNode {
    fn from(node: Text) -> Self {
        MarkupNode::Text(node)
    }
}

impl From<Link> for MarkupNode {
    fn from(node: Link) -> Self {
        MarkupNode::Link(node)
    }
}

impl From<Image> for MarkupNode {
    fn from(node: Image) -> Self {
        MarkupNode::Image(node)
    }
}

impl From<Abbreviation> for MarkupNode {
    fn from(node: Abbreviation) -> Self {
        MarkupNode::Abbreviation(node)
    }
}

impl From<Concatenation> for MarkupNode {
    fn from(node: Concatenation) -> Self {
        MarkupNode::Concatenation(node)
    }
}

impl From<DefinitionList> for MarkupNode {
    fn from(node: DefinitionList) -> Self {
        MarkupNode::DefinitionList(node)
    }
}

/// A scope is rendered through the link it describes
impl From<&Scope> for MarkupNode {
    fn from(scope: &Scope) -> Self {
        MarkupNode::Link(scope.to_link())
    }
}

impl From<Scope> for MarkupNode {
    fn from(scope: Scope) -> Self {
        MarkupNode::from(&scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_become_text_nodes() {
        let node: MarkupNode = "Cookies".into();
        assert_eq!(node, MarkupNode::Text(Text::new("Cookies")));
        let node: MarkupNode = String::from("Version").into();
        assert_eq!(node.node_type(), "Text");
    }

    #[test]
    fn test_is_blank() {
        assert!(MarkupNode::from("").is_blank());
        assert!(!MarkupNode::from(" ").is_blank());
        assert!(!MarkupNode::from(Link::new("")).is_blank());
    }

    #[test]
    fn test_enum_delegates_rendering() {
        let node = MarkupNode::from(Link::new("https://example.com/"));
        assert_eq!(
            node.to_plain_text(),
            Link::new("https://example.com/").to_plain_text()
        );
    }

    #[test]
    fn test_scope_converts_to_link() {
        let scope = Scope::website("https://www.example.com/", "example.com");
        let node = MarkupNode::from(&scope);
        assert_eq!(node.node_type(), "Link");
        assert_eq!(node.to_markdown(), "[example.com](https://www.example.com/)");
    }
}
