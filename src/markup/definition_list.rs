//! Definition lists
//!
//!     The document structure of a policy is a definition list: every section is a group whose
//!     term is the heading and whose definitions are paragraphs, links or further lists.
//!
//!     HTML:
//!
//!         <dl>
//!             <dt>
//!                 <strong>
//!                     Term
//!                 </strong>
//!             </dt>
//!             <dd>
//!                 Definition
//!             </dd>
//!         </dl>
//!
//!     Plain text puts the term on its own line and each definition one level deeper.
//!     Markdown turns terms into bold bullets and definitions into nested bullets. A nested
//!     list inside a definition does not get a bullet of its own: its groups are the bullets.

use super::{html_indentation, markdown_indentation, MarkupNode, Render};

/// A term followed by zero or more definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionGroup {
    term: MarkupNode,
    definitions: Vec<MarkupNode>,
}

impl DefinitionGroup {
    pub fn new(term: impl Into<MarkupNode>) -> Self {
        Self {
            term: term.into(),
            definitions: Vec::new(),
        }
    }

    /// Append a definition. Empty text is skipped.
    pub fn definition(mut self, definition: impl Into<MarkupNode>) -> Self {
        let definition = definition.into();
        if !definition.is_blank() {
            self.definitions.push(definition);
        }
        self
    }

    /// Append a definition if there is one
    pub fn optional_definition<D: Into<MarkupNode>>(self, definition: Option<D>) -> Self {
        match definition {
            Some(definition) => self.definition(definition),
            None => self,
        }
    }

    /// Append every definition from the iterator, in order
    pub fn definitions_from<D, I>(self, definitions: I) -> Self
    where
        D: Into<MarkupNode>,
        I: IntoIterator<Item = D>,
    {
        definitions
            .into_iter()
            .fold(self, |group, definition| group.definition(definition))
    }

    pub fn term(&self) -> &MarkupNode {
        &self.term
    }

    pub fn definitions(&self) -> &[MarkupNode] {
        &self.definitions
    }
}

impl Render for DefinitionGroup {
    fn render_html(&self, indentation: usize) -> String {
        let outer = html_indentation(indentation);
        let inner = html_indentation(indentation + 1);

        let mut out = format!("{outer}<dt>\n{inner}<strong>\n");
        out.push_str(&self.term.render_html(indentation + 2));
        out.push_str(&format!("\n{inner}</strong>\n{outer}</dt>"));

        if self.definitions.is_empty() {
            out.push_str(&format!("\n{outer}<dd></dd>"));
        }

        for definition in &self.definitions {
            out.push_str(&format!("\n{outer}<dd>\n"));
            out.push_str(&definition.render_html(indentation + 1));
            out.push_str(&format!("\n{outer}</dd>"));
        }

        out
    }

    fn render_plain_text(&self, indentation: usize) -> String {
        let mut out = self.term.render_plain_text(indentation);
        for definition in &self.definitions {
            out.push('\n');
            out.push_str(&definition.render_plain_text(indentation + 1));
        }
        out
    }

    fn render_markdown(&self, indentation: usize) -> String {
        let mut out = markdown_indentation(indentation);
        out.push_str(" * **");
        out.push_str(&self.term.render_markdown(0));
        out.push_str("**");

        for definition in &self.definitions {
            out.push('\n');
            if definition.is_definition_list() {
                out.push_str(&definition.render_markdown(indentation + 1));
            } else {
                out.push_str(&markdown_indentation(indentation + 1));
                out.push_str(" * ");
                out.push_str(&definition.render_markdown(0));
            }
        }

        out
    }
}

/// An ordered list of definition groups
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DefinitionList {
    groups: Vec<DefinitionGroup>,
}

impl DefinitionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, group: DefinitionGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn optional_group(self, group: Option<DefinitionGroup>) -> Self {
        match group {
            Some(group) => self.group(group),
            None => self,
        }
    }

    pub fn groups(&self) -> &[DefinitionGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn join_groups(&self, render: impl Fn(&DefinitionGroup) -> String) -> String {
        let mut out = String::new();
        for group in &self.groups {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&render(group));
        }
        out
    }
}

impl FromIterator<DefinitionGroup> for DefinitionList {
    fn from_iter<I: IntoIterator<Item = DefinitionGroup>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}

impl Render for DefinitionList {
    fn render_html(&self, indentation: usize) -> String {
        let mut out = html_indentation(indentation);
        out.push_str("<dl>\n");
        for group in &self.groups {
            out.push_str(&group.render_html(indentation + 1));
            out.push('\n');
        }
        out.push_str(&html_indentation(indentation));
        out.push_str("</dl>");
        out
    }

    fn render_plain_text(&self, indentation: usize) -> String {
        self.join_groups(|group| group.render_plain_text(indentation))
    }

    fn render_markdown(&self, indentation: usize) -> String {
        self.join_groups(|group| group.render_markdown(indentation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Link;

    #[test]
    fn test_group_markdown_scenario() {
        let list = DefinitionList::new().group(
            DefinitionGroup::new("Email")
                .definition("Required: yes")
                .definition("Contact address"),
        );
        assert_eq!(
            list.to_markdown(),
            " * **Email**\n   * Required: yes\n   * Contact address"
        );
    }

    #[test]
    fn test_group_without_definitions_renders_empty_dd() {
        let group = DefinitionGroup::new("Version");
        assert_eq!(
            group.render_html(1),
            "\t<dt>\n\t\t<strong>\n\t\t\tVersion\n\t\t</strong>\n\t</dt>\n\t<dd></dd>"
        );
    }

    #[test]
    fn test_group_html_with_definitions() {
        let group = DefinitionGroup::new("Version").definition("v3.1.4");
        assert_eq!(
            group.to_html(),
            "<dt>\n\t<strong>\n\t\tVersion\n\t</strong>\n</dt>\n<dd>\n\tv3.1.4\n</dd>"
        );
    }

    #[test]
    fn test_blank_and_absent_definitions_are_skipped() {
        let group = DefinitionGroup::new("General")
            .definition("")
            .optional_definition(None::<&str>)
            .optional_definition(Some("Kept"));
        assert_eq!(group.definitions().len(), 1);
        assert_eq!(group.to_plain_text(), "General\n\tKept");
    }

    #[test]
    fn test_list_html_wraps_groups() {
        let list: DefinitionList = vec![DefinitionGroup::new("A"), DefinitionGroup::new("B")]
            .into_iter()
            .collect();
        assert_eq!(
            list.to_html(),
            "<dl>\n\
             \t<dt>\n\t\t<strong>\n\t\t\tA\n\t\t</strong>\n\t</dt>\n\t<dd></dd>\n\
             \t<dt>\n\t\t<strong>\n\t\t\tB\n\t\t</strong>\n\t</dt>\n\t<dd></dd>\n\
             </dl>"
        );
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(DefinitionList::new().to_html(), "<dl>\n</dl>");
        assert_eq!(DefinitionList::new().to_plain_text(), "");
        assert_eq!(DefinitionList::new().to_markdown(), "");
    }

    #[test]
    fn test_nested_list_markdown_has_no_extra_bullet() {
        let scopes = DefinitionList::new().group(
            DefinitionGroup::new(Link::new("https://www.example.com/").with_label("example.com"))
                .definition("Website"),
        );
        let list = DefinitionList::new().group(
            DefinitionGroup::new("General")
                .definition("This policy applies to:")
                .definition(scopes),
        );
        assert_eq!(
            list.to_markdown(),
            " * **General**\n   * This policy applies to:\n   * **[example.com](https://www.example.com/)**\n     * Website"
        );
    }

    #[test]
    fn test_nested_list_plain_text() {
        let inner = DefinitionList::new()
            .group(DefinitionGroup::new("Server logs").definition("IP address"));
        let list = DefinitionList::new().group(
            DefinitionGroup::new("Information we collect").definition(inner),
        );
        assert_eq!(
            list.to_plain_text(),
            "Information we collect\n\tServer logs\n\t\tIP address"
        );
    }

    #[test]
    fn test_group_order_is_preserved() {
        let list = DefinitionList::new()
            .group(DefinitionGroup::new("A"))
            .group(DefinitionGroup::new("B"))
            .group(DefinitionGroup::new("C"));
        assert_eq!(list.to_plain_text(), "A\nB\nC");
        assert_eq!(list.to_markdown(), " * **A**\n * **B**\n * **C**");
    }

    #[test]
    fn test_optional_group() {
        let list = DefinitionList::new()
            .optional_group(None)
            .optional_group(Some(DefinitionGroup::new("Kept")));
        assert_eq!(list.len(), 1);
        assert!(!list.is_empty());
    }
}
