//! Hyperlink node

use super::{
    escape_html, html_indentation, markdown_indentation, plain_text_indentation, MarkupNode,
    Render, Text, EN_DASH, SPACE,
};

/// A hyperlink with a label and an optional extended description
///
/// When no label is given the target itself is used as a text label, so `Link::new(url)`
/// renders exactly like `Link::new(url).with_label(url)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    target: String,
    label: Box<MarkupNode>,
    description: Option<String>,
}

impl Link {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let label = Box::new(MarkupNode::Text(Text::new(target.clone())));
        Self {
            target,
            label,
            description: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<MarkupNode>) -> Self {
        self.label = Box::new(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn label(&self) -> &MarkupNode {
        &self.label
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Render for Link {
    fn render_html(&self, indentation: usize) -> String {
        let mut out = html_indentation(indentation);
        out.push_str("<a href=\"");
        out.push_str(&escape_html(&self.target));
        out.push('"');

        if let Some(description) = &self.description {
            out.push_str(" title=\"");
            out.push_str(&escape_html(description));
            out.push('"');
        }

        out.push_str(">\n");
        out.push_str(&self.label.render_html(indentation + 1));
        out.push('\n');
        out.push_str(&html_indentation(indentation));
        out.push_str("</a>");
        out
    }

    fn render_plain_text(&self, indentation: usize) -> String {
        let mut out = plain_text_indentation(indentation);
        out.push_str(&self.label.render_plain_text(0));
        out.push_str(SPACE);

        if let Some(description) = &self.description {
            out.push_str(EN_DASH);
            out.push_str(SPACE);
            out.push_str(description);
            out.push_str(SPACE);
        }

        out.push('(');
        out.push_str(&self.target);
        out.push(')');
        out
    }

    fn render_markdown(&self, indentation: usize) -> String {
        let mut out = markdown_indentation(indentation);
        out.push('[');
        out.push_str(&self.label.render_markdown(0));

        if let Some(description) = &self.description {
            out.push_str(SPACE);
            out.push_str(EN_DASH);
            out.push_str(SPACE);
            out.push_str(description);
        }

        out.push_str("](");
        out.push_str(&self.target);
        out.push(')');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Image;

    #[test]
    fn test_link_html_nests_label() {
        let link = Link::new("https://example.com/?a=1&b=2").with_label("Example");
        assert_eq!(
            link.render_html(1),
            "\t<a href=\"https://example.com/?a=1&amp;b=2\">\n\t\tExample\n\t</a>"
        );
    }

    #[test]
    fn test_link_html_with_description_title() {
        let link = Link::new("mailto:privacy@example.com")
            .with_label("privacy@example.com")
            .with_description("Write to \"us\"");
        assert_eq!(
            link.to_html(),
            "<a href=\"mailto:privacy@example.com\" title=\"Write to &quot;us&quot;\">\n\tprivacy@example.com\n</a>"
        );
    }

    #[test]
    fn test_link_plain_text() {
        let link = Link::new("https://example.com/").with_label("Example");
        assert_eq!(link.to_plain_text(), "Example (https://example.com/)");
    }

    #[test]
    fn test_link_plain_text_with_description() {
        let link = Link::new("https://example.com/")
            .with_label("Example")
            .with_description("Our homepage");
        assert_eq!(
            link.render_plain_text(1),
            "\tExample – Our homepage (https://example.com/)"
        );
    }

    #[test]
    fn test_link_markdown_with_description() {
        let link = Link::new("https://example.com/")
            .with_label("Example")
            .with_description("Our homepage");
        assert_eq!(
            link.to_markdown(),
            "[Example – Our homepage](https://example.com/)"
        );
    }

    #[test]
    fn test_link_default_label_is_target() {
        let implicit = Link::new("https://example.com/privacy.html");
        let explicit =
            Link::new("https://example.com/privacy.html").with_label("https://example.com/privacy.html");
        assert_eq!(implicit, explicit);
        assert_eq!(implicit.to_plain_text(), explicit.to_plain_text());
    }

    #[test]
    fn test_link_with_image_label() {
        let image = Image::new("https://example.com/contact.png").with_alt_text("Jane Doe");
        let link = Link::new("https://example.com/contact.html").with_label(image);
        assert_eq!(
            link.to_markdown(),
            "[![Jane Doe](https://example.com/contact.png)](https://example.com/contact.html)"
        );
    }
}
