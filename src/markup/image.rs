//! Image node

use super::{escape_html, html_indentation, markdown_indentation, plain_text_indentation, Render};
use crate::error::PolicyError;

/// An image with optional alternative text and suggested dimensions in pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    source: String,
    alternative_text: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

impl Image {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alternative_text: None,
            width: None,
            height: None,
        }
    }

    pub fn with_alt_text(mut self, alternative_text: impl Into<String>) -> Self {
        self.alternative_text = Some(alternative_text.into());
        self
    }

    /// Set the suggested width. Zero is rejected.
    pub fn with_width(mut self, width: u32) -> Result<Self, PolicyError> {
        self.width = Some(positive_dimension("width", width)?);
        Ok(self)
    }

    /// Set the suggested height. Zero is rejected.
    pub fn with_height(mut self, height: u32) -> Result<Self, PolicyError> {
        self.height = Some(positive_dimension("height", height)?);
        Ok(self)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn alt_text(&self) -> Option<&str> {
        self.alternative_text.as_deref()
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }
}

fn positive_dimension(name: &str, value: u32) -> Result<u32, PolicyError> {
    if value == 0 {
        return Err(PolicyError::InvalidMarkup(format!(
            "image {} must be a positive number of pixels",
            name
        )));
    }
    Ok(value)
}

impl Render for Image {
    fn render_html(&self, indentation: usize) -> String {
        let mut out = html_indentation(indentation);
        out.push_str("<img src=\"");
        out.push_str(&escape_html(&self.source));
        out.push('"');

        if let Some(alternative_text) = &self.alternative_text {
            out.push_str(" alt=\"");
            out.push_str(&escape_html(alternative_text));
            out.push('"');
        }

        if let Some(width) = self.width {
            out.push_str(&format!(" width=\"{}\"", width));
        }

        if let Some(height) = self.height {
            out.push_str(&format!(" height=\"{}\"", height));
        }

        out.push('>');
        out
    }

    fn render_plain_text(&self, indentation: usize) -> String {
        let mut out = plain_text_indentation(indentation);
        out.push_str(&self.source);

        if let Some(alternative_text) = &self.alternative_text {
            out.push_str(" (");
            out.push_str(alternative_text);
            out.push(')');
        }

        out
    }

    fn render_markdown(&self, indentation: usize) -> String {
        let mut out = markdown_indentation(indentation);
        out.push_str("![");
        if let Some(alternative_text) = &self.alternative_text {
            out.push_str(alternative_text);
        }
        out.push_str("](");
        out.push_str(&self.source);
        out.push(')');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_html_all_attributes() {
        let image = Image::new("https://example.com/contact.png")
            .with_alt_text("Jane Doe, 123 Main Street")
            .with_width(420)
            .unwrap()
            .with_height(360)
            .unwrap();
        assert_eq!(
            image.render_html(1),
            "\t<img src=\"https://example.com/contact.png\" alt=\"Jane Doe, 123 Main Street\" width=\"420\" height=\"360\">"
        );
    }

    #[test]
    fn test_image_html_omits_absent_attributes() {
        let image = Image::new("a.png");
        assert_eq!(image.to_html(), "<img src=\"a.png\">");
    }

    #[test]
    fn test_image_rejects_zero_dimensions() {
        assert!(matches!(
            Image::new("a.png").with_width(0),
            Err(PolicyError::InvalidMarkup(_))
        ));
        assert!(matches!(
            Image::new("a.png").with_height(0),
            Err(PolicyError::InvalidMarkup(_))
        ));
    }

    #[test]
    fn test_image_plain_text_and_markdown() {
        let image = Image::new("a.png").with_alt_text("Logo");
        assert_eq!(image.to_plain_text(), "a.png (Logo)");
        assert_eq!(image.render_markdown(1), "  ![Logo](a.png)");
        assert_eq!(Image::new("a.png").to_markdown(), "![](a.png)");
    }
}
