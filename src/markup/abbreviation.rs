//! Abbreviation node

use super::{escape_html, html_indentation, markdown_indentation, plain_text_indentation, Render};

/// An abbreviation in its short form with an optional expansion
///
/// The assembled policy also uses it for short answers that carry a longer explanation,
/// e.g. "yes" expanded to the reason the data is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abbreviation {
    abridgement: String,
    expansion: Option<String>,
}

impl Abbreviation {
    pub fn new(abridgement: impl Into<String>) -> Self {
        Self {
            abridgement: abridgement.into(),
            expansion: None,
        }
    }

    pub fn with_expansion(mut self, expansion: impl Into<String>) -> Self {
        self.expansion = Some(expansion.into());
        self
    }

    pub fn abridgement(&self) -> &str {
        &self.abridgement
    }

    pub fn expansion(&self) -> Option<&str> {
        self.expansion.as_deref()
    }

    fn render_inline(&self, prefix: String) -> String {
        let mut out = prefix;
        out.push_str(&self.abridgement);
        if let Some(expansion) = &self.expansion {
            out.push_str(" (");
            out.push_str(expansion);
            out.push(')');
        }
        out
    }
}

impl Render for Abbreviation {
    fn render_html(&self, indentation: usize) -> String {
        let mut out = html_indentation(indentation);
        out.push_str("<abbr");

        if let Some(expansion) = &self.expansion {
            out.push_str(" title=\"");
            out.push_str(&escape_html(expansion));
            out.push('"');
        }

        out.push_str(">\n");
        out.push_str(&html_indentation(indentation + 1));
        out.push_str(&escape_html(&self.abridgement));
        out.push('\n');
        out.push_str(&html_indentation(indentation));
        out.push_str("</abbr>");
        out
    }

    fn render_plain_text(&self, indentation: usize) -> String {
        self.render_inline(plain_text_indentation(indentation))
    }

    fn render_markdown(&self, indentation: usize) -> String {
        self.render_inline(markdown_indentation(indentation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviation_plain_text_with_expansion() {
        let abbr = Abbreviation::new("GDPR").with_expansion("General Data Protection Regulation");
        assert_eq!(
            abbr.to_plain_text(),
            "GDPR (General Data Protection Regulation)"
        );
    }

    #[test]
    fn test_abbreviation_plain_text_without_expansion() {
        assert_eq!(Abbreviation::new("GDPR").render_plain_text(1), "\tGDPR");
    }

    #[test]
    fn test_abbreviation_html() {
        let abbr = Abbreviation::new("yes").with_expansion("Required for \"login\"");
        assert_eq!(
            abbr.render_html(1),
            "\t<abbr title=\"Required for &quot;login&quot;\">\n\t\tyes\n\t</abbr>"
        );
        assert_eq!(
            Abbreviation::new("<no>").to_html(),
            "<abbr>\n\t&lt;no&gt;\n</abbr>"
        );
    }

    #[test]
    fn test_abbreviation_markdown_matches_plain_shape() {
        let abbr = Abbreviation::new("EU").with_expansion("European Union");
        assert_eq!(abbr.render_markdown(1), "  EU (European Union)");
    }
}
