//! Markdown format
//!
//! Sections become bullet items with a bold term; nested lists are indented by two spaces
//! per level.

use crate::error::PolicyError;
use crate::format::{Format, RenderOptions};
use crate::human::HumanPolicy;
use crate::policy::PrivacyPolicy;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown bullet lists"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn render(&self, policy: &PrivacyPolicy, options: &RenderOptions) -> Result<String, PolicyError> {
        debug!(language = %options.language, "Rendering policy as Markdown");
        HumanPolicy::new(policy, options.translator()).to_markdown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_markdown_in_german() {
        let markdown = MarkdownFormat
            .render(&PrivacyPolicy::new(), &RenderOptions::new(Language::German))
            .unwrap();
        assert!(markdown.starts_with(" * **Allgemein**\n"));
    }
}
