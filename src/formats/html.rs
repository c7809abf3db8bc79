//! HTML format
//!
//! The policy as a `<dl>` element, indented with tabs. The output is a fragment meant to be
//! placed inside a page; it has no `<html>` or `<body>` of its own.

use crate::error::PolicyError;
use crate::format::{Format, RenderOptions};
use crate::human::HumanPolicy;
use crate::policy::PrivacyPolicy;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML definition list"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn render(&self, policy: &PrivacyPolicy, options: &RenderOptions) -> Result<String, PolicyError> {
        debug!(language = %options.language, "Rendering policy as HTML");
        HumanPolicy::new(policy, options.translator()).to_html()
    }
}
