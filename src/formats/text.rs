//! Plain-text format

use crate::error::PolicyError;
use crate::format::{Format, RenderOptions};
use crate::human::HumanPolicy;
use crate::policy::PrivacyPolicy;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text, indented with tabs"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn render(&self, policy: &PrivacyPolicy, options: &RenderOptions) -> Result<String, PolicyError> {
        debug!(language = %options.language, "Rendering policy as plain text");
        HumanPolicy::new(policy, options.translator()).to_plain_text()
    }
}
