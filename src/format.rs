//! Format trait definition
//!
//! Every output of a policy (the three natural-language renderings and the JSON document) is
//! a [`Format`]. Formats are found by name through the
//! [`FormatRegistry`](crate::registry::FormatRegistry), which is how the CLI selects one.

use crate::error::PolicyError;
use crate::i18n::{Language, Translator, FAIL_ON_MISSING_TRANSLATIONS};
use crate::policy::PrivacyPolicy;

/// Options shared by all formats
///
/// Formats ignore the options that don't apply to them: JSON is language independent and
/// only the JSON format can be minified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub language: Language,
    pub strict_translations: bool,
    pub minified: bool,
}

impl RenderOptions {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            strict_translations: FAIL_ON_MISSING_TRANSLATIONS,
            minified: false,
        }
    }

    pub fn with_strict_translations(mut self, strict: bool) -> Self {
        self.strict_translations = strict;
        self
    }

    pub fn with_minified(mut self, minified: bool) -> Self {
        self.minified = minified;
        self
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.language).with_strict(self.strict_translations)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

/// Trait for policy output formats
///
/// # Examples
///
/// ```ignore
/// struct TitleFormat;
///
/// impl Format for TitleFormat {
///     fn name(&self) -> &str {
///         "title"
///     }
///
///     fn render(&self, _policy: &PrivacyPolicy, options: &RenderOptions) -> Result<String, PolicyError> {
///         Ok(options.language.long_title().to_string())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "markdown", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions of this format, without the dot
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render a policy into this format
    fn render(&self, policy: &PrivacyPolicy, options: &RenderOptions) -> Result<String, PolicyError>;
}
