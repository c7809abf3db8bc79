//! Output formats by name
//!
//! The CLI and the config file refer to formats by name ("html", "json", ...) or by the
//! extension of an output file. [`FormatRegistry`] maps both to a [`Format`]. Names are kept
//! in order, so listings and extension lookups are stable.

use crate::error::PolicyError;
use crate::format::{Format, RenderOptions};
use crate::formats::{HtmlFormat, JsonFormat, MarkdownFormat, TextFormat};
use crate::policy::PrivacyPolicy;
use std::collections::BTreeMap;
use tracing::debug;

/// Named output formats
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let markdown = registry.render(&policy, "markdown", &RenderOptions::default())?;
/// ```
pub struct FormatRegistry {
    by_name: BTreeMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// A registry without any format
    pub fn new() -> Self {
        Self {
            by_name: BTreeMap::new(),
        }
    }

    /// The four built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(HtmlFormat);
        registry.register(TextFormat);
        registry.register(MarkdownFormat);
        registry.register(JsonFormat);
        registry
    }

    /// Add a format under its own name, replacing any format of that name
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        let name = format.name().to_string();
        self.by_name.insert(name, Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, PolicyError> {
        match self.by_name.get(name) {
            Some(format) => Ok(format.as_ref()),
            None => Err(PolicyError::FormatNotFound(name.to_string())),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Registered names in alphabetical order
    pub fn list_formats(&self) -> Vec<String> {
        self.by_name.keys().cloned().collect()
    }

    /// The first format, by name, that claims a file extension (with or without the dot,
    /// in any case)
    pub fn for_extension(&self, extension: &str) -> Option<&dyn Format> {
        let extension = extension.trim_start_matches('.');
        self.by_name
            .values()
            .find(|format| {
                format
                    .file_extensions()
                    .iter()
                    .any(|claimed| claimed.eq_ignore_ascii_case(extension))
            })
            .map(|format| format.as_ref())
    }

    /// Look up `name` and render the policy with it
    pub fn render(
        &self,
        policy: &PrivacyPolicy,
        name: &str,
        options: &RenderOptions,
    ) -> Result<String, PolicyError> {
        let format = self.get(name)?;
        debug!(format = name, language = %options.language, "Selected output format");
        format.render(policy, options)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Renders only the long title of the policy
    struct TitleFormat;

    impl Format for TitleFormat {
        fn name(&self) -> &str {
            "title"
        }

        fn file_extensions(&self) -> &[&str] {
            &["title", "md"]
        }

        fn render(
            &self,
            _policy: &PrivacyPolicy,
            options: &RenderOptions,
        ) -> Result<String, PolicyError> {
            Ok(options.language.long_title().to_string())
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = FormatRegistry::new();
        assert!(registry.list_formats().is_empty());
        assert!(!registry.has("html"));
    }

    #[test]
    fn test_custom_format_renders_through_registry() {
        let mut registry = FormatRegistry::new();
        registry.register(TitleFormat);

        let options = RenderOptions::new(crate::i18n::Language::German);
        let rendered = registry.render(&PrivacyPolicy::new(), "title", &options);
        assert_eq!(rendered.unwrap(), "Datenschutzerklärung");
        assert_eq!(registry.get("title").unwrap().description(), "");
    }

    #[test]
    fn test_unknown_name() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry
                .render(&PrivacyPolicy::new(), "pdf", &RenderOptions::default())
                .unwrap_err(),
            PolicyError::FormatNotFound("pdf".to_string())
        );
        assert!(matches!(
            registry.get("PDF"),
            Err(PolicyError::FormatNotFound(name)) if name == "PDF"
        ));
    }

    #[test]
    fn test_defaults_are_listed_alphabetically() {
        assert_eq!(
            FormatRegistry::default().list_formats(),
            vec!["html", "json", "markdown", "text"]
        );
    }

    #[test]
    fn test_extension_lookup() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.for_extension("md").map(|f| f.name()), Some("markdown"));
        assert_eq!(registry.for_extension(".HTM").map(|f| f.name()), Some("html"));
        assert_eq!(registry.for_extension("txt").map(|f| f.name()), Some("text"));
        assert!(registry.for_extension("pdf").is_none());
    }

    #[test]
    fn test_extension_claimed_twice_goes_to_first_name() {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(TitleFormat);
        assert_eq!(registry.for_extension("md").map(|f| f.name()), Some("markdown"));
        assert_eq!(registry.for_extension("title").map(|f| f.name()), Some("title"));
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(TitleFormat);
        registry.register(TitleFormat);
        assert_eq!(registry.list_formats().len(), 5);
    }
}
