//! Policy files for privacy-policy.
//!
//! The settings a policy file leaves out come from `defaults/policy.default.toml`, which is
//! compiled in. [`Loader`] merges the defaults, the user's files and any overrides, and
//! deserializes the result into a [`PolicyConfig`].
//!
//! A policy file has two tables: `[render]` selects the output and `[policy]` describes the
//! policy itself, with the same keys as [`PrivacyPolicy`]. Scopes are tagged by `type`:
//!
//! ```toml
//! [[policy.scopes]]
//! type = "android"
//! package_name = "com.example.app"
//! name = "Example for Android"
//! ```

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, FileSourceFile, Source, ValueKind};
use privacy_policy::{Language, PrivacyPolicy, RenderOptions};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/policy.default.toml");

/// A policy file, merged over the defaults
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    pub render: RenderConfig,
    pub policy: PrivacyPolicy,
}

/// The `[render]` table
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub language: Language,
    pub format: String,
    pub minified: bool,
    pub strict_translations: bool,
}

impl RenderConfig {
    pub fn to_options(&self) -> RenderOptions {
        RenderOptions::new(self.language)
            .with_strict_translations(self.strict_translations)
            .with_minified(self.minified)
    }
}

/// Sources of a [`PolicyConfig`], applied in the order they are added
///
/// The embedded defaults always come first, so a policy file only has to name the settings
/// it changes. Later sources win, and overrides win over every source.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
        }
        .with_toml(DEFAULT_TOML)
    }

    /// Add a policy file that must exist
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_source(policy_file(path.as_ref()).required(true))
    }

    /// Add a policy file that is skipped when it doesn't exist
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_source(policy_file(path.as_ref()).required(false))
    }

    /// Add policy settings given as TOML text
    pub fn with_toml(self, text: &str) -> Self {
        self.with_source(File::from_str(text, FileFormat::Toml))
    }

    /// Set one dotted key, such as `render.format`, above all sources
    pub fn set_override<V>(mut self, key: &str, value: V) -> Result<Self, ConfigError>
    where
        V: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge all sources and deserialize the result
    pub fn build(self) -> Result<PolicyConfig, ConfigError> {
        let merged = self.builder.build()?;
        merged.try_deserialize::<PolicyConfig>()
    }

    fn with_source<S>(mut self, source: S) -> Self
    where
        S: Source + Send + Sync + 'static,
    {
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

fn policy_file(path: &Path) -> File<FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

/// The configuration with nothing but the embedded defaults
pub fn load_defaults() -> Result<PolicyConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use privacy_policy::{DataBasis, DataRequirement, DataType, Scope};
    use std::io::Write;

    const EXAMPLE: &str = r#"
        [render]
        language = "de"
        format = "markdown"

        [policy]
        version_name = "1"
        published_at = 1393372800
        tls_everywhere = true
        contact_email = "privacy@example.com"

        [policy.rights]
        access = true

        [[policy.scopes]]
        type = "web"
        url = "https://www.example.com/"
        name = "Example"

        [[policy.scopes]]
        type = "ios"
        track_id = "284882215"
        name = "Example for iOS"

        [[policy.data_groups]]
        title = "Server logs"
        bases = ["legitimateInterests"]
        purposes = ["administration"]

        [[policy.data_groups.elements]]
        type = "access.ip.address"
        max_retention = 24

        [[policy.data_groups.elements]]
        type = "access.http.method"
        requirement = "optOut"
    "#;

    #[test]
    fn test_defaults_deserialize() {
        let config = load_defaults().expect("embedded defaults");
        assert_eq!(config.render.language, Language::English);
        assert_eq!(config.render.format, "html");
        assert!(!config.render.minified);
        assert_eq!(config.policy, PrivacyPolicy::default());
    }

    #[test]
    fn test_overrides_win() {
        let config = Loader::new()
            .set_override("render.format", "json")
            .expect("valid override")
            .set_override("render.minified", true)
            .expect("valid override")
            .build()
            .expect("policy to load");
        assert_eq!(config.render.format, "json");
        assert!(config.render.to_options().minified);
    }

    #[test]
    fn test_policy_table_layers_over_defaults() {
        let config = Loader::new()
            .with_toml(EXAMPLE)
            .build()
            .expect("policy to load");

        assert_eq!(config.render.language, Language::German);
        assert_eq!(config.render.format, "markdown");

        let policy = &config.policy;
        assert_eq!(policy.version_name.as_deref(), Some("1"));
        assert_eq!(policy.published_at, Some(1393372800));
        assert!(policy.tls_everywhere);
        assert!(policy.account_deletable);
        assert!(policy.rights.access);
        assert!(!policy.rights.erasure);
        assert_eq!(
            policy.scopes,
            vec![
                Scope::website("https://www.example.com/", "Example"),
                Scope::ios_app("284882215", "Example for iOS"),
            ]
        );

        let group = &policy.data_groups[0];
        assert_eq!(group.bases, vec![DataBasis::LegitimateInterests]);
        assert_eq!(group.elements[0].data_type, DataType::AccessIpAddress);
        assert_eq!(group.elements[0].max_retention, Some(24));
        assert_eq!(group.elements[1].requirement, DataRequirement::OptOut);
    }

    #[test]
    fn test_required_and_optional_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("policy.toml");
        std::fs::File::create(&path)
            .and_then(|mut file| file.write_all(EXAMPLE.as_bytes()))
            .expect("write config");
        let absent = dir.path().join("absent.toml");

        assert!(Loader::new().with_file(&absent).build().is_err());

        let config = Loader::new()
            .with_optional_file(&absent)
            .with_file(&path)
            .build()
            .expect("policy to load");
        assert_eq!(config.policy.scopes.len(), 2);
    }

    #[test]
    fn test_unknown_data_type_is_rejected() {
        let result = Loader::new()
            .with_toml(
                r#"
                [[policy.data_groups]]
                title = "Logs"

                [[policy.data_groups.elements]]
                type = "access.mood"
                "#,
            )
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_image_width_is_rejected_on_load() {
        let result = Loader::new()
            .with_toml(
                r#"
                [policy.contact_image]
                source = "https://www.example.com/contact.png"
                alt_text = "Postal address"
                width = 0
                "#,
            )
            .build();
        let message = result.expect_err("zero width").to_string();
        assert!(message.contains("width"), "{}", message);
    }
}
