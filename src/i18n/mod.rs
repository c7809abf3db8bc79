//! Translation
//!
//!     Every sentence of a policy is written in English and looked up in the table of the
//!     selected language before it is formatted. English is the identity. German layers the
//!     formal table over the base table (see [`german`]).
//!
//!     When no translation exists the English source is used and a warning is logged, unless
//!     the translator is strict, in which case the lookup fails. Strictness defaults to the
//!     `strict-translations` feature and can be changed per translator, which is how missing
//!     strings are found during development.

pub mod format;
mod german;
pub mod units;

pub use format::{sprintf, FormatArg};
pub use units::DurationUnit;

use crate::error::PolicyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Default strictness of new translators
pub const FAIL_ON_MISSING_TRANSLATIONS: bool = cfg!(feature = "strict-translations");

/// Languages a policy can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
}

impl Language {
    pub const ALL: &'static [Language] = &[Language::English, Language::German];

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
        }
    }

    /// Name of the language in the language itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "Deutsch",
        }
    }

    pub fn short_title(&self) -> &'static str {
        match self {
            Language::English => "Privacy",
            Language::German => "Datenschutz",
        }
    }

    pub fn long_title(&self) -> &'static str {
        match self {
            Language::English => "Privacy Policy",
            Language::German => "Datenschutzerklärung",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = PolicyError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "en" => Ok(Language::English),
            "de" => Ok(Language::German),
            other => Err(PolicyError::unrecognized("language", other)),
        }
    }
}

/// Looks up and formats the strings of one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    language: Language,
    strict: bool,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            strict: FAIL_ON_MISSING_TRANSLATIONS,
        }
    }

    /// Fail on missing translations instead of falling back to English
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// The translation of `source`, without formatting
    pub fn lookup<'a>(&self, source: &'a str) -> Option<&'a str> {
        match self.language {
            Language::English => Some(source),
            Language::German => german::lookup(source),
        }
    }

    /// Translate `source` and substitute `args` into the result
    pub fn translate(&self, source: &str, args: &[FormatArg]) -> Result<String, PolicyError> {
        let template = match self.lookup(source) {
            Some(template) => template,
            None if self.strict => return Err(PolicyError::TranslationMissing(source.to_string())),
            None => {
                warn!(language = %self.language, source, "Translation missing, using source text");
                source
            }
        };
        sprintf(template, args)
    }

    /// Translate a string without arguments
    pub fn text(&self, source: &str) -> Result<String, PolicyError> {
        self.translate(source, &[])
    }

    pub fn format_date(&self, unix_seconds: i64) -> Result<String, PolicyError> {
        units::format_date(self.language, unix_seconds)
    }

    pub fn format_hours(&self, n: u64) -> String {
        units::format_duration(self.language, n, DurationUnit::Hours)
    }

    pub fn format_days(&self, n: u64) -> String {
        units::format_duration(self.language, n, DurationUnit::Days)
    }

    pub fn format_weeks(&self, n: u64) -> String {
        units::format_duration(self.language, n, DurationUnit::Weeks)
    }

    pub fn format_months(&self, n: u64) -> String {
        units::format_duration(self.language, n, DurationUnit::Months)
    }

    pub fn format_years(&self, n: u64) -> String {
        units::format_duration(self.language, n, DurationUnit::Years)
    }

    /// A maximum retention period in hours, in the most readable unit
    pub fn format_retention(&self, hours: u64) -> String {
        let (n, unit) = units::retention_in_units(hours);
        units::format_duration(self.language, n, unit)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_is_identity() {
        let translator = Translator::new(Language::English).with_strict(true);
        assert_eq!(translator.text("Cookies").unwrap(), "Cookies");
        assert_eq!(
            translator
                .translate("children under %d.", &[FormatArg::Int(13)])
                .unwrap(),
            "children under 13."
        );
    }

    #[test]
    fn test_german_lookup() {
        let translator = Translator::new(Language::German);
        assert_eq!(translator.text("Version").unwrap(), "Version");
        assert_eq!(
            translator
                .translate("Maximum retention time: %s", &["3 Tage".into()])
                .unwrap(),
            "Maximale Aufbewahrungszeit: 3 Tage"
        );
    }

    #[test]
    fn test_missing_translation_falls_back() {
        let translator = Translator::new(Language::German).with_strict(false);
        assert_eq!(translator.text("Not translated").unwrap(), "Not translated");
    }

    #[test]
    fn test_missing_translation_strict() {
        let translator = Translator::new(Language::German).with_strict(true);
        assert_eq!(
            translator.text("Not translated"),
            Err(PolicyError::TranslationMissing("Not translated".to_string()))
        );
    }

    #[test]
    fn test_default_strictness_follows_feature() {
        assert_eq!(
            Translator::new(Language::English).is_strict(),
            cfg!(feature = "strict-translations")
        );
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("de".parse::<Language>().unwrap(), Language::German);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::German.long_title(), "Datenschutzerklärung");
        assert_eq!(Language::English.short_title(), "Privacy");
    }

    #[test]
    fn test_format_retention() {
        let english = Translator::new(Language::English);
        assert_eq!(english.format_retention(24), "24 hours");
        assert_eq!(english.format_retention(720), "5 weeks");
        let german = Translator::new(Language::German);
        assert_eq!(german.format_retention(8760), "12 Monate");
    }
}
