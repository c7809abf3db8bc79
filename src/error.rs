//! Error types for policy assembly and rendering

use thiserror::Error;

/// Errors raised while building markup, looking up vocabularies, translating or serializing.
///
/// All of these are caller errors: rendering itself never fails once a tree has been built,
/// and nothing here is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// An identifier outside one of the closed legal vocabularies
    #[error("unrecognized {vocabulary} identifier '{identifier}'")]
    UnrecognizedIdentifier {
        vocabulary: &'static str,
        identifier: String,
    },

    /// No translation exists for the source text and strict mode is on
    #[error("translation missing for '{0}'")]
    TranslationMissing(String),

    /// Positional arguments don't fit the template they are substituted into
    #[error("invalid format arguments: {0}")]
    FormatArguments(String),

    /// A markup node was constructed with an invalid shape
    #[error("invalid markup: {0}")]
    InvalidMarkup(String),

    /// No output format is registered under the requested name
    #[error("format not found: {0}")]
    FormatNotFound(String),

    /// Encoding the machine-readable document failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl PolicyError {
    pub(crate) fn unrecognized(vocabulary: &'static str, identifier: impl Into<String>) -> Self {
        PolicyError::UnrecognizedIdentifier {
            vocabulary,
            identifier: identifier.into(),
        }
    }
}

impl From<serde_json::Error> for PolicyError {
    fn from(err: serde_json::Error) -> Self {
        PolicyError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_identifier_message() {
        let err = PolicyError::unrecognized("data basis", "bribery");
        assert_eq!(
            err.to_string(),
            "unrecognized data basis identifier 'bribery'"
        );
    }

    #[test]
    fn test_translation_missing_message() {
        let err = PolicyError::TranslationMissing("Cookies".to_string());
        assert_eq!(err.to_string(), "translation missing for 'Cookies'");
    }
}
