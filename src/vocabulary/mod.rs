//! Legal vocabularies
//!
//!     The closed sets of identifiers a policy is described with: lawful bases, special
//!     conditions for sensitive data, purposes, requirement levels and the catalogue of data
//!     types. Each vocabulary is an enum whose identifiers are stable strings, shared by the
//!     configuration files, the JSON output and the lookups below.
//!
//!     Display names are English message templates and go through the translator before they
//!     are shown, so a literal percent sign is written as `%%`.
//!
//!     Every vocabulary module also offers string-keyed lookups (`display_name(id)` and, for
//!     bases and special conditions, `legal_citation(id)`) that fail on identifiers outside
//!     the closed set.

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $vocabulary:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $identifier:literal, $display_name:literal;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Name of the vocabulary, as used in error messages
            pub const VOCABULARY: &'static str = $vocabulary;

            pub fn identifier(&self) -> &'static str {
                match self {
                    $($name::$variant => $identifier,)+
                }
            }

            pub fn display_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $display_name,)+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::PolicyError;

            fn from_str(identifier: &str) -> Result<Self, Self::Err> {
                match identifier {
                    $($identifier => Ok($name::$variant),)+
                    other => Err($crate::error::PolicyError::unrecognized($vocabulary, other)),
                }
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::error::PolicyError;

            fn try_from(identifier: &str) -> Result<Self, Self::Error> {
                identifier.parse()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.identifier())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.identifier())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(::serde::de::Error::custom)
            }
        }

        /// Display name for an identifier of this vocabulary
        pub fn display_name(identifier: &str) -> Result<&'static str, $crate::error::PolicyError> {
            Ok(identifier.parse::<$name>()?.display_name())
        }
    };
}

pub mod basis;
pub mod data_type;
pub mod purpose;
pub mod requirement;
pub mod special_condition;

pub use basis::DataBasis;
pub use data_type::DataType;
pub use purpose::DataPurpose;
pub use requirement::DataRequirement;
pub use special_condition::DataSpecialCondition;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PolicyError;

    #[test]
    fn test_unrecognized_identifier_names_vocabulary() {
        let err = "gut feeling".parse::<DataBasis>().unwrap_err();
        assert_eq!(
            err,
            PolicyError::UnrecognizedIdentifier {
                vocabulary: "data basis",
                identifier: "gut feeling".to_string(),
            }
        );
    }

    #[test]
    fn test_identifiers_are_unique_per_vocabulary() {
        let mut identifiers: Vec<_> = DataType::ALL.iter().map(|t| t.identifier()).collect();
        identifiers.sort_unstable();
        identifiers.dedup();
        assert_eq!(identifiers.len(), DataType::ALL.len());
    }

    #[test]
    fn test_serde_uses_identifier_strings() {
        let json = serde_json::to_string(&DataRequirement::OptIn).unwrap();
        assert_eq!(json, "\"optIn\"");
        let parsed: DataPurpose = serde_json::from_str("\"customer_support\"").unwrap();
        assert_eq!(parsed, DataPurpose::CustomerSupport);
        assert!(serde_json::from_str::<DataPurpose>("\"gossip\"").is_err());
    }
}
