//! # privacy-policy
//!
//! Privacy policies assembled from a structured description of what a service does with
//! personal data, rendered to HTML, plain text, Markdown and JSON.
//!
//! Architecture
//!
//!     - markup: immutable node trees that render themselves (see [`markup::Render`])
//!     - vocabulary: the closed legal vocabularies (bases, conditions, purposes, data types)
//!     - i18n: translation tables, printf-style formatting, dates and durations
//!     - policy, data, scope: the configuration of a policy
//!     - human: assembles a policy into markup in one language
//!     - machine: the JSON document
//!     - format, formats, registry: named outputs, selected by the CLI
//!
//!     This is a pure lib: no file, network or environment access. Reading configuration lives
//!     in `policy-config` and the command line in `policy-cli`.
//!
//! Example
//!
//!     ```ignore
//!     let policy = PrivacyPolicy::new()
//!         .with_version_name("v1")
//!         .scope(Scope::website("https://www.example.com/", "Example"))
//!         .with_contact_email("privacy@example.com");
//!
//!     let markdown = HumanPolicy::in_language(&policy, Language::German).to_markdown()?;
//!     let json = MachinePolicy::new(&policy).with_minified(true).to_json()?;
//!     ```

pub mod data;
pub mod error;
pub mod format;
pub mod formats;
pub mod human;
pub mod i18n;
pub mod machine;
pub mod markup;
pub mod policy;
pub mod registry;
pub mod scope;
pub mod vocabulary;

pub use data::{DataElement, DataGroup};
pub use error::PolicyError;
pub use format::{Format, RenderOptions};
pub use human::HumanPolicy;
pub use i18n::{Language, Translator};
pub use machine::MachinePolicy;
pub use markup::{MarkupNode, Render};
pub use policy::{ContactImage, PrivacyPolicy, Rights, SupervisoryAuthority};
pub use registry::FormatRegistry;
pub use scope::Scope;
pub use vocabulary::{DataBasis, DataPurpose, DataRequirement, DataSpecialCondition, DataType};
