//! Format implementations
//!
//! The natural-language formats share the assembled markup of
//! [`HumanPolicy`](crate::human::HumanPolicy) and differ only in how it is rendered. The JSON
//! format goes through [`MachinePolicy`](crate::machine::MachinePolicy) instead.

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

pub use html::HtmlFormat;
pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use text::TextFormat;
