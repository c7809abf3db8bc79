//! Services covered by a policy
//!
//!     A scope is a website, an Android app on Google Play or an iOS app on the App Store.
//!     Each renders as a link to where the service can be found, labelled with its name.

use crate::markup::{Link, Render};
use serde::{Deserialize, Serialize};

const PLAY_STORE_URL_PREFIX: &str = "https://play.google.com/store/apps/details?id=";
const APP_STORE_URL_PREFIX: &str = "https://itunes.apple.com/app/id";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Scope {
    #[serde(rename = "web")]
    Website { url: String, name: String },
    #[serde(rename = "android")]
    AndroidApp { package_name: String, name: String },
    /// Track ids are kept as strings even when they look numeric
    #[serde(rename = "ios")]
    IosApp { track_id: String, name: String },
}

impl Scope {
    pub fn website(url: impl Into<String>, name: impl Into<String>) -> Self {
        Scope::Website {
            url: url.into(),
            name: name.into(),
        }
    }

    pub fn android_app(package_name: impl Into<String>, name: impl Into<String>) -> Self {
        Scope::AndroidApp {
            package_name: package_name.into(),
            name: name.into(),
        }
    }

    pub fn ios_app(track_id: impl Into<String>, name: impl Into<String>) -> Self {
        Scope::IosApp {
            track_id: track_id.into(),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Scope::Website { name, .. }
            | Scope::AndroidApp { name, .. }
            | Scope::IosApp { name, .. } => name,
        }
    }

    /// Where the service can be found
    pub fn target(&self) -> String {
        match self {
            Scope::Website { url, .. } => url.clone(),
            Scope::AndroidApp { package_name, .. } => {
                format!("{}{}", PLAY_STORE_URL_PREFIX, package_name)
            }
            Scope::IosApp { track_id, .. } => format!("{}{}", APP_STORE_URL_PREFIX, track_id),
        }
    }

    pub fn to_link(&self) -> Link {
        Link::new(self.target()).with_label(self.name())
    }
}

impl Render for Scope {
    fn render_html(&self, indentation: usize) -> String {
        self.to_link().render_html(indentation)
    }

    fn render_plain_text(&self, indentation: usize) -> String {
        self.to_link().render_plain_text(indentation)
    }

    fn render_markdown(&self, indentation: usize) -> String {
        self.to_link().render_markdown(indentation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_android_target() {
        let scope = Scope::android_app("com.example.app", "Example for Android");
        assert_eq!(
            scope.target(),
            "https://play.google.com/store/apps/details?id=com.example.app"
        );
        assert_eq!(
            scope.to_plain_text(),
            "Example for Android (https://play.google.com/store/apps/details?id=com.example.app)"
        );
    }

    #[test]
    fn test_ios_target() {
        let scope = Scope::ios_app("54614917093", "Example for iOS");
        assert_eq!(scope.target(), "https://itunes.apple.com/app/id54614917093");
        assert_eq!(
            scope.to_markdown(),
            "[Example for iOS](https://itunes.apple.com/app/id54614917093)"
        );
    }

    #[test]
    fn test_website_html() {
        let scope = Scope::website("https://www.example.com/", "example.com");
        assert_eq!(
            scope.to_html(),
            "<a href=\"https://www.example.com/\">\n\texample.com\n</a>"
        );
    }

    #[test]
    fn test_scope_deserializes_from_tagged_table() {
        let scope: Scope = serde_json::from_str(
            r#"{"type":"ios","track_id":"54614917093","name":"Example for iOS"}"#,
        )
        .unwrap();
        assert_eq!(scope, Scope::ios_app("54614917093", "Example for iOS"));
    }

    #[test]
    fn test_unknown_scope_type_is_rejected() {
        let result: Result<Scope, _> =
            serde_json::from_str(r#"{"type":"blackberry","url":"x","name":"y"}"#);
        assert!(result.is_err());
    }
}
