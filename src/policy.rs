//! The policy configuration
//!
//!     `PrivacyPolicy` describes what a service does with personal data. It is plain data:
//!     built in code with the `with_*` methods or deserialized from a configuration file,
//!     then handed to [`HumanPolicy`](crate::human::HumanPolicy) or
//!     [`MachinePolicy`](crate::machine::MachinePolicy) for output.

use crate::data::DataGroup;
use crate::error::PolicyError;
use crate::markup::Image;
use crate::scope::Scope;
use serde::{Deserialize, Serialize};

pub const CHILDREN_MINIMUM_AGE_DEFAULT: u32 = 13;

/// Days of advance notice before material changes
pub const NOTIFICATION_PERIOD_DEFAULT: u32 = 30;

/// Data subject rights granted under the GDPR, Articles 15 to 22
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rights {
    pub access: bool,
    pub rectification: bool,
    pub erasure: bool,
    pub restriction: bool,
    pub portability: bool,
    pub object: bool,
    pub automated_decisions: bool,
}

impl Rights {
    /// Every right granted
    pub fn all() -> Self {
        Self {
            access: true,
            rectification: true,
            erasure: true,
            restriction: true,
            portability: true,
            object: true,
            automated_decisions: true,
        }
    }

    pub fn any(&self) -> bool {
        self.access
            || self.rectification
            || self.erasure
            || self.restriction
            || self.portability
            || self.object
            || self.automated_decisions
    }
}

/// The data protection authority responsible for the controller
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SupervisoryAuthority {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl SupervisoryAuthority {
    pub fn is_set(&self) -> bool {
        self.name.is_some() || self.url.is_some()
    }
}

/// An image with the contact details, e.g. a postal address rendered as a picture
///
/// Dimensions are checked when the image is deserialized, so a configuration with a zero
/// width or height fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactImageFields")]
pub struct ContactImage {
    pub source: String,
    pub alt_text: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Deserialize)]
struct ContactImageFields {
    source: String,
    alt_text: String,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
}

impl TryFrom<ContactImageFields> for ContactImage {
    type Error = PolicyError;

    fn try_from(fields: ContactImageFields) -> Result<Self, Self::Error> {
        let image = ContactImage {
            source: fields.source,
            alt_text: fields.alt_text,
            width: fields.width,
            height: fields.height,
        };
        image.to_image()?;
        Ok(image)
    }
}

impl ContactImage {
    pub fn to_image(&self) -> Result<Image, PolicyError> {
        let mut image = Image::new(self.source.as_str()).with_alt_text(self.alt_text.as_str());
        if let Some(width) = self.width {
            image = image.with_width(width)?;
        }
        if let Some(height) = self.height {
            image = image.with_height(height)?;
        }
        Ok(image)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacyPolicy {
    /// Unix seconds
    pub published_at: Option<i64>,
    /// Unix seconds
    pub takes_effect_at: Option<i64>,
    /// Unix seconds
    pub expires_at: Option<i64>,
    pub version_name: Option<String>,
    pub canonical_url: Option<String>,
    pub scopes: Vec<Scope>,
    pub data_groups: Vec<DataGroup>,
    pub user_data_traded: bool,
    pub data_minimization_goal: bool,
    pub children_minimum_age: Option<u32>,
    pub promotional_email_opt_out: bool,
    pub first_party_cookies: bool,
    pub third_party_cookies: bool,
    pub account_deletable: bool,
    pub preservation_in_backups: bool,
    pub third_party_service_providers: bool,
    pub international_transfers: bool,
    pub transfer_upon_merger_or_acquisition: bool,
    pub tls_everywhere: bool,
    /// Days
    pub notification_period: u32,
    pub rights: Rights,
    pub supervisory_authority: SupervisoryAuthority,
    pub contact_email: Option<String>,
    pub contact_url: Option<String>,
    pub contact_image: Option<ContactImage>,
}

impl Default for PrivacyPolicy {
    fn default() -> Self {
        Self {
            published_at: None,
            takes_effect_at: None,
            expires_at: None,
            version_name: None,
            canonical_url: None,
            scopes: Vec::new(),
            data_groups: Vec::new(),
            user_data_traded: false,
            data_minimization_goal: true,
            children_minimum_age: Some(CHILDREN_MINIMUM_AGE_DEFAULT),
            promotional_email_opt_out: true,
            first_party_cookies: true,
            third_party_cookies: true,
            account_deletable: true,
            preservation_in_backups: true,
            third_party_service_providers: true,
            international_transfers: false,
            transfer_upon_merger_or_acquisition: true,
            tls_everywhere: false,
            notification_period: NOTIFICATION_PERIOD_DEFAULT,
            rights: Rights::default(),
            supervisory_authority: SupervisoryAuthority::default(),
            contact_email: None,
            contact_url: None,
            contact_image: None,
        }
    }
}

impl PrivacyPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_published_at(mut self, unix_seconds: i64) -> Self {
        self.published_at = Some(unix_seconds);
        self
    }

    pub fn with_takes_effect_at(mut self, unix_seconds: i64) -> Self {
        self.takes_effect_at = Some(unix_seconds);
        self
    }

    pub fn with_expires_at(mut self, unix_seconds: i64) -> Self {
        self.expires_at = Some(unix_seconds);
        self
    }

    pub fn with_version_name(mut self, version_name: impl Into<String>) -> Self {
        self.version_name = Some(version_name.into());
        self
    }

    pub fn with_canonical_url(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scopes.push(scope);
        self
    }

    pub fn data_group(mut self, group: DataGroup) -> Self {
        self.data_groups.push(group);
        self
    }

    pub fn with_children_minimum_age(mut self, age: Option<u32>) -> Self {
        self.children_minimum_age = age;
        self
    }

    pub fn with_rights(mut self, rights: Rights) -> Self {
        self.rights = rights;
        self
    }

    pub fn with_supervisory_authority(
        mut self,
        name: Option<String>,
        url: Option<String>,
    ) -> Self {
        self.supervisory_authority = SupervisoryAuthority { name, url };
        self
    }

    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = Some(email.into());
        self
    }

    pub fn with_contact_url(mut self, url: impl Into<String>) -> Self {
        self.contact_url = Some(url.into());
        self
    }

    pub fn with_contact_image(mut self, image: ContactImage) -> Self {
        self.contact_image = Some(image);
        self
    }

    /// The minimum age of users, where an age of 0 means there is none
    pub fn minimum_age_of_children(&self) -> Option<u32> {
        self.children_minimum_age.filter(|age| *age > 0)
    }

    pub fn has_children_minimum_age(&self) -> bool {
        self.minimum_age_of_children().is_some()
    }

    pub fn has_cookies(&self) -> bool {
        self.first_party_cookies || self.third_party_cookies
    }

    pub fn has_contact_information(&self) -> bool {
        self.contact_email.is_some() || self.contact_url.is_some() || self.contact_image.is_some()
    }

    /// When the current terms took effect, or else when they were published
    pub fn last_updated(&self) -> Option<i64> {
        self.takes_effect_at.or(self.published_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = PrivacyPolicy::default();
        assert!(!policy.user_data_traded);
        assert!(policy.data_minimization_goal);
        assert_eq!(policy.children_minimum_age, Some(13));
        assert_eq!(policy.notification_period, 30);
        assert!(policy.has_cookies());
        assert!(!policy.tls_everywhere);
        assert!(!policy.international_transfers);
        assert!(!policy.rights.any());
        assert!(!policy.has_contact_information());
    }

    #[test]
    fn test_last_updated_prefers_effective_date() {
        let policy = PrivacyPolicy::new().with_published_at(100);
        assert_eq!(policy.last_updated(), Some(100));
        let policy = policy.with_takes_effect_at(200);
        assert_eq!(policy.last_updated(), Some(200));
    }

    #[test]
    fn test_contact_image_validates_dimensions() {
        let image = ContactImage {
            source: "contact.png".to_string(),
            alt_text: "Jane Doe".to_string(),
            width: Some(0),
            height: None,
        };
        assert!(matches!(image.to_image(), Err(PolicyError::InvalidMarkup(_))));
    }

    #[test]
    fn test_zero_dimension_fails_to_deserialize() {
        let result = serde_json::from_str::<ContactImage>(
            r#"{"source": "contact.png", "alt_text": "Jane Doe", "height": 0}"#,
        );
        assert!(result.unwrap_err().to_string().contains("height"));

        let image: ContactImage =
            serde_json::from_str(r#"{"source": "contact.png", "alt_text": "Jane Doe", "width": 420}"#)
                .unwrap();
        assert_eq!(image.width, Some(420));
    }

    #[test]
    fn test_zero_minimum_age_means_none() {
        let policy = PrivacyPolicy::new().with_children_minimum_age(Some(0));
        assert_eq!(policy.minimum_age_of_children(), None);
        assert!(!policy.has_children_minimum_age());
        assert_eq!(PrivacyPolicy::new().minimum_age_of_children(), Some(13));
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let policy: PrivacyPolicy =
            serde_json::from_str(r#"{"tls_everywhere": true, "rights": {"access": true}}"#)
                .unwrap();
        assert!(policy.tls_everywhere);
        assert!(policy.rights.access);
        assert!(!policy.rights.erasure);
        assert!(policy.account_deletable);
    }
}
