//! Policy for machines
//!
//!     `MachinePolicy` serializes the settings of a [`PrivacyPolicy`] as a JSON document with
//!     camelCase keys. The document is a view over the policy: it is built with borrowed
//!     data on every call and never stored.
//!
//!     Optional keys are omitted when unset. String values stay strings even when they look
//!     like numbers, so `version = "1"` is written as `"1"`.

use crate::error::PolicyError;
use crate::policy::PrivacyPolicy;
use crate::scope::Scope;
use serde::Serialize;
use tracing::debug;

const PRETTY_INDENT: &[u8] = b"    ";

/// A policy together with the JSON layout options
#[derive(Debug, Clone, Copy)]
pub struct MachinePolicy<'a> {
    policy: &'a PrivacyPolicy,
    minified: bool,
}

impl<'a> MachinePolicy<'a> {
    pub fn new(policy: &'a PrivacyPolicy) -> Self {
        Self {
            policy,
            minified: false,
        }
    }

    /// Write the document on a single line
    pub fn with_minified(mut self, minified: bool) -> Self {
        self.minified = minified;
        self
    }

    pub fn is_minified(&self) -> bool {
        self.minified
    }

    pub fn to_json(&self) -> Result<String, PolicyError> {
        debug!(minified = self.minified, "Serializing policy as JSON");

        let document = Document::from_policy(self.policy);
        if self.minified {
            return Ok(serde_json::to_string(&document)?);
        }

        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(PRETTY_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        document.serialize(&mut serializer)?;
        String::from_utf8(out).map_err(|e| PolicyError::Serialization(e.to_string()))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Document<'a> {
    meta: Meta<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Vec<GroupRecord<'a>>>,
    principles: Principles,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Children>,
    email: Email,
    cookies: Cookies,
    choices: Choices,
    backups: bool,
    service_providers: ServiceProviders,
    mergers_and_acquisitions: MergersAndAcquisitions,
    security: Security,
    changes: Changes,
    #[serde(skip_serializing_if = "Option::is_none")]
    contact: Option<Contact<'a>>,
}

#[derive(Serialize)]
struct Meta<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scopes: Option<Vec<ScopeRecord<'a>>>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum ScopeRecord<'a> {
    #[serde(rename = "web")]
    Web { url: &'a str },
    #[serde(rename = "android", rename_all = "camelCase")]
    Android { package_name: &'a str },
    #[serde(rename = "ios", rename_all = "camelCase")]
    Ios { track_id: &'a str },
}

impl<'a> From<&'a Scope> for ScopeRecord<'a> {
    fn from(scope: &'a Scope) -> Self {
        match scope {
            Scope::Website { url, .. } => ScopeRecord::Web { url },
            Scope::AndroidApp { package_name, .. } => ScopeRecord::Android { package_name },
            Scope::IosApp { track_id, .. } => ScopeRecord::Ios { track_id },
        }
    }
}

#[derive(Serialize)]
struct GroupRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    purposes: Option<Vec<&'static str>>,
    requirement: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    elements: Option<Vec<ElementRecord<'a>>>,
}

#[derive(Serialize)]
struct ElementRecord<'a> {
    #[serde(rename = "type")]
    data_type: &'a str,
    requirement: &'static str,
    retention: Retention,
    viewable: bool,
    deletable: bool,
}

#[derive(Serialize)]
struct Retention {
    max: u64,
}

#[derive(Serialize)]
struct Principles {
    data: DataPrinciples,
}

#[derive(Serialize)]
struct DataPrinciples {
    trade: bool,
    avoidance: bool,
}

#[derive(Serialize)]
struct Children {
    age: Age,
}

#[derive(Serialize)]
struct Age {
    min: u32,
}

#[derive(Serialize)]
struct Email {
    marketing: Marketing,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Marketing {
    opt_out: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Cookies {
    first_party: bool,
    third_party: bool,
}

#[derive(Serialize)]
struct Choices {
    account: Account,
    information: Information,
}

#[derive(Serialize)]
struct Account {
    deletion: bool,
}

#[derive(Serialize)]
struct Information {
    request: bool,
    update: bool,
    delete: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ServiceProviders {
    third_parties: bool,
}

#[derive(Serialize)]
struct MergersAndAcquisitions {
    transfer: bool,
}

#[derive(Serialize)]
struct Security {
    tls: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Changes {
    notification_period: u32,
}

#[derive(Serialize)]
struct Contact<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
}

/// `None` for an empty list, so that the key is left out
fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

impl<'a> Document<'a> {
    fn from_policy(policy: &'a PrivacyPolicy) -> Self {
        let data = policy
            .data_groups
            .iter()
            .map(|group| GroupRecord {
                purposes: non_empty(group.purposes.iter().map(|p| p.identifier()).collect()),
                requirement: group.requirement.identifier(),
                elements: non_empty(
                    group
                        .elements
                        .iter()
                        .map(|element| ElementRecord {
                            data_type: element.data_type.identifier(),
                            requirement: element.requirement.identifier(),
                            retention: Retention {
                                max: element.max_retention.unwrap_or(0),
                            },
                            viewable: element.viewable,
                            deletable: element.deletable,
                        })
                        .collect(),
                ),
            })
            .collect();

        let contact = if policy.has_contact_information() {
            Some(Contact {
                email: policy.contact_email.as_deref(),
                url: policy.contact_url.as_deref(),
            })
        } else {
            None
        };

        Document {
            meta: Meta {
                version: policy.version_name.as_deref(),
                updated: policy.last_updated(),
                expires: policy.expires_at,
                canonical: policy.canonical_url.as_deref(),
                scopes: non_empty(policy.scopes.iter().map(ScopeRecord::from).collect()),
            },
            data: non_empty(data),
            principles: Principles {
                data: DataPrinciples {
                    trade: policy.user_data_traded,
                    avoidance: policy.data_minimization_goal,
                },
            },
            children: policy.minimum_age_of_children().map(|min| Children { age: Age { min } }),
            email: Email {
                marketing: Marketing {
                    opt_out: policy.promotional_email_opt_out,
                },
            },
            cookies: Cookies {
                first_party: policy.first_party_cookies,
                third_party: policy.third_party_cookies,
            },
            choices: Choices {
                account: Account {
                    deletion: policy.account_deletable,
                },
                information: Information {
                    request: policy.rights.access,
                    update: policy.rights.rectification,
                    delete: policy.rights.erasure,
                },
            },
            backups: policy.preservation_in_backups,
            service_providers: ServiceProviders {
                third_parties: policy.third_party_service_providers,
            },
            mergers_and_acquisitions: MergersAndAcquisitions {
                transfer: policy.transfer_upon_merger_or_acquisition,
            },
            security: Security {
                tls: policy.tls_everywhere,
            },
            changes: Changes {
                notification_period: policy.notification_period,
            },
            contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataElement, DataGroup};
    use crate::vocabulary::{DataPurpose, DataRequirement, DataType};
    use serde_json::{json, Value};

    fn parse(policy: &PrivacyPolicy) -> Value {
        let out = MachinePolicy::new(policy).with_minified(true).to_json().unwrap();
        serde_json::from_str(&out).unwrap()
    }

    #[test]
    fn test_meta_with_website_scope() {
        let policy = PrivacyPolicy::new()
            .with_version_name("v3.1.4")
            .scope(Scope::website("https://example.com/", "Example"));
        let out = MachinePolicy::new(&policy).with_minified(true).to_json().unwrap();
        assert!(out.starts_with(
            r#"{"meta":{"version":"v3.1.4","scopes":[{"type":"web","url":"https://example.com/"}]}"#
        ));
    }

    #[test]
    fn test_numeric_looking_strings_stay_strings() {
        let policy = PrivacyPolicy::new()
            .with_version_name("1")
            .scope(Scope::ios_app("284882215", "Example"));
        let value = parse(&policy);
        assert_eq!(value["meta"]["version"], json!("1"));
        assert_eq!(
            value["meta"]["scopes"][0],
            json!({"type": "ios", "trackId": "284882215"})
        );
    }

    #[test]
    fn test_optional_keys_are_omitted() {
        let policy = PrivacyPolicy::new().with_children_minimum_age(None);
        let value = parse(&policy);
        assert_eq!(value["meta"], json!({}));
        assert!(value.get("data").is_none());
        assert!(value.get("children").is_none());
        assert!(value.get("contact").is_none());
        assert_eq!(value["changes"]["notificationPeriod"], json!(30));
    }

    #[test]
    fn test_data_groups() {
        let policy = PrivacyPolicy::new().data_group(
            DataGroup::new("Server logs")
                .purpose(DataPurpose::Administration)
                .element(DataElement::new(DataType::AccessIpAddress).with_max_retention(24))
                .element(
                    DataElement::new(DataType::AccessHttpMethod)
                        .with_requirement(DataRequirement::OptIn)
                        .with_viewable(true),
                ),
        );
        let value = parse(&policy);
        assert_eq!(
            value["data"],
            json!([{
                "purposes": ["administration"],
                "requirement": "always",
                "elements": [
                    {
                        "type": "access.ip.address",
                        "requirement": "always",
                        "retention": {"max": 24},
                        "viewable": false,
                        "deletable": false
                    },
                    {
                        "type": "access.http.method",
                        "requirement": "optIn",
                        "retention": {"max": 0},
                        "viewable": true,
                        "deletable": false
                    }
                ]
            }])
        );
    }

    #[test]
    fn test_updated_prefers_effective_date() {
        let policy = PrivacyPolicy::new()
            .with_published_at(1393372800)
            .with_takes_effect_at(1394582400)
            .with_expires_at(1395792000);
        let value = parse(&policy);
        assert_eq!(
            value["meta"],
            json!({"updated": 1394582400, "expires": 1395792000})
        );
    }

    #[test]
    fn test_pretty_output_indents_four_spaces() {
        let policy = PrivacyPolicy::new();
        let out = MachinePolicy::new(&policy).to_json().unwrap();
        assert!(out.starts_with("{\n    \"meta\": {},\n    \"principles\": {\n        \"data\""));
        assert!(!MachinePolicy::new(&policy).is_minified());
    }

    #[test]
    fn test_contact_without_image() {
        let policy = PrivacyPolicy::new()
            .with_contact_email("privacy@example.com")
            .with_contact_url("https://www.example.com/contact.html");
        let value = parse(&policy);
        assert_eq!(
            value["contact"],
            json!({"email": "privacy@example.com", "url": "https://www.example.com/contact.html"})
        );
    }

    #[test]
    fn test_contact_with_image_only() {
        let policy = PrivacyPolicy::new().with_contact_image(crate::policy::ContactImage {
            source: "https://www.example.com/contact.png".to_string(),
            alt_text: "Postal address".to_string(),
            width: None,
            height: None,
        });
        assert_eq!(parse(&policy)["contact"], json!({}));
    }
}
