//! Data groups and the elements they collect

use crate::vocabulary::{DataBasis, DataPurpose, DataRequirement, DataSpecialCondition, DataType};
use serde::{Deserialize, Serialize};

/// A single piece of information collected from the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataElement {
    #[serde(rename = "type")]
    pub data_type: DataType,
    #[serde(default)]
    pub requirement: DataRequirement,
    /// Longest time the element is kept, in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retention: Option<u64>,
    #[serde(default)]
    pub viewable: bool,
    #[serde(default)]
    pub deletable: bool,
}

impl DataElement {
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            requirement: DataRequirement::default(),
            max_retention: None,
            viewable: false,
            deletable: false,
        }
    }

    pub fn with_requirement(mut self, requirement: DataRequirement) -> Self {
        self.requirement = requirement;
        self
    }

    pub fn with_max_retention(mut self, hours: u64) -> Self {
        self.max_retention = Some(hours);
        self
    }

    pub fn with_viewable(mut self, viewable: bool) -> Self {
        self.viewable = viewable;
        self
    }

    pub fn with_deletable(mut self, deletable: bool) -> Self {
        self.deletable = deletable;
        self
    }
}

/// A named category of collected information, e.g. "Server logs"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataGroup {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub bases: Vec<DataBasis>,
    #[serde(default)]
    pub special_conditions: Vec<DataSpecialCondition>,
    #[serde(default)]
    pub purposes: Vec<DataPurpose>,
    #[serde(default)]
    pub requirement: DataRequirement,
    #[serde(default)]
    pub elements: Vec<DataElement>,
}

impl DataGroup {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            bases: Vec::new(),
            special_conditions: Vec::new(),
            purposes: Vec::new(),
            requirement: DataRequirement::default(),
            elements: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn basis(mut self, basis: DataBasis) -> Self {
        self.bases.push(basis);
        self
    }

    pub fn special_condition(mut self, condition: DataSpecialCondition) -> Self {
        self.special_conditions.push(condition);
        self
    }

    pub fn purpose(mut self, purpose: DataPurpose) -> Self {
        self.purposes.push(purpose);
        self
    }

    pub fn with_requirement(mut self, requirement: DataRequirement) -> Self {
        self.requirement = requirement;
        self
    }

    pub fn element(mut self, element: DataElement) -> Self {
        self.elements.push(element);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_defaults() {
        let element = DataElement::new(DataType::AccessIpAddress);
        assert_eq!(element.requirement, DataRequirement::Always);
        assert_eq!(element.max_retention, None);
        assert!(!element.viewable);
        assert!(!element.deletable);
    }

    #[test]
    fn test_group_deserializes_with_defaults() {
        let group: DataGroup = serde_json::from_str(
            r#"{
                "title": "Server logs",
                "purposes": ["administration"],
                "elements": [{"type": "access.ip.address", "max_retention": 24}]
            }"#,
        )
        .unwrap();
        assert_eq!(group.requirement, DataRequirement::Always);
        assert_eq!(group.purposes, vec![DataPurpose::Administration]);
        assert_eq!(group.elements[0].max_retention, Some(24));
        assert!(group.bases.is_empty());
    }

    #[test]
    fn test_group_rejects_unknown_type() {
        let result: Result<DataGroup, _> = serde_json::from_str(
            r#"{"title": "Logs", "elements": [{"type": "access.mood"}]}"#,
        );
        assert!(result.is_err());
    }
}
