//! Requirement entity type

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::quantity::{read_or_zero, Quantity, QuantityError};

/// Which numeric attribute of a requirement holds its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetField {
    #[serde(rename = "targetValue")]
    TargetValue,
    #[serde(rename = "maxValue")]
    MaxValue,
    #[serde(rename = "minValue")]
    MinValue,
}

impl TargetField {
    /// Attribute name as exported by the model
    pub fn attribute_name(&self) -> &'static str {
        match self {
            TargetField::TargetValue => "targetValue",
            TargetField::MaxValue => "maxValue",
            TargetField::MinValue => "minValue",
        }
    }
}

impl std::fmt::Display for TargetField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "attributes.{}", self.attribute_name())
    }
}

/// Quantitative attributes of a requirement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementAttributes {
    /// Nominal value the design must reach
    #[serde(
        rename = "targetValue",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_value: Option<Quantity>,

    /// Upper limit
    #[serde(
        rename = "maxValue",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_value: Option<Quantity>,

    /// Lower limit
    #[serde(
        rename = "minValue",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_value: Option<Quantity>,

    /// Remaining attributes, carried through untouched
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

/// Keep a listed attribute even when its value is null
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Quantity>, D::Error> {
    Quantity::deserialize(deserializer).map(Some)
}

impl RequirementAttributes {
    pub fn get(&self, field: TargetField) -> Option<&Quantity> {
        match field {
            TargetField::TargetValue => self.target_value.as_ref(),
            TargetField::MaxValue => self.max_value.as_ref(),
            TargetField::MinValue => self.min_value.as_ref(),
        }
    }

    /// True when the mapping lists no attributes at all
    ///
    /// A member set to null still counts as listed.
    pub fn is_empty(&self) -> bool {
        self.target_value.is_none()
            && self.max_value.is_none()
            && self.min_value.is_none()
            && self.other.is_empty()
    }
}

/// A requirement record from the system model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Requirement name, e.g. `RangeReq`. Not the key the record is stored under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<RequirementAttributes>,

    /// Other fields of the exported record
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Requirement {
    /// Create a requirement with a single limit attribute
    pub fn with_limit(name: impl Into<String>, field: TargetField, value: impl Into<Quantity>) -> Self {
        let mut attributes = RequirementAttributes::default();
        let value = Some(value.into());
        match field {
            TargetField::TargetValue => attributes.target_value = value,
            TargetField::MaxValue => attributes.max_value = value,
            TargetField::MinValue => attributes.min_value = value,
        }
        Self {
            name: Some(name.into()),
            attributes: Some(attributes),
            other: serde_json::Map::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// True when the record has a non-empty `attributes` mapping
    pub fn has_attributes(&self) -> bool {
        self.attributes.as_ref().is_some_and(|a| !a.is_empty())
    }

    /// Numeric value of a limit attribute, zero when absent
    pub fn limit(&self, field: TargetField) -> Result<f64, QuantityError> {
        let value = self.attributes.as_ref().and_then(|a| a.get(field));
        read_or_zero(value, &field.to_string())
    }
}
