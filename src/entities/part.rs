//! Architecture part entity type

use serde::{Deserialize, Serialize};

use crate::core::quantity::{read_or_zero, Quantity, QuantityError};

/// Mass attribute of a part
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MassAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Quantity>,

    /// Unit label, passed through as exported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Physical attributes of a part
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<MassAttribute>,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

/// A structural component from the architecture parts list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub attributes: PartAttributes,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Part {
    /// Create a part with the given mass value
    pub fn with_mass(value: impl Into<Quantity>) -> Self {
        Self {
            attributes: PartAttributes {
                mass: Some(MassAttribute {
                    value: Some(value.into()),
                    unit: None,
                }),
                other: serde_json::Map::new(),
            },
            other: serde_json::Map::new(),
        }
    }

    /// Mass of the part, zero when the part carries none
    pub fn mass(&self) -> Result<f64, QuantityError> {
        let value = self.attributes.mass.as_ref().and_then(|m| m.value.as_ref());
        read_or_zero(value, "attributes.mass.value")
    }
}
