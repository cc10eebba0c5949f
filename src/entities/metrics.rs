//! Analysis metric bundles (nTop aerodeck, flight mechanics, mass properties)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::quantity::{read_or_zero, Quantity, QuantityError};

/// Named scalar outputs of one analysis run
pub type MetricBundle = BTreeMap<String, Quantity>;

/// One top-level entry of a metrics document
///
/// Exports mix bundles with loose scalars such as run ids, so anything that
/// is not a mapping is kept as-is and only rejected when a check reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricEntry {
    Bundle(MetricBundle),
    Other(serde_json::Value),
}

/// All metric bundles, keyed by bundle name (e.g. `range_mission`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metrics {
    pub bundles: BTreeMap<String, MetricEntry>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `bundle.field`, creating the bundle (or replacing a loose scalar) if needed
    pub fn set(&mut self, bundle: &str, field: &str, value: impl Into<Quantity>) {
        let entry = self
            .bundles
            .entry(bundle.to_string())
            .or_insert_with(|| MetricEntry::Bundle(MetricBundle::new()));
        if let MetricEntry::Other(_) = entry {
            *entry = MetricEntry::Bundle(MetricBundle::new());
        }
        if let MetricEntry::Bundle(fields) = entry {
            fields.insert(field.to_string(), value.into());
        }
    }

    /// Numeric value of `bundle.field`; a missing or null bundle or field reads as zero
    pub fn value(&self, bundle: &str, field: &str) -> Result<f64, QuantityError> {
        match self.bundles.get(bundle) {
            None | Some(MetricEntry::Other(serde_json::Value::Null)) => Ok(0.0),
            Some(MetricEntry::Bundle(fields)) => {
                read_or_zero(fields.get(field), &format!("metrics.{}.{}", bundle, field))
            }
            Some(MetricEntry::Other(v)) => Err(QuantityError::NonNumeric {
                field: format!("metrics.{}", bundle),
                value: v.to_string(),
            }),
        }
    }
}
