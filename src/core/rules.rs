//! The fixed rule registry
//!
//! Each rule ties one requirement name to one actual value. The vocabulary of
//! requirement types and analysis outputs is small and known, so the table is
//! data rather than a rule language.

use serde::Serialize;

use crate::entities::{Operator, TargetField};

/// How a rule finds its requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementSource {
    /// Name lookup over requirements with attributes, last record wins
    Lookup,
    /// First raw requirement record carrying the name, attributes or not
    FirstByName,
}

/// Where a rule reads its actual value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActualSource {
    /// A scalar field of a metric bundle
    Metric {
        bundle: &'static str,
        field: &'static str,
    },
    /// Sum of `attributes.mass.value` over all parts, rounded to one decimal
    MassRollup,
}

impl std::fmt::Display for ActualSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActualSource::Metric { bundle, field } => write!(f, "metrics.{}.{}", bundle, field),
            ActualSource::MassRollup => write!(f, "sum(parts.attributes.mass.value)"),
        }
    }
}

/// One entry of the rule registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Check name shown in reports
    pub check: &'static str,
    /// Requirement name the target is read from
    pub requirement: &'static str,
    pub source: RequirementSource,
    pub target: TargetField,
    pub actual: ActualSource,
    pub unit: &'static str,
    pub operator: Operator,
}

impl Rule {
    /// A zero (or missing) target means the requirement does not apply
    pub fn skips(&self, target: f64) -> bool {
        target == 0.0
    }
}

/// All rules, in report order
pub const RULES: [Rule; 4] = [
    Rule {
        check: "Range",
        requirement: "RangeReq",
        source: RequirementSource::Lookup,
        target: TargetField::TargetValue,
        actual: ActualSource::Metric {
            bundle: "range_mission",
            field: "range_nm",
        },
        unit: "nm",
        operator: Operator::AtLeast,
    },
    Rule {
        check: "Structure Weight",
        requirement: "MaxStructureWeight",
        source: RequirementSource::Lookup,
        target: TargetField::MaxValue,
        actual: ActualSource::Metric {
            bundle: "mass_properties",
            field: "empty_weight_lbm",
        },
        unit: "lb",
        operator: Operator::AtMost,
    },
    Rule {
        check: "Cruise Speed",
        requirement: "CruiseSpeed",
        source: RequirementSource::Lookup,
        target: TargetField::MinValue,
        actual: ActualSource::Metric {
            bundle: "range_mission",
            field: "cruise_speed_kts",
        },
        unit: "kts",
        operator: Operator::AtLeast,
    },
    Rule {
        check: "Architecture Mass Roll-up",
        requirement: "MaxStructureWeight",
        source: RequirementSource::FirstByName,
        target: TargetField::MaxValue,
        actual: ActualSource::MassRollup,
        unit: "lb",
        operator: Operator::AtMost,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let checks: Vec<&str> = RULES.iter().map(|r| r.check).collect();
        assert_eq!(
            checks,
            vec!["Range", "Structure Weight", "Cruise Speed", "Architecture Mass Roll-up"]
        );
    }

    #[test]
    fn test_only_rollup_scans_raw_records() {
        for rule in &RULES {
            let expect_scan = rule.actual == ActualSource::MassRollup;
            assert_eq!(rule.source == RequirementSource::FirstByName, expect_scan);
        }
    }

    #[test]
    fn test_skip_on_zero_target() {
        assert!(RULES[0].skips(0.0));
        assert!(!RULES[0].skips(500.0));
        assert!(!RULES[0].skips(-1.0));
    }
}
