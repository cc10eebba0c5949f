//! Check result entity type

use serde::{Deserialize, Serialize};

use crate::core::quantity::round_to;

/// Comparison applied between actual and target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Actual must not exceed target
    #[serde(rename = "<=")]
    AtMost,
    /// Actual must reach target
    #[serde(rename = ">=")]
    AtLeast,
}

impl Operator {
    /// Whether `actual` satisfies the limit `target`
    pub fn holds(&self, actual: f64, target: f64) -> bool {
        match self {
            Operator::AtMost => actual <= target,
            Operator::AtLeast => actual >= target,
        }
    }

    /// Signed percent headroom of `actual` relative to `target`, positive when compliant
    pub fn margin(&self, actual: f64, target: f64) -> f64 {
        if target == 0.0 {
            return 0.0;
        }
        let headroom = match self {
            Operator::AtMost => target - actual,
            Operator::AtLeast => actual - target,
        };
        round_to(headroom / target * 100.0, 1)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::AtMost => "<=",
            Operator::AtLeast => ">=",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Pass/fail verdict of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Pass,
    Fail,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "PASS"),
            CheckStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// Outcome of comparing one requirement against one actual value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Requirement name the target came from
    pub requirement: String,

    /// Human-readable check name
    pub check: String,

    pub target: f64,

    pub actual: f64,

    /// Unit label shared by target and actual
    pub unit: String,

    pub operator: Operator,

    pub status: CheckStatus,

    /// Signed percent margin, one decimal
    pub margin: f64,
}

impl CheckResult {
    /// Build a result, deriving status and margin from the inputs
    pub fn new(
        requirement: impl Into<String>,
        check: impl Into<String>,
        target: f64,
        actual: f64,
        unit: impl Into<String>,
        operator: Operator,
    ) -> Self {
        let status = if operator.holds(actual, target) {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        };
        Self {
            requirement: requirement.into(),
            check: check.into(),
            target,
            actual,
            unit: unit.into(),
            operator,
            status,
            margin: operator.margin(actual, target),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}
