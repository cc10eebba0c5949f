//! Entity type definitions
//!
//! **Inputs** (exported by the modeling and simulation pipeline):
//! - [`Requirement`] - Named quantitative constraints from the system model
//! - [`Part`] - Architecture parts with mass attributes
//! - [`Metrics`] - Analysis output bundles (range mission, mass properties, ...)
//!
//! **Outputs:**
//! - [`CheckResult`] - Pass/fail verdict with signed margin

pub mod check;
pub mod metrics;
pub mod part;
pub mod record_set;
pub mod requirement;

pub use check::{CheckResult, CheckStatus, Operator};
pub use metrics::{MetricBundle, MetricEntry, Metrics};
pub use part::Part;
pub use record_set::RecordSet;
pub use requirement::{Requirement, TargetField};

/// Requirements keyed by qualified name, in document order
pub type RequirementSet = RecordSet<Requirement>;

/// Parts keyed by qualified name, in document order
pub type PartSet = RecordSet<Part>;
