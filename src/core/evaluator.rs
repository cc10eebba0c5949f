//! Compliance evaluation: requirements vs architecture vs CAD
//!
//! Compares model requirements and architecture parts against analysis
//! metrics and returns one [`CheckResult`] per applicable rule.

use std::collections::HashMap;

use crate::core::quantity::{round_to, QuantityError};
use crate::core::rules::{ActualSource, RequirementSource, Rule, RULES};
use crate::entities::{CheckResult, Metrics, PartSet, Requirement, RequirementSet};

/// Requirements with attributes, indexed by name
pub type RequirementLookup<'a> = HashMap<&'a str, &'a Requirement>;

/// Index requirements by name
///
/// Requirements without a name or without attributes are left out. When two
/// records share a name the later one wins.
pub fn build_lookup(reqs: &RequirementSet) -> RequirementLookup<'_> {
    reqs.values()
        .filter(|r| r.has_attributes())
        .filter_map(|r| r.name().map(|name| (name, r)))
        .collect()
}

/// Sum of all part masses, parts without mass counting as zero
pub fn total_mass(parts: &PartSet) -> Result<f64, QuantityError> {
    let mut total = 0.0;
    for (qname, part) in parts.iter() {
        let mass = part.mass()?;
        tracing::trace!(part = qname, mass, "mass roll-up");
        total += mass;
    }
    Ok(total)
}

/// Evaluate one rule; `Ok(None)` when its target is zero or missing
pub fn evaluate_rule(
    rule: &Rule,
    reqs: &RequirementSet,
    lookup: &RequirementLookup<'_>,
    parts: &PartSet,
    metrics: &Metrics,
) -> Result<Option<CheckResult>, QuantityError> {
    let requirement = match rule.source {
        RequirementSource::Lookup => lookup.get(rule.requirement).copied(),
        RequirementSource::FirstByName => reqs.values().find(|r| r.name() == Some(rule.requirement)),
    };

    let target = match requirement {
        Some(req) => req.limit(rule.target)?,
        None => 0.0,
    };
    if rule.skips(target) {
        tracing::debug!(check = rule.check, requirement = rule.requirement, "skipped, no target");
        return Ok(None);
    }

    let actual = match rule.actual {
        ActualSource::Metric { bundle, field } => metrics.value(bundle, field)?,
        ActualSource::MassRollup => round_to(total_mass(parts)?, 1),
    };

    let result = CheckResult::new(rule.requirement, rule.check, target, actual, rule.unit, rule.operator);
    tracing::debug!(
        check = rule.check,
        target,
        actual,
        status = %result.status,
        margin = result.margin,
        "evaluated"
    );
    Ok(Some(result))
}

/// Run every rule in registry order and collect the results
pub fn run_all_checks(
    reqs: &RequirementSet,
    parts: &PartSet,
    metrics: &Metrics,
) -> Result<Vec<CheckResult>, QuantityError> {
    let lookup = build_lookup(reqs);
    let mut results = Vec::with_capacity(RULES.len());
    for rule in &RULES {
        if let Some(result) = evaluate_rule(rule, reqs, &lookup, parts, metrics)? {
            results.push(result);
        }
    }
    Ok(results)
}
