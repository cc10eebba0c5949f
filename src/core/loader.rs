//! Input loading
//!
//! Requirements, parts and metrics come from separate exports (SysML
//! extraction, architecture model, nTop aerodeck). They can be given as
//! individual documents or as one bundle document with a section per data
//! set; individual documents override the bundle's sections.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::evaluator::run_all_checks;
use crate::core::quantity::QuantityError;
use crate::document::{self, DocumentError};
use crate::entities::{CheckResult, Metrics, PartSet, RequirementSet};

/// The three data sets a compliance run consumes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckInputs {
    #[serde(default, alias = "reqs")]
    pub requirements: RequirementSet,

    #[serde(default)]
    pub parts: PartSet,

    #[serde(default)]
    pub metrics: Metrics,
}

impl CheckInputs {
    /// Run all compliance checks over these inputs
    pub fn run(&self) -> Result<Vec<CheckResult>, QuantityError> {
        run_all_checks(&self.requirements, &self.parts, &self.metrics)
    }
}

/// Where to read each data set from
#[derive(Debug, Clone, Default)]
pub struct InputPaths {
    /// Bundle document with `requirements`, `parts` and `metrics` sections
    pub bundle: Option<PathBuf>,
    pub requirements: Option<PathBuf>,
    pub parts: Option<PathBuf>,
    pub metrics: Option<PathBuf>,
}

impl InputPaths {
    pub fn is_empty(&self) -> bool {
        self.bundle.is_none()
            && self.requirements.is_none()
            && self.parts.is_none()
            && self.metrics.is_none()
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Document(#[from] DocumentError),

    #[error("no input documents given")]
    #[diagnostic(
        code(dcc::load::no_inputs),
        help("pass --input <bundle> or any of --reqs, --parts, --metrics")
    )]
    NoInputs,
}

/// Load the inputs named by `paths`; data sets without a source stay empty
pub fn load_inputs(paths: &InputPaths) -> Result<CheckInputs, LoadError> {
    if paths.is_empty() {
        return Err(LoadError::NoInputs);
    }

    let mut inputs = match &paths.bundle {
        Some(path) => document::parse_file::<CheckInputs>(path)?,
        None => CheckInputs::default(),
    };

    if let Some(path) = &paths.requirements {
        inputs.requirements = load_section(path)?;
    }
    if let Some(path) = &paths.parts {
        inputs.parts = load_section(path)?;
    }
    if let Some(path) = &paths.metrics {
        inputs.metrics = load_section(path)?;
    }

    tracing::info!(
        requirements = inputs.requirements.len(),
        parts = inputs.parts.len(),
        metric_bundles = inputs.metrics.bundles.len(),
        "loaded inputs"
    );
    Ok(inputs)
}

fn load_section<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DocumentError> {
    document::parse_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_no_inputs() {
        let err = load_inputs(&InputPaths::default()).unwrap_err();
        assert!(matches!(err, LoadError::NoInputs));
    }

    #[test]
    fn test_load_separate_documents() {
        let dir = tempdir().unwrap();
        let reqs = dir.path().join("reqs.json");
        let metrics = dir.path().join("metrics.yaml");
        fs::write(
            &reqs,
            r#"{"Aircraft::RangeReq": {"name": "RangeReq", "attributes": {"targetValue": "500"}}}"#,
        )
        .unwrap();
        fs::write(&metrics, "range_mission:\n  range_nm: 550\n").unwrap();

        let inputs = load_inputs(&InputPaths {
            requirements: Some(reqs),
            metrics: Some(metrics),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(inputs.requirements.len(), 1);
        assert!(inputs.parts.is_empty());

        let results = inputs.run().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].margin, 10.0);
    }

    #[test]
    fn test_bundle_with_override() {
        let dir = tempdir().unwrap();
        let bundle = dir.path().join("design.yaml");
        fs::write(
            &bundle,
            "reqs:\n  w:\n    name: MaxStructureWeight\n    attributes:\n      maxValue: '1000'\n\
             parts:\n  wing:\n    attributes:\n      mass:\n        value: 400\n\
             metrics:\n  mass_properties:\n    empty_weight_lbm: 980\n",
        )
        .unwrap();
        let parts = dir.path().join("parts.json");
        fs::write(&parts, r#"{"fuselage": {"attributes": {"mass": {"value": 1200}}}}"#).unwrap();

        let inputs = load_inputs(&InputPaths {
            bundle: Some(bundle.clone()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(inputs.parts.len(), 1);
        assert!(inputs.run().unwrap().iter().all(|r| r.passed()));

        let inputs = load_inputs(&InputPaths {
            bundle: Some(bundle),
            parts: Some(parts),
            ..Default::default()
        })
        .unwrap();
        let results = inputs.run().unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].passed());
        assert!(!results[1].passed());
        assert_eq!(results[1].actual, 1200.0);
    }
}
