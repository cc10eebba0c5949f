//! Core module - evaluation engine, inputs and configuration

pub mod config;
pub mod evaluator;
pub mod loader;
pub mod quantity;
pub mod report;
pub mod rules;

pub use config::Config;
pub use evaluator::{build_lookup, evaluate_rule, run_all_checks, total_mass, RequirementLookup};
pub use loader::{load_inputs, CheckInputs, InputPaths, LoadError};
pub use quantity::{Quantity, QuantityError};
pub use report::format_report;
pub use rules::{ActualSource, RequirementSource, Rule, RULES};
