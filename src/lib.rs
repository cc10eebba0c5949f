//! DCC: Design Compliance Checker
//!
//! Compares model requirements and architecture parts against CAD/analysis
//! metrics and reports pass/fail with margins.

pub mod cli;
pub mod core;
pub mod document;
pub mod entities;
