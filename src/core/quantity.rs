//! Numeric quantities as they arrive from upstream models
//!
//! Requirement targets, part masses and analysis metrics are exported by
//! different tools, so a "number" may show up as a JSON number, a numeric
//! string (`"500"`), null, or something else entirely. [`Quantity`] keeps the
//! raw value and [`Quantity::to_f64`] is the one place where it becomes a
//! float.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a field read as a number holds something that is not one
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum QuantityError {
    #[error("field '{field}' is not numeric: {value}")]
    #[diagnostic(
        code(dcc::quantity::non_numeric),
        help("upstream model exported a value that cannot be read as a number; fix the source data")
    )]
    NonNumeric { field: String, value: String },
}

/// A raw numeric value from an input document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    /// Plain number
    Number(f64),
    /// Number carried as text, e.g. SysML attribute values
    Text(String),
    /// Anything else (null, bool, list, mapping)
    Other(serde_json::Value),
}

impl Quantity {
    /// Coerce to `f64`. Null reads as zero; `field` names the value in errors.
    pub fn to_f64(&self, field: &str) -> Result<f64, QuantityError> {
        match self {
            Quantity::Number(n) => Ok(*n),
            Quantity::Text(s) => s.trim().parse::<f64>().map_err(|_| QuantityError::NonNumeric {
                field: field.to_string(),
                value: format!("{:?}", s),
            }),
            Quantity::Other(serde_json::Value::Null) => Ok(0.0),
            Quantity::Other(v) => Err(QuantityError::NonNumeric {
                field: field.to_string(),
                value: v.to_string(),
            }),
        }
    }
}

impl From<f64> for Quantity {
    fn from(n: f64) -> Self {
        Quantity::Number(n)
    }
}

impl From<&str> for Quantity {
    fn from(s: &str) -> Self {
        Quantity::Text(s.to_string())
    }
}

/// Read an optional quantity, defaulting to zero when absent
pub fn read_or_zero(value: Option<&Quantity>, field: &str) -> Result<f64, QuantityError> {
    match value {
        Some(q) => q.to_f64(field),
        None => Ok(0.0),
    }
}

/// Round to `digits` decimals, halves away from zero
///
/// Negative zero is normalized so a rounded margin never renders as `-0.0`.
pub fn round_to(value: f64, digits: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(digits);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Render a float the way a float repr does: `550.0`, `1100.3`, `0.30000000000000004`
///
/// Magnitudes from `1e16` up and below `1e-4` switch to exponent form with a
/// signed two-digit exponent (`1e+16`, `1.5e-07`).
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let s = if value > 0.0 { "inf" } else { "-inf" };
        s.to_string()
    } else if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        format_exponent(value)
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn format_exponent(value: f64) -> String {
    let shortest = format!("{:e}", value);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => shortest,
    }
}
