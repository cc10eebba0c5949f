//! Plain-text compliance report

use crate::core::quantity::format_number;
use crate::entities::CheckResult;

/// Signed margin with a percent sign, e.g. `+10.0%` or `-20.0%`
pub fn format_margin(margin: f64) -> String {
    if margin >= 0.0 {
        format!("+{}%", format_number(margin))
    } else {
        format!("{}%", format_number(margin))
    }
}

/// One report line for a result
pub fn format_line(r: &CheckResult) -> String {
    format!(
        "  {:<30} {}  ({} {} {} {} {}, margin: {})",
        r.check,
        r.status,
        format_number(r.actual),
        r.unit,
        r.operator,
        format_number(r.target),
        r.unit,
        format_margin(r.margin)
    )
}

/// Number of passing results
pub fn count_passing(results: &[CheckResult]) -> usize {
    results.iter().filter(|r| r.passed()).count()
}

/// Render results as a text report ending in `"<passing>/<total> checks passed"`
pub fn format_report(results: &[CheckResult]) -> String {
    let mut lines: Vec<String> = results.iter().map(format_line).collect();
    lines.push(format!(
        "\n  {}/{} checks passed",
        count_passing(results),
        results.len()
    ));
    lines.join("\n")
}
