//! Rendering check results in the supported output formats

use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{escape_csv, truncate_str};
use crate::cli::OutputFormat;
use crate::core::quantity::format_number;
use crate::core::report::{count_passing, format_margin, format_report};
use crate::entities::{CheckResult, CheckStatus};

const COLUMNS: [&str; 8] = [
    "check",
    "requirement",
    "status",
    "actual",
    "operator",
    "target",
    "unit",
    "margin",
];

fn row(r: &CheckResult) -> [String; 8] {
    [
        r.check.clone(),
        r.requirement.clone(),
        r.status.to_string(),
        format_number(r.actual),
        r.operator.to_string(),
        format_number(r.target),
        r.unit.clone(),
        format_margin(r.margin),
    ]
}

/// Render results; `Auto` must already be resolved and is treated as text
pub fn render(results: &[CheckResult], format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Auto | OutputFormat::Text => format!("{}\n", format_report(results)),
        OutputFormat::Json => {
            format!("{}\n", serde_json::to_string_pretty(results).into_diagnostic()?)
        }
        OutputFormat::Yaml => serde_yml::to_string(results).into_diagnostic()?,
        OutputFormat::Csv => render_csv(results),
        OutputFormat::Tsv => render_tsv(results),
        OutputFormat::Md => render_md(results),
    };
    Ok(out)
}

fn render_csv(results: &[CheckResult]) -> String {
    let mut out = COLUMNS.join(",");
    out.push('\n');
    for r in results {
        let fields: Vec<String> = row(r).iter().map(|f| escape_csv(f)).collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

fn render_tsv(results: &[CheckResult]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<30} {:<20} {:<6} {:>12} {:<2} {:>12} {:<5} {:>9}\n",
        style("CHECK").bold(),
        style("REQUIREMENT").bold(),
        style("STATUS").bold(),
        style("ACTUAL").bold(),
        style("OP").bold(),
        style("TARGET").bold(),
        style("UNIT").bold(),
        style("MARGIN").bold()
    ));
    out.push_str(&"-".repeat(105));
    out.push('\n');

    for r in results {
        let [check, requirement, status, actual, operator, target, unit, margin] = row(r);
        let status = match r.status {
            CheckStatus::Pass => style(status).green(),
            CheckStatus::Fail => style(status).red(),
        };
        out.push_str(&format!(
            "{:<30} {:<20} {:<6} {:>12} {:<2} {:>12} {:<5} {:>9}\n",
            truncate_str(&check, 30),
            truncate_str(&requirement, 20),
            status,
            actual,
            operator,
            target,
            unit,
            margin
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "{}/{} checks passed\n",
        style(count_passing(results)).cyan(),
        results.len()
    ));
    out
}

fn render_md(results: &[CheckResult]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Check", "Requirement", "Status", "Actual", "Op", "Target", "Unit", "Margin"]);
    for r in results {
        builder.push_record(row(r));
    }

    let mut out = String::from("# Compliance Report\n\n");
    out.push_str(&builder.build().with(Style::markdown()).to_string());
    out.push_str(&format!(
        "\n\n**{}/{} checks passed**\n",
        count_passing(results),
        results.len()
    ));
    out
}
