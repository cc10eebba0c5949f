//! `dcc rules` command - List the compliance rules

use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::escape_csv;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::rules::{RequirementSource, Rule, RULES};
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct RulesArgs {}

fn source_label(rule: &Rule) -> &'static str {
    match rule.source {
        RequirementSource::Lookup => "lookup",
        RequirementSource::FirstByName => "first by name",
    }
}

fn row(rule: &Rule) -> [String; 6] {
    [
        rule.check.to_string(),
        format!("{} ({})", rule.requirement, source_label(rule)),
        rule.target.to_string(),
        rule.operator.to_string(),
        rule.actual.to_string(),
        rule.unit.to_string(),
    ]
}

pub fn run(_args: RulesArgs, global: &GlobalOpts, config: &Config) -> Result<()> {
    let header = ["Check", "Requirement", "Target", "Op", "Actual", "Unit"];

    match global.format.resolve(config.default_format.as_deref()) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&RULES).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&RULES).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("{}", header.join(",").to_lowercase());
            for rule in &RULES {
                let fields: Vec<String> = row(rule).iter().map(|f| escape_csv(f)).collect();
                println!("{}", fields.join(","));
            }
        }
        OutputFormat::Tsv => {
            for rule in &RULES {
                println!("{}", row(rule).join("\t"));
            }
        }
        format => {
            let mut builder = Builder::default();
            builder.push_record(header);
            for rule in &RULES {
                builder.push_record(row(rule));
            }
            let mut table = builder.build();
            if format == OutputFormat::Md {
                table.with(Style::markdown());
            } else {
                table.with(Style::rounded());
            }
            println!("{}", table);
            if !global.quiet {
                println!();
                println!("A rule is skipped when its target is zero or missing.");
            }
        }
    }

    Ok(())
}
