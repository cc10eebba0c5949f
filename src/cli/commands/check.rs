//! `dcc check` command - Run compliance checks

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::write_output;
use crate::cli::output::render;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::report::count_passing;
use crate::core::{load_inputs, Config, InputPaths};

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Bundle document with requirements, parts and metrics sections
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Requirements document (overrides the bundle's section)
    #[arg(long)]
    pub reqs: Option<PathBuf>,

    /// Architecture parts document (overrides the bundle's section)
    #[arg(long)]
    pub parts: Option<PathBuf>,

    /// Analysis metrics document (overrides the bundle's section)
    #[arg(long)]
    pub metrics: Option<PathBuf>,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Exit with an error when any check fails
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: CheckArgs, global: &GlobalOpts, config: &Config) -> Result<()> {
    let paths = InputPaths {
        bundle: args.input,
        requirements: args.reqs,
        parts: args.parts,
        metrics: args.metrics,
    };
    let inputs = load_inputs(&paths)?;
    let results = inputs.run()?;

    let format = global.format.resolve(config.default_format.as_deref());
    if format == OutputFormat::Text && !global.quiet && args.output.is_none() {
        println!("{}", style("Compliance checks").bold());
    }
    let content = render(&results, format)?;
    write_output(&content, args.output.as_deref(), global.quiet)?;

    let failed: Vec<&str> = results
        .iter()
        .filter(|r| !r.passed())
        .map(|r| r.check.as_str())
        .collect();
    for check in &failed {
        tracing::warn!(check, "check failed");
    }

    if (args.strict || config.strict()) && !failed.is_empty() {
        return Err(miette::miette!(
            code = "dcc::check::failed",
            help = "margins are listed in the report above",
            "{} of {} checks failed: {}",
            failed.len(),
            results.len(),
            failed.join(", ")
        ));
    }

    tracing::debug!(
        passed = count_passing(&results),
        total = results.len(),
        "compliance run complete"
    );
    Ok(())
}
