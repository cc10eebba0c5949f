//! `dcc config` command - Configuration management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::PROJECT_DIR;
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration values
    Show(ShowArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Show paths to configuration files
    Path,

    /// List all available configuration keys
    Keys,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Show only this key's value
    pub key: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Configuration key (e.g., default_format, strict)
    pub key: String,

    /// Value to set
    pub value: String,

    /// Set in global (user) config instead of project config
    #[arg(long, short = 'g')]
    pub global: bool,
}

/// Valid configuration keys
const VALID_KEYS: &[(&str, &str)] = &[
    ("default_format", "Default output format (text, json, yaml, csv, tsv, md)"),
    ("strict", "Fail `dcc check` when any check fails (true/false)"),
    ("log_level", "Log filter for stderr diagnostics (e.g. info, debug)"),
];

/// Run a config subcommand
pub fn run(cmd: ConfigCommands, global: &GlobalOpts, config: &Config) -> Result<()> {
    match cmd {
        ConfigCommands::Show(args) => run_show(args, global, config),
        ConfigCommands::Set(args) => run_set(args),
        ConfigCommands::Path => run_path(),
        ConfigCommands::Keys => run_keys(),
    }
}

fn get_config_value(config: &Config, key: &str) -> Option<String> {
    match key {
        "default_format" => config.default_format.clone(),
        "strict" => config.strict.map(|s| s.to_string()),
        "log_level" => config.log_level.clone(),
        _ => None,
    }
}

fn run_show(args: ShowArgs, global: &GlobalOpts, config: &Config) -> Result<()> {
    if let Some(key) = &args.key {
        if !VALID_KEYS.iter().any(|(k, _)| *k == key.as_str()) {
            return Err(miette::miette!("Unknown config key '{}'", key));
        }
        return match get_config_value(config, key) {
            Some(v) => {
                println!("{}", v);
                Ok(())
            }
            None => Err(miette::miette!("Key '{}' is not set", key)),
        };
    }

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(config).into_diagnostic()?);
        }
        _ => {
            println!("{}", style("Effective Configuration").bold().underlined());
            println!();
            for (key, _) in VALID_KEYS {
                let value = get_config_value(config, key);
                match value {
                    Some(v) => println!("  {} = {}", style(key).cyan(), v),
                    None => println!("  {} = {}", style(key).cyan(), style("(not set)").dim()),
                }
            }

            println!();
            println!("{}", style("Config Sources (in priority order):").dim());
            println!("  1. Environment variables (DCC_FORMAT, DCC_STRICT, DCC_LOG)");
            println!("  2. Project config ({}/config.yaml)", PROJECT_DIR);
            println!("  3. Global config (~/.config/dcc/config.yaml)");
            for source in &config.sources {
                println!("  {} {}", style("loaded:").dim(), source.display());
            }
        }
    }

    Ok(())
}

fn project_config_target() -> Result<PathBuf> {
    let cwd = std::env::current_dir().into_diagnostic()?;
    Ok(Config::project_config_path(&cwd)
        .unwrap_or_else(|| cwd.join(PROJECT_DIR).join("config.yaml")))
}

fn global_config_target() -> Result<PathBuf> {
    Config::global_config_path()
        .ok_or_else(|| miette::miette!("Could not determine the user config directory"))
}

fn run_set(args: SetArgs) -> Result<()> {
    if !VALID_KEYS.iter().any(|(k, _)| *k == args.key) {
        return Err(miette::miette!(
            help = "run `dcc config keys` for the list of keys",
            "Unknown config key '{}'",
            args.key
        ));
    }

    let value = match args.key.as_str() {
        "strict" => {
            let flag: bool = args
                .value
                .parse()
                .map_err(|_| miette::miette!("strict must be true or false"))?;
            serde_yml::Value::Bool(flag)
        }
        "default_format" => {
            <OutputFormat as clap::ValueEnum>::from_str(&args.value, true)
                .map_err(|_| miette::miette!("Unknown output format '{}'", args.value))?;
            serde_yml::Value::String(args.value.to_lowercase())
        }
        _ => serde_yml::Value::String(args.value.clone()),
    };

    let config_path = if args.global {
        global_config_target()?
    } else {
        project_config_target()?
    };

    let mut config_map: serde_yml::Value = if config_path.exists() {
        let content = fs::read_to_string(&config_path).into_diagnostic()?;
        serde_yml::from_str(&content).unwrap_or(serde_yml::Value::Mapping(Default::default()))
    } else {
        serde_yml::Value::Mapping(Default::default())
    };
    // An empty or scalar file is replaced by a fresh mapping
    if !config_map.is_mapping() {
        config_map = serde_yml::Value::Mapping(Default::default());
    }
    if let serde_yml::Value::Mapping(map) = &mut config_map {
        map.insert(serde_yml::Value::String(args.key.clone()), value);
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).into_diagnostic()?;
    }
    let yaml = serde_yml::to_string(&config_map).into_diagnostic()?;
    fs::write(&config_path, yaml).into_diagnostic()?;

    let scope = if args.global { "global" } else { "project" };
    println!(
        "{} Set {} = {} in {} config ({})",
        style("✓").green(),
        style(&args.key).cyan(),
        style(&args.value).yellow(),
        scope,
        config_path.display()
    );

    Ok(())
}

fn run_path() -> Result<()> {
    println!("{}", style("Configuration file paths:").bold());
    println!();
    match Config::global_config_path() {
        Some(path) => {
            let state = if path.exists() { "(exists)" } else { "(not created)" };
            println!("  {} {} {}", style("Global:").cyan(), path.display(), style(state).dim());
        }
        None => println!("  {} {}", style("Global:").cyan(), style("(unavailable)").dim()),
    }

    let project = project_config_target()?;
    let state = if project.exists() { "(exists)" } else { "(not created)" };
    println!("  {} {} {}", style("Project:").cyan(), project.display(), style(state).dim());
    Ok(())
}

fn run_keys() -> Result<()> {
    println!("{}", style("Available configuration keys:").bold());
    println!();
    for (key, description) in VALID_KEYS {
        println!("  {:<16} {}", style(key).cyan(), description);
    }
    Ok(())
}
