//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project configuration directory
pub const PROJECT_DIR: &str = ".dcc";

/// DCC configuration with layered hierarchy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format for `dcc check`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,

    /// Fail `dcc check` when any check fails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,

    /// Log filter directive, e.g. `debug` or `dcc=trace`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Files the configuration was read from, lowest priority first
    #[serde(skip)]
    pub sources: Vec<PathBuf>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let start = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let mut config = Self::load_from(Self::global_config_path(), &start);
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Merge the global file and the nearest project file found from `start`
    pub fn load_from(global_path: Option<PathBuf>, start: &Path) -> Self {
        // 1. Built-in defaults (already in Default impl)
        let mut config = Config::default();

        // 2. Global user config
        if let Some(path) = global_path {
            config.merge_file(&path);
        }

        // 3. Project config (.dcc/config.yaml)
        if let Some(path) = Self::project_config_path(start) {
            config.merge_file(&path);
        }

        config
    }

    /// 4. Environment variables
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(format) = lookup("DCC_FORMAT") {
            self.default_format = Some(format);
        }
        if let Some(strict) = lookup("DCC_STRICT") {
            self.strict = Some(matches!(
                strict.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ));
        }
        if let Some(level) = lookup("DCC_LOG") {
            self.log_level = Some(level);
        }
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "dcc")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Find `.dcc/config.yaml` in `start` or its nearest ancestor that has one
    pub fn project_config_path(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(PROJECT_DIR).join("config.yaml"))
            .find(|path| path.is_file())
    }

    fn merge_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        if let Ok(contents) = std::fs::read_to_string(path) {
            if let Ok(other) = serde_yml::from_str::<Config>(&contents) {
                self.merge(other);
                self.sources.push(path.to_path_buf());
            }
        }
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
        if other.strict.is_some() {
            self.strict = other.strict;
        }
        if other.log_level.is_some() {
            self.log_level = other.log_level;
        }
    }

    /// Whether failing checks should make `dcc check` exit non-zero
    pub fn strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }
}
