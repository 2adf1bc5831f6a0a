//! Configuration system for Strata with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment (`STRATA_*`) > File > Defaults

mod defaults;
mod loading;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strata_analysis::AnalyzerConfig;

pub use defaults::*;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "strata.config.json";

/// Strata configuration - loaded from strata.config.json, env, and flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrataConfig {
    /// Repository root to scan
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Directory names skipped anywhere in the tree
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Scan dot-prefixed directories too
    #[serde(default)]
    pub include_hidden: bool,

    /// Files above this size (bytes) are skipped
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

impl StrataConfig {
    /// Scan settings for `strata-analysis`.
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            root: self.root.clone(),
            exclude: self.exclude.clone(),
            include_hidden: self.include_hidden,
            max_file_size: self.max_file_size,
            runtime: None,
        }
    }
}

impl Default for StrataConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_exclude(),
            include_hidden: false,
            max_file_size: default_max_file_size(),
        }
    }
}
