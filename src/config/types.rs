// src/config/types.rs
use crate::metrics::RootPolicy;
use crate::scoring::ScoreBand;
use serde::{Deserialize, Serialize};

/// Contents of `oquare.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsConfig {
    #[serde(default)]
    pub root_policy: RootPolicy,
    /// Root-to-leaf path budget. `0` disables the guard.
    #[serde(default = "default_max_paths")]
    pub max_paths: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            root_policy: RootPolicy::default(),
            max_paths: default_max_paths(),
        }
    }
}

fn default_max_paths() -> usize {
    1_000_000
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Xml,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Fails `evaluate` when any indicator bands strictly below this.
    #[serde(default)]
    pub fail_below: Option<ScoreBand>,
}
