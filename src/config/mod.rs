// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, MetricsConfig, OutputFormat, ReportConfig};

use crate::error::Result;
use crate::metrics::MetricsOptions;
use std::path::Path;

impl Config {
    /// Loads `oquare.toml` from the working directory.
    ///
    /// # Errors
    /// Returns error if the file exists but is malformed.
    pub fn load() -> Result<Self> {
        io::load_from(Path::new("."))
    }

    /// # Errors
    /// Returns error on malformed TOML.
    pub fn parse_toml(content: &str) -> Result<Self> {
        io::parse_toml(content)
    }

    /// Snapshot options derived from the `[metrics]` section.
    #[must_use]
    pub fn metrics_options(&self) -> MetricsOptions {
        let options = MetricsOptions::new(self.metrics.root_policy);
        match self.metrics.max_paths {
            0 => options,
            limit => options.with_path_limit(limit),
        }
    }
}
