// src/config/io.rs
use super::types::Config;
use crate::error::{OquareError, Result};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "oquare.toml";

/// Parses `oquare.toml` content. Missing sections and fields take defaults.
///
/// # Errors
/// Returns error on malformed TOML or unknown enum values.
pub fn parse_toml(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Loads `oquare.toml` from `dir`, or defaults when the file is absent.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_from(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        tracing::debug!("No {CONFIG_FILE} in {}, using defaults", dir.display());
        return Ok(Config::default());
    }
    let content = fs::read_to_string(&path).map_err(|e| OquareError::io(e, &path))?;
    let config = parse_toml(&content)?;
    tracing::debug!("Loaded {}", path.display());
    Ok(config)
}
