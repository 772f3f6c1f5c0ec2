// src/compare/input.rs
//! Reading indicator maps back from disk.

use super::diff::IndicatorMap;
use crate::error::{OquareError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// An indicator map with the name it should be reported under.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSource {
    pub name: String,
    pub indicators: IndicatorMap,
}

impl IndicatorSource {
    /// Reads either a bare `{name: value}` object or a serialized quality
    /// report (its `indicators` field). The name comes from the report's
    /// `ontology` field, falling back to the file stem.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, is not JSON, or holds a
    /// non-numeric indicator value.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| OquareError::io(e, path))?;
        let fallback = path
            .file_stem()
            .map_or_else(String::new, |s| s.to_string_lossy().into_owned());
        let source = Self::from_json_str(&content, &fallback)?;
        tracing::debug!(
            "Read {} indicators for '{}' from {}",
            source.indicators.len(),
            source.name,
            path.display()
        );
        Ok(source)
    }

    /// # Errors
    /// Returns error if the text is not a JSON object of numbers or a report.
    pub fn from_json_str(content: &str, fallback_name: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Object(root) = value else {
            return Err(OquareError::Indicators("indicator file must hold a JSON object".into()));
        };

        let name = root
            .get("ontology")
            .and_then(Value::as_str)
            .unwrap_or(fallback_name)
            .to_string();

        // A bare map may carry its own `ontology` name next to the values.
        let (table, skip) = match root.get("indicators") {
            Some(Value::Object(inner)) => (inner, None),
            Some(_) => {
                return Err(OquareError::Indicators("`indicators` must be a JSON object".into()));
            }
            None => (&root, Some("ontology")),
        };

        let indicators = table
            .iter()
            .filter(|(key, _)| Some(key.as_str()) != skip)
            .map(|(key, v)| {
                v.as_f64()
                    .map(|n| (key.clone(), n))
                    .ok_or_else(|| OquareError::Indicators(format!("indicator '{key}' is not a number")))
            })
            .collect::<Result<IndicatorMap>>()?;

        Ok(Self { name, indicators })
    }
}

/// Shorthand for [`IndicatorSource::load`] when only the values matter.
///
/// # Errors
/// See [`IndicatorSource::load`].
pub fn load_indicator_map(path: &Path) -> Result<IndicatorMap> {
    IndicatorSource::load(path).map(|s| s.indicators)
}
