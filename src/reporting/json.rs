// src/reporting/json.rs
//! JSON rendering for reports and comparisons.

use super::QualityReport;
use crate::compare::{ComparisonReport, Evolution};
use crate::error::Result;
use serde::Serialize;

/// Pretty-printed JSON of any report type.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// # Errors
/// Returns error if serialization fails.
pub fn report_json(report: &QualityReport) -> Result<String> {
    to_json(report)
}

/// # Errors
/// Returns error if serialization fails.
pub fn comparison_json(report: &ComparisonReport) -> Result<String> {
    to_json(report)
}

/// # Errors
/// Returns error if serialization fails.
pub fn evolution_json(evolution: &Evolution) -> Result<String> {
    to_json(evolution)
}
