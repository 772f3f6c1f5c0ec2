// src/reporting/xml.rs
//! Legacy `ontologyMetrics` XML document.
//!
//! Element names follow the format earlier OQuaRE tooling reads: a
//! `basicMetrics` section of integers and an `oquareMetrics` section where
//! ratios carry 15 decimals.

use std::fmt::Write;

use super::QualityReport;
use crate::error::Result;
use crate::metrics::IndicatorValue;

pub const GENERATOR: &str = concat!("OQuaRE-Rust-v", env!("CARGO_PKG_VERSION"));

/// Renders the report as an indented XML document.
///
/// # Errors
/// Returns error if formatting fails.
pub fn to_xml(report: &QualityReport) -> Result<String> {
    let mut out = String::new();
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(out, "<ontologyMetrics>")?;
    if !report.ontology.is_empty() {
        writeln!(out, "  <ontologyName>{}</ontologyName>", escape(&report.ontology))?;
    }
    writeln!(out, "  <timestamp>{}</timestamp>", report.generated_at.to_rfc3339())?;
    writeln!(out, "  <generator>{GENERATOR}</generator>")?;
    writeln!(out, "  <rootPolicy>{}</rootPolicy>", report.root_policy)?;

    writeln!(out, "  <basicMetrics>")?;
    for (name, value) in report.snapshot().basic_metrics() {
        writeln!(out, "    <{name}>{value}</{name}>")?;
    }
    writeln!(out, "  </basicMetrics>")?;

    writeln!(out, "  <oquareMetrics>")?;
    for (indicator, value) in report.indicators.iter() {
        let name = indicator.name();
        match value {
            IndicatorValue::Count(n) => writeln!(out, "    <{name}>{n}</{name}>")?,
            IndicatorValue::Ratio(r) => writeln!(out, "    <{name}>{r:.15}</{name}>")?,
        }
    }
    writeln!(out, "  </oquareMetrics>")?;
    writeln!(out, "</ontologyMetrics>")?;

    Ok(out)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
