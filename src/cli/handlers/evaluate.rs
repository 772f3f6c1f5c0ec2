// src/cli/handlers/evaluate.rs
use super::reject_input;
use crate::config::{Config, OutputFormat};
use crate::exit::OquareExit;
use crate::metrics::RootPolicy;
use crate::model::GraphOntology;
use crate::reporting::{console, json, xml, QualityReport};
use crate::scoring::ScoreBand;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// Arguments of `oquare evaluate`.
#[derive(Debug, Clone, Default)]
pub struct EvaluateRequest {
    pub model: PathBuf,
    pub json: bool,
    pub xml: bool,
    pub include_root: bool,
    pub out: Option<PathBuf>,
    pub fail_below: Option<ScoreBand>,
}

/// Handles the evaluate command.
///
/// # Errors
/// Returns error if configuration is malformed or the output file cannot be written.
pub fn handle_evaluate(req: &EvaluateRequest) -> Result<OquareExit> {
    let config = Config::load()?;

    let mut options = config.metrics_options();
    if req.include_root {
        options.root_policy = RootPolicy::Include;
    }
    let format = if req.json {
        OutputFormat::Json
    } else if req.xml {
        OutputFormat::Xml
    } else {
        config.report.format
    };

    let onto = match GraphOntology::load(&req.model) {
        Ok(onto) => onto,
        Err(e) => return Ok(reject_input(&req.model, &e)),
    };
    let report = QualityReport::evaluate(&onto, &options)?;

    if let Some(out) = &req.out {
        let document = match format {
            OutputFormat::Xml => xml::to_xml(&report)?,
            OutputFormat::Text | OutputFormat::Json => json::report_json(&report)?,
        };
        fs::write(out, document).with_context(|| format!("writing {}", out.display()))?;
        tracing::info!("Report written to {}", out.display());
    }

    match format {
        OutputFormat::Text => console::print_report(&report),
        OutputFormat::Json => println!("{}", json::report_json(&report)?),
        OutputFormat::Xml => print!("{}", xml::to_xml(&report)?),
    }

    Ok(quality_gate(&report, req.fail_below.or(config.report.fail_below)))
}

fn quality_gate(report: &QualityReport, floor: Option<ScoreBand>) -> OquareExit {
    let Some(floor) = floor else {
        return OquareExit::Success;
    };
    let failing = report.below(floor);
    if failing.is_empty() {
        return OquareExit::Success;
    }

    let names: Vec<&str> = failing.iter().map(|i| i.name()).collect();
    eprintln!(
        "{} {} indicator(s) below {floor}: {}",
        "Quality gate failed:".red().bold(),
        failing.len(),
        names.join(", ")
    );
    OquareExit::QualityGateFailed
}
