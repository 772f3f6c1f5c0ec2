// src/cli/handlers/compare.rs
use super::reject_input;
use crate::compare::{compare_named, IndicatorSource};
use crate::exit::OquareExit;
use crate::reporting::{console, json};
use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::path::Path;

/// Handles the compare command.
///
/// # Errors
/// Returns error if the comparison cannot be serialized.
pub fn handle_compare(
    a: &Path,
    b: &Path,
    name1: Option<String>,
    name2: Option<String>,
    as_json: bool,
    top: usize,
) -> Result<OquareExit> {
    if same_file(a, b) {
        eprintln!("{}", "Cannot compare a report with itself; pass two different files.".red());
        return Ok(OquareExit::InvalidInput);
    }

    let source_a = match IndicatorSource::load(a) {
        Ok(s) => s,
        Err(e) => return Ok(reject_input(a, &e)),
    };
    let source_b = match IndicatorSource::load(b) {
        Ok(s) => s,
        Err(e) => return Ok(reject_input(b, &e)),
    };

    let report = compare_named(
        name1.unwrap_or(source_a.name),
        &source_a.indicators,
        name2.unwrap_or(source_b.name),
        &source_b.indicators,
    );

    if as_json {
        println!("{}", json::comparison_json(&report)?);
    } else {
        console::print_comparison(&report, top);
    }
    Ok(OquareExit::Success)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => false,
    }
}
