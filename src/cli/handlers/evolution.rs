// src/cli/handlers/evolution.rs
use crate::compare::{Evolution, IndicatorMap, IndicatorSource};
use crate::exit::OquareExit;
use crate::reporting::{console, json};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use walkdir::WalkDir;

/// Handles the evolution command.
///
/// Every `*.json` file below `dir` is one evaluation, labelled by the name of
/// the directory holding it (files directly in `dir` use their stem).
///
/// # Errors
/// Returns error if `dir` cannot be walked or the series cannot be serialized.
pub fn handle_evolution(dir: &Path, as_json: bool) -> Result<OquareExit> {
    if !dir.is_dir() {
        eprintln!("{} {} is not a directory", "Invalid input".red(), dir.display());
        return Ok(OquareExit::InvalidInput);
    }

    let entries = collect_entries(dir)?;
    if entries.is_empty() {
        eprintln!("{} no readable reports under {}", "Invalid input".red(), dir.display());
        return Ok(OquareExit::InvalidInput);
    }

    let evolution = Evolution::from_entries(entries);
    if as_json {
        println!("{}", json::evolution_json(&evolution)?);
    } else {
        console::print_evolution(&evolution);
    }
    Ok(OquareExit::Success)
}

fn collect_entries(dir: &Path) -> Result<Vec<(String, IndicatorMap)>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().map_or(true, |e| e != "json") {
            continue;
        }
        match IndicatorSource::load(path) {
            Ok(source) => entries.push((entry_label(dir, path), source.indicators)),
            Err(e) => tracing::warn!("Skipping {}: {e}", path.display()),
        }
    }
    Ok(entries)
}

fn entry_label(root: &Path, path: &Path) -> String {
    let parent = path.parent().filter(|p| *p != root);
    parent
        .and_then(Path::file_name)
        .or_else(|| path.file_stem())
        .map_or_else(String::new, |s| s.to_string_lossy().into_owned())
}
