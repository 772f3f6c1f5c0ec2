// src/cli/dispatch.rs
//! Routes parsed subcommands to their handlers.

use super::args::Commands;
use super::handlers::{handle_compare, handle_evaluate, handle_evolution, EvaluateRequest};
use crate::exit::OquareExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<OquareExit> {
    match command {
        Commands::Evaluate {
            model,
            json,
            xml,
            include_root,
            out,
            fail_below,
        } => handle_evaluate(&EvaluateRequest {
            model,
            json,
            xml,
            include_root,
            out,
            fail_below,
        }),
        Commands::Compare {
            a,
            b,
            name1,
            name2,
            json,
            top,
        } => handle_compare(&a, &b, name1, name2, json, top),
        Commands::Evolution { dir, json } => handle_evolution(&dir, json),
    }
}
