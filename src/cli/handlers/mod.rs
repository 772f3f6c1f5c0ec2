// src/cli/handlers/mod.rs
//! Command handlers. Each returns the process exit status; unreadable input
//! maps to [`OquareExit::InvalidInput`] rather than a hard error.

mod compare;
mod evaluate;
mod evolution;

pub use self::compare::handle_compare;
pub use self::evaluate::{handle_evaluate, EvaluateRequest};
pub use self::evolution::handle_evolution;

use crate::error::OquareError;
use crate::exit::OquareExit;
use colored::Colorize;
use std::path::Path;

/// Reports an input that could not be loaded and picks the exit status.
fn reject_input(path: &Path, err: &OquareError) -> OquareExit {
    eprintln!("{} {}: {err}", "Invalid input".red(), path.display());
    OquareExit::InvalidInput
}
