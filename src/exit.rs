// src/exit.rs
//! Process exit statuses of `oquare`. Scripts and CI gates key off these.

use std::process::{ExitCode, Termination};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OquareExit {
    Success = 0,
    /// Unexpected failure: I/O while writing output, malformed `oquare.toml`.
    Error = 1,
    /// A model, report or directory given on the command line was unusable.
    InvalidInput = 2,
    /// Some indicator banded below the requested floor.
    QualityGateFailed = 3,
}

impl OquareExit {
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl Termination for OquareExit {
    fn report(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}
