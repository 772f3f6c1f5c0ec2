// src/cli/args.rs
use crate::scoring::ScoreBand;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oquare", version, about = "Structural quality metrics for ontologies")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score an ontology graph (JSON) against the OQuaRE indicators
    Evaluate {
        /// Ontology graph document
        model: PathBuf,
        /// Print the report as JSON
        #[arg(long, conflicts_with = "xml")]
        json: bool,
        /// Print the report in the legacy XML layout
        #[arg(long)]
        xml: bool,
        /// Count the root class as a class of its own
        #[arg(long)]
        include_root: bool,
        /// Also write the report (JSON, or XML with --xml) to FILE
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Exit with a failure code if any indicator bands below BAND
        #[arg(long, value_name = "BAND")]
        fail_below: Option<ScoreBand>,
    },
    /// Diff the indicators of two reports or indicator maps
    Compare {
        /// Baseline report
        a: PathBuf,
        /// Revised report
        b: PathBuf,
        /// Display name for the baseline
        #[arg(long)]
        name1: Option<String>,
        /// Display name for the revision
        #[arg(long)]
        name2: Option<String>,
        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
        /// Number of largest changes to list
        #[arg(long, default_value = "5")]
        top: usize,
    },
    /// Track indicators across a directory of dated reports
    Evolution {
        /// Directory holding one subdirectory per evaluation date
        dir: PathBuf,
        /// Print the series as JSON
        #[arg(long)]
        json: bool,
    },
}
