// src/lib.rs
//! OQuaRE structural quality metrics for ontologies.
//!
//! Pipeline: an [`model::OntologyModel`] is counted into a
//! [`metrics::MetricSnapshot`], which yields the fourteen
//! [`metrics::Indicator`]s; [`scoring`] bands them and derives advice, and
//! [`compare`] diffs indicator maps between revisions.

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod exit;
pub mod metrics;
pub mod model;
pub mod reporting;
pub mod scoring;
