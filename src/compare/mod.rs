// src/compare/mod.rs
//! Comparison of indicator maps between ontology revisions.

pub mod diff;
pub mod evolution;
pub mod input;

pub use self::diff::{
    compare, compare_named, ComparisonReport, ComparisonSummary, IndicatorDelta, IndicatorMap,
};
pub use self::evolution::{Evolution, MAX_ENTRIES};
pub use self::input::{load_indicator_map, IndicatorSource};
