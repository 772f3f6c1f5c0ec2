// src/compare/diff.rs
//! Per-indicator deltas between two indicator maps.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Name → value, as produced by [`crate::metrics::IndicatorSet::to_name_map`].
pub type IndicatorMap = BTreeMap<String, f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorDelta {
    pub name: String,
    pub value_a: f64,
    pub value_b: f64,
    /// `value_b - value_a`.
    pub difference: f64,
    /// `difference / |value_a| * 100`; `None` when `value_a` is zero.
    pub percent_change: Option<f64>,
}

impl IndicatorDelta {
    #[must_use]
    pub fn new(name: impl Into<String>, value_a: f64, value_b: f64) -> Self {
        let difference = value_b - value_a;
        let percent_change = if value_a == 0.0 {
            None
        } else {
            Some(difference / value_a.abs() * 100.0)
        };
        Self {
            name: name.into(),
            value_a,
            value_b,
            difference,
            percent_change,
        }
    }

    #[must_use]
    pub fn direction(&self) -> Ordering {
        self.difference.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub total: usize,
    pub improved: usize,
    pub degraded: usize,
    pub unchanged: usize,
    /// Mean over defined percent changes; `0.0` when none is defined.
    pub average_percent_change: f64,
}

impl ComparisonSummary {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_deltas(deltas: &[IndicatorDelta]) -> Self {
        let mut summary = Self {
            total: deltas.len(),
            ..Self::default()
        };
        for delta in deltas {
            match delta.direction() {
                Ordering::Greater => summary.improved += 1,
                Ordering::Less => summary.degraded += 1,
                Ordering::Equal => summary.unchanged += 1,
            }
        }

        let defined: Vec<f64> = deltas.iter().filter_map(|d| d.percent_change).collect();
        if !defined.is_empty() {
            summary.average_percent_change = defined.iter().sum::<f64>() / defined.len() as f64;
        }
        summary
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub name_a: String,
    pub name_b: String,
    /// One entry per key of either input, sorted by name.
    pub entries: Vec<IndicatorDelta>,
    pub summary: ComparisonSummary,
}

impl ComparisonReport {
    /// The `n` largest changes by absolute difference; ties keep name order.
    #[must_use]
    pub fn top_changes(&self, n: usize) -> Vec<&IndicatorDelta> {
        let mut ranked: Vec<&IndicatorDelta> = self.entries.iter().collect();
        ranked.sort_by(|a, b| {
            b.difference
                .abs()
                .partial_cmp(&a.difference.abs())
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        ranked.truncate(n);
        ranked
    }

    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&IndicatorDelta> {
        self.entries.iter().find(|e| e.name == name)
    }
}

/// Diffs two maps. Keys missing on one side count as `0.0`.
#[must_use]
pub fn compare(a: &IndicatorMap, b: &IndicatorMap) -> Vec<IndicatorDelta> {
    let keys: BTreeSet<&String> = a.keys().chain(b.keys()).collect();
    keys.into_iter()
        .map(|key| {
            let value_a = a.get(key).copied().unwrap_or(0.0);
            let value_b = b.get(key).copied().unwrap_or(0.0);
            IndicatorDelta::new(key.clone(), value_a, value_b)
        })
        .collect()
}

/// Diffs two named maps and aggregates the result.
#[must_use]
pub fn compare_named(
    name_a: impl Into<String>,
    a: &IndicatorMap,
    name_b: impl Into<String>,
    b: &IndicatorMap,
) -> ComparisonReport {
    let entries = compare(a, b);
    let summary = ComparisonSummary::from_deltas(&entries);
    let report = ComparisonReport {
        name_a: name_a.into(),
        name_b: name_b.into(),
        entries,
        summary,
    };
    tracing::info!(
        "Compared '{}' vs '{}': {} improved, {} degraded, {} unchanged",
        report.name_a,
        report.name_b,
        report.summary.improved,
        report.summary.degraded,
        report.summary.unchanged
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, f64)]) -> IndicatorMap {
        pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    #[test]
    fn test_percent_change_uses_absolute_base() {
        let d = IndicatorDelta::new("X", -10.0, -5.0);
        assert_eq!(d.difference, 5.0);
        assert_eq!(d.percent_change, Some(50.0));
    }

    #[test]
    fn test_zero_base_is_undefined() {
        let d = IndicatorDelta::new("X", 0.0, 3.0);
        assert_eq!(d.percent_change, None);
        let summary = ComparisonSummary::from_deltas(&[d]);
        assert_eq!(summary.average_percent_change, 0.0);
        assert_eq!(summary.improved, 1);
    }

    #[test]
    fn test_top_changes_order() {
        let a = map(&[("A", 1.0), ("B", 1.0), ("C", 1.0), ("D", 1.0)]);
        let b = map(&[("A", 2.0), ("B", -4.0), ("C", 0.0), ("D", 1.0)]);
        let report = compare_named("a", &a, "b", &b);
        let names: Vec<&str> = report.top_changes(3).iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(report.top_changes(10).len(), 4);
    }
}
