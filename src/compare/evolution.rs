// src/compare/evolution.rs
//! Indicator time series across successive evaluations of one ontology.

use super::diff::{compare_named, ComparisonReport, IndicatorMap};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of most recent entries kept in a series.
pub const MAX_ENTRIES: usize = 18;

#[derive(Debug, Clone, Serialize)]
pub struct Evolution {
    /// Entry labels in ascending order (oldest first).
    pub labels: Vec<String>,
    /// Indicator name → label → value.
    pub series: BTreeMap<String, BTreeMap<String, f64>>,
    /// Diffs between consecutive entries.
    pub steps: Vec<ComparisonReport>,
}

impl Evolution {
    /// Builds a series from labelled maps, keeping the newest [`MAX_ENTRIES`].
    ///
    /// Labels sort lexically, so date labels like `2025-03-01` order
    /// chronologically. A repeated label keeps the last map given for it.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, IndicatorMap)>,
    {
        Self::with_limit(entries, MAX_ENTRIES)
    }

    #[must_use]
    pub fn with_limit<I>(entries: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = (String, IndicatorMap)>,
    {
        let by_label: BTreeMap<String, IndicatorMap> = entries.into_iter().collect();
        let skip = by_label.len().saturating_sub(limit);
        let kept: Vec<(String, IndicatorMap)> = by_label.into_iter().skip(skip).collect();

        let mut series: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
        for (label, map) in &kept {
            for (name, value) in map {
                series
                    .entry(name.clone())
                    .or_default()
                    .insert(label.clone(), *value);
            }
        }

        let steps = kept
            .windows(2)
            .filter_map(|pair| match pair {
                [(la, a), (lb, b)] => Some(compare_named(la.clone(), a, lb.clone(), b)),
                _ => None,
            })
            .collect();

        if skip > 0 {
            tracing::debug!("Dropped {skip} oldest evolution entries");
        }

        Self {
            labels: kept.into_iter().map(|(label, _)| label).collect(),
            series,
            steps,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Diff between the two most recent entries.
    #[must_use]
    pub fn latest_step(&self) -> Option<&ComparisonReport> {
        self.steps.last()
    }
}
