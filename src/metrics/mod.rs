// src/metrics/mod.rs
//! Structural metrics: foundational counts, hierarchy walks and the fourteen
//! derived quality indicators.

pub mod counter;
pub mod hierarchy;
pub mod indicators;
pub mod snapshot;

pub use self::counter::StructuralCounter;
pub use self::hierarchy::{Hierarchy, PathTotals};
pub use self::indicators::{Indicator, IndicatorSet, IndicatorValue};
pub use self::snapshot::MetricSnapshot;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the hierarchy root takes part in counts and walks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootPolicy {
    /// The root is not a class: never counted, never a parent, never a path node.
    #[default]
    Exclude,
    /// The root is a class of its own and the parent of every top-level class.
    Include,
}

impl RootPolicy {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Exclude => "exclude",
            Self::Include => "include",
        }
    }
}

impl fmt::Display for RootPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Knobs for building a [`MetricSnapshot`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsOptions {
    pub root_policy: RootPolicy,
    /// Upper bound on enumerated root-to-leaf paths. `None` walks everything.
    pub path_limit: Option<usize>,
}

impl MetricsOptions {
    #[must_use]
    pub fn new(root_policy: RootPolicy) -> Self {
        Self {
            root_policy,
            path_limit: None,
        }
    }

    #[must_use]
    pub fn with_path_limit(mut self, limit: usize) -> Self {
        self.path_limit = Some(limit);
        self
    }
}
