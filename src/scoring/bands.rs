// src/scoring/bands.rs
//! Ordinal quality bands and the per-indicator threshold tables.

use crate::metrics::{Indicator, IndicatorSet};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Quality band, `L5` best. `NotApplicable` is outside the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreBand {
    L5,
    L4,
    L3,
    L2,
    L1,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl ScoreBand {
    /// Ranked bands, best first.
    pub const RANKED: [Self; 5] = [Self::L5, Self::L4, Self::L3, Self::L2, Self::L1];

    /// 5 for `L5` down to 1 for `L1`; `None` for `N/A`.
    #[must_use]
    pub fn rank(self) -> Option<u8> {
        match self {
            Self::L5 => Some(5),
            Self::L4 => Some(4),
            Self::L3 => Some(3),
            Self::L2 => Some(2),
            Self::L1 => Some(1),
            Self::NotApplicable => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::L5 => "L5",
            Self::L4 => "L4",
            Self::L3 => "L3",
            Self::L2 => "L2",
            Self::L1 => "L1",
            Self::NotApplicable => "N/A",
        }
    }

    /// The band one step better, if any.
    #[must_use]
    pub fn next_up(self) -> Option<Self> {
        match self {
            Self::L1 => Some(Self::L2),
            Self::L2 => Some(Self::L3),
            Self::L3 => Some(Self::L4),
            Self::L4 => Some(Self::L5),
            Self::L5 | Self::NotApplicable => None,
        }
    }

    /// Whether this band warrants improvement guidance.
    #[must_use]
    pub fn needs_attention(self) -> bool {
        matches!(self, Self::L1 | Self::L2 | Self::L3)
    }
}

impl PartialOrd for ScoreBand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            (None, None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScoreBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L5" => Ok(Self::L5),
            "L4" => Ok(Self::L4),
            "L3" => Ok(Self::L3),
            "L2" => Ok(Self::L2),
            "L1" => Ok(Self::L1),
            "N/A" => Ok(Self::NotApplicable),
            other => Err(format!("unknown score band: {other}")),
        }
    }
}

/// Band boundaries for `[L5, L4, L3, L2]`; anything past the last is `L1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Thresholds {
    /// Lower is better: `v <= bounds[k]` selects band `k`.
    AtMost([f64; 4]),
    /// Higher is better, on a 0–100 scale: `v > bounds[k]` selects band `k`.
    Above([f64; 4]),
}

const PERCENT_BOUNDS: [f64; 4] = [80.0, 60.0, 40.0, 20.0];

impl Thresholds {
    #[must_use]
    pub fn for_indicator(indicator: Indicator) -> Self {
        match indicator {
            Indicator::Cohesion
            | Indicator::InheritanceDepth
            | Indicator::AncestorsPerLeaf
            | Indicator::Coupling
            | Indicator::PropertiesPerClass
            | Indicator::Tangledness => Self::AtMost([2.0, 4.0, 6.0, 8.0]),
            Indicator::WeightedComplexity => Self::AtMost([5.0, 8.0, 11.0, 15.0]),
            Indicator::ChildrenPerClass | Indicator::ResponseForClass => {
                Self::AtMost([3.0, 6.0, 8.0, 12.0])
            }
            Indicator::PropertyRichness
            | Indicator::AttributeRichness
            | Indicator::RelationshipsPerClass
            | Indicator::ClassRichness
            | Indicator::AnnotationRichness => Self::Above(PERCENT_BOUNDS),
        }
    }

    /// First matching band in `L5..L1` order. Total over `f64`; NaN lands in `L1`.
    #[must_use]
    pub fn classify(&self, value: f64) -> ScoreBand {
        let (bounds, hit): (&[f64; 4], fn(f64, f64) -> bool) = match self {
            Self::AtMost(b) => (b, |v: f64, t: f64| v <= t),
            Self::Above(b) => (b, |v: f64, t: f64| v > t),
        };
        ScoreBand::RANKED
            .into_iter()
            .zip(bounds)
            .find(|(_, t)| hit(value, **t))
            .map_or(ScoreBand::L1, |(band, _)| band)
    }

    /// Human-readable value range of `band`, e.g. `> 2 and ≤ 4`.
    #[must_use]
    pub fn range_label(&self, band: ScoreBand) -> String {
        let Some(rank) = band.rank() else {
            return "n/a".to_string();
        };
        let (bounds, unit, at_most) = match self {
            Self::AtMost(b) => (b, "", true),
            Self::Above(b) => (b, "%", false),
        };
        // rank 5 → bounds[0], rank 2 → bounds[3]; L1 has only the outer edge.
        let idx = 5 - usize::from(rank);
        let edge = |i: usize| bounds.get(i).map(|b| format!("{b}{unit}"));
        let inner = edge(idx);
        let outer = idx.checked_sub(1).and_then(edge);

        match (at_most, inner, outer) {
            (true, Some(hi), None) => format!("≤ {hi}"),
            (true, Some(hi), Some(lo)) => format!("> {lo} and ≤ {hi}"),
            (true, None, Some(lo)) => format!("> {lo}"),
            (false, Some(lo), None) => format!("> {lo}"),
            (false, Some(lo), Some(hi)) => format!("> {lo} and ≤ {hi}"),
            (false, None, Some(hi)) => format!("≤ {hi}"),
            (_, None, None) => String::new(),
        }
    }
}

/// Bands a value for the indicator, scaling percentage indicators by 100 first.
#[must_use]
pub fn classify_indicator(indicator: Indicator, value: f64) -> ScoreBand {
    let scaled = if indicator.is_percentage() {
        value * 100.0
    } else {
        value
    };
    Thresholds::for_indicator(indicator).classify(scaled)
}

/// Bands a value by indicator name; unknown names are `N/A`.
#[must_use]
pub fn classify(name: &str, value: f64) -> ScoreBand {
    Indicator::from_name(name).map_or(ScoreBand::NotApplicable, |i| classify_indicator(i, value))
}

/// Bands every indicator of a set.
#[must_use]
pub fn score_all(set: &IndicatorSet) -> BTreeMap<Indicator, ScoreBand> {
    set.iter()
        .map(|(i, v)| (i, classify_indicator(i, v.as_f64())))
        .collect()
}
