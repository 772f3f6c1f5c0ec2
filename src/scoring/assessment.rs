// src/scoring/assessment.rs
//! Overall verdict from the distribution of bands.

use super::bands::ScoreBand;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    HighQuality,
    ModerateQuality,
    NeedsImprovement,
}

impl Verdict {
    /// `≥ 50` high, `≥ 30` moderate, below that needs improvement.
    #[must_use]
    pub fn for_percentage(l5_percentage: f64) -> Self {
        if l5_percentage >= 50.0 {
            Self::HighQuality
        } else if l5_percentage >= 30.0 {
            Self::ModerateQuality
        } else {
            Self::NeedsImprovement
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::HighQuality => "high quality",
            Self::ModerateQuality => "moderate quality",
            Self::NeedsImprovement => "needs improvement",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// Band label → number of indicators in it.
    pub distribution: BTreeMap<String, usize>,
    pub l5_percentage: f64,
    pub verdict: Verdict,
}

/// Summarizes a set of bands. An empty set needs improvement.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn assess<'a, I>(bands: I) -> Assessment
where
    I: IntoIterator<Item = &'a ScoreBand>,
{
    let mut distribution: BTreeMap<String, usize> = ScoreBand::RANKED
        .iter()
        .map(|b| (b.label().to_string(), 0))
        .collect();
    let mut total = 0usize;
    for band in bands {
        *distribution.entry(band.label().to_string()).or_default() += 1;
        total += 1;
    }

    let l5 = distribution.get(ScoreBand::L5.label()).copied().unwrap_or(0);
    let l5_percentage = if total == 0 {
        0.0
    } else {
        l5 as f64 / total as f64 * 100.0
    };

    Assessment {
        distribution,
        l5_percentage,
        verdict: Verdict::for_percentage(l5_percentage),
    }
}
