// src/reporting/mod.rs
//! Quality reports: indicators, bands, recommendations and their renderings.

pub mod console;
pub mod json;
pub mod xml;

use crate::error::Result;
use crate::metrics::{Indicator, IndicatorSet, MetricSnapshot, MetricsOptions, RootPolicy};
use crate::model::OntologyModel;
use crate::scoring::{self, Assessment, ScoreBand};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything known about one evaluated ontology.
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    pub ontology: String,
    pub generated_at: DateTime<Utc>,
    pub root_policy: RootPolicy,
    pub basic_metrics: BTreeMap<String, usize>,
    pub indicators: IndicatorSet,
    pub bands: BTreeMap<Indicator, ScoreBand>,
    /// Empty string for indicators that need no advice.
    pub recommendations: BTreeMap<Indicator, String>,
    pub assessment: Assessment,
    #[serde(skip)]
    snapshot: MetricSnapshot,
}

impl QualityReport {
    /// Derives indicators, bands and advice from a snapshot.
    #[must_use]
    pub fn build(snapshot: MetricSnapshot) -> Self {
        let indicators = IndicatorSet::compute_all(&snapshot);
        let bands = scoring::score_all(&indicators);
        let recommendations = scoring::recommend_all(&indicators, &bands);
        let assessment = scoring::assess(bands.values());

        tracing::info!(
            "Assessed '{}': {:.1}% of indicators at L5 ({})",
            snapshot.ontology,
            assessment.l5_percentage,
            assessment.verdict
        );

        Self {
            ontology: snapshot.ontology.clone(),
            generated_at: Utc::now(),
            root_policy: snapshot.root_policy,
            basic_metrics: snapshot
                .basic_metrics()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            indicators,
            bands,
            recommendations,
            assessment,
            snapshot,
        }
    }

    /// Counts, scores and assesses a model in one go.
    ///
    /// # Errors
    /// Returns error if the path limit in `options` is exceeded.
    pub fn evaluate<M: OntologyModel + ?Sized>(model: &M, options: &MetricsOptions) -> Result<Self> {
        MetricSnapshot::from_model(model, options).map(Self::build)
    }

    #[must_use]
    pub fn snapshot(&self) -> &MetricSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn band(&self, indicator: Indicator) -> ScoreBand {
        self.bands
            .get(&indicator)
            .copied()
            .unwrap_or(ScoreBand::NotApplicable)
    }

    /// Indicators banded strictly below `floor`. `N/A` never fails.
    #[must_use]
    pub fn below(&self, floor: ScoreBand) -> Vec<Indicator> {
        self.bands
            .iter()
            .filter(|(_, band)| **band < floor)
            .map(|(i, _)| *i)
            .collect()
    }

    /// Non-empty recommendations, in indicator order.
    pub fn active_recommendations(&self) -> impl Iterator<Item = (Indicator, &str)> {
        self.recommendations
            .iter()
            .filter(|(_, text)| !text.is_empty())
            .map(|(i, text)| (*i, text.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GraphDocument, GraphOntology, OWL_THING};

    fn report() -> QualityReport {
        let onto = GraphOntology::from(
            GraphDocument::new("worked")
                .class("A", &[OWL_THING])
                .class("B", &["A"])
                .class("C", &["A"])
                .class("D", &["B"]),
        );
        QualityReport::evaluate(&onto, &MetricsOptions::default()).unwrap()
    }

    #[test]
    fn test_report_collects_all_indicators() {
        let r = report();
        assert_eq!(r.bands.len(), 14);
        assert_eq!(r.recommendations.len(), 14);
        assert_eq!(r.basic_metrics.get("numberOfClasses"), Some(&4));
        assert_eq!(r.band(Indicator::Cohesion), ScoreBand::L4);
    }

    #[test]
    fn test_recommendations_follow_bands() {
        let r = report();
        for (indicator, _) in r.active_recommendations() {
            assert!(r.band(indicator).needs_attention());
        }
        // No annotations at all: L1.
        assert_eq!(r.band(Indicator::AnnotationRichness), ScoreBand::L1);
        assert!(r.below(ScoreBand::L2).contains(&Indicator::AnnotationRichness));
        assert!(r.below(ScoreBand::L1).is_empty());
    }
}
