// src/metrics/indicators.rs
//! The fourteen derived quality indicators.
//!
//! Each indicator is a pure function of a [`MetricSnapshot`]. A formula whose
//! denominator is zero or negative yields `0.0`.

use super::MetricSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Indicator {
    #[serde(rename = "ANOnto")]
    AnnotationRichness,
    #[serde(rename = "CROnto")]
    ClassRichness,
    #[serde(rename = "NOMOnto")]
    PropertiesPerClass,
    #[serde(rename = "INROnto")]
    RelationshipsPerClass,
    #[serde(rename = "AROnto")]
    AttributeRichness,
    #[serde(rename = "DITOnto")]
    InheritanceDepth,
    #[serde(rename = "NACOnto")]
    AncestorsPerLeaf,
    #[serde(rename = "NOCOnto")]
    ChildrenPerClass,
    #[serde(rename = "CBOOnto")]
    Coupling,
    #[serde(rename = "WMCOnto")]
    WeightedComplexity,
    #[serde(rename = "RFCOnto")]
    ResponseForClass,
    #[serde(rename = "RROnto")]
    PropertyRichness,
    #[serde(rename = "LCOMOnto")]
    Cohesion,
    #[serde(rename = "TMOnto")]
    Tangledness,
}

impl Indicator {
    pub const ALL: [Self; 14] = [
        Self::AnnotationRichness,
        Self::ClassRichness,
        Self::PropertiesPerClass,
        Self::RelationshipsPerClass,
        Self::AttributeRichness,
        Self::InheritanceDepth,
        Self::AncestorsPerLeaf,
        Self::ChildrenPerClass,
        Self::Coupling,
        Self::WeightedComplexity,
        Self::ResponseForClass,
        Self::PropertyRichness,
        Self::Cohesion,
        Self::Tangledness,
    ];

    /// The short OQuaRE name, e.g. `LCOMOnto`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AnnotationRichness => "ANOnto",
            Self::ClassRichness => "CROnto",
            Self::PropertiesPerClass => "NOMOnto",
            Self::RelationshipsPerClass => "INROnto",
            Self::AttributeRichness => "AROnto",
            Self::InheritanceDepth => "DITOnto",
            Self::AncestorsPerLeaf => "NACOnto",
            Self::ChildrenPerClass => "NOCOnto",
            Self::Coupling => "CBOOnto",
            Self::WeightedComplexity => "WMCOnto",
            Self::ResponseForClass => "RFCOnto",
            Self::PropertyRichness => "RROnto",
            Self::Cohesion => "LCOMOnto",
            Self::Tangledness => "TMOnto",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::AnnotationRichness => "annotation richness",
            Self::ClassRichness => "class richness",
            Self::PropertiesPerClass => "properties per class",
            Self::RelationshipsPerClass => "relationships per class",
            Self::AttributeRichness => "attribute richness",
            Self::InheritanceDepth => "inheritance depth",
            Self::AncestorsPerLeaf => "ancestors per leaf class",
            Self::ChildrenPerClass => "children per class",
            Self::Coupling => "coupling between classes",
            Self::WeightedComplexity => "weighted method count",
            Self::ResponseForClass => "response for class",
            Self::PropertyRichness => "property richness",
            Self::Cohesion => "lack of cohesion (mean path length)",
            Self::Tangledness => "tangledness",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.name() == name)
    }

    /// Indicators scored as a percentage (raw ratio × 100).
    #[must_use]
    pub fn is_percentage(self) -> bool {
        matches!(
            self,
            Self::AnnotationRichness
                | Self::AttributeRichness
                | Self::RelationshipsPerClass
                | Self::ClassRichness
                | Self::PropertyRichness
        )
    }

    /// Evaluates this indicator's formula.
    #[must_use]
    pub fn compute(self, s: &MetricSnapshot) -> IndicatorValue {
        let classes = s.class_count;
        let below_root = signed(classes) - signed(s.root_child_count);
        let properties = s.property_count();

        let r = match self {
            Self::InheritanceDepth => return IndicatorValue::Count(s.max_depth),
            Self::AnnotationRichness => ratio(s.annotation_count, classes),
            Self::ClassRichness => ratio(s.individual_count, classes),
            Self::PropertiesPerClass => ratio(properties, classes),
            Self::RelationshipsPerClass => ratio(s.relationship_sum, classes),
            Self::AttributeRichness => ratio(s.attribute_sum, classes),
            Self::AncestorsPerLeaf => ratio(s.leaf_parent_sum, s.leaf_class_count),
            Self::ChildrenPerClass => guarded(signed(s.relationship_sum), below_root),
            Self::Coupling => guarded(signed(s.parent_sum), below_root),
            Self::WeightedComplexity => ratio(properties + s.relationship_sum, classes),
            Self::ResponseForClass => guarded(signed(properties + s.parent_sum), below_root),
            Self::PropertyRichness => ratio(properties, s.relationship_sum + classes),
            Self::Cohesion => ratio(s.path_length_sum, s.path_count),
            Self::Tangledness => guarded(
                signed(s.relationship_sum),
                signed(classes) - signed(s.multi_parent_class_count),
            ),
        };
        IndicatorValue::Ratio(r)
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Indicator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown indicator: {s}"))
    }
}

#[allow(clippy::cast_precision_loss)]
fn signed(n: usize) -> f64 {
    n as f64
}

#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    guarded(numerator as f64, denominator as f64)
}

fn guarded(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// An indicator value: integer for depth, real for every ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndicatorValue {
    Count(usize),
    Ratio(f64),
}

impl IndicatorValue {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Count(n) => n as f64,
            Self::Ratio(r) => r,
        }
    }
}

impl fmt::Display for IndicatorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Ratio(r) => write!(f, "{r:.2}"),
        }
    }
}

/// All fourteen indicators computed from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorSet {
    values: BTreeMap<Indicator, IndicatorValue>,
}

impl IndicatorSet {
    #[must_use]
    pub fn compute_all(snapshot: &MetricSnapshot) -> Self {
        let values = Indicator::ALL
            .into_iter()
            .map(|i| (i, i.compute(snapshot)))
            .collect();
        tracing::debug!("Computed indicators for '{}'", snapshot.ontology);
        Self { values }
    }

    #[must_use]
    pub fn get(&self, indicator: Indicator) -> Option<IndicatorValue> {
        self.values.get(&indicator).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Indicator, IndicatorValue)> + '_ {
        self.values.iter().map(|(i, v)| (*i, *v))
    }

    /// Flat `name → value` map, the shape the comparison engine consumes.
    #[must_use]
    pub fn to_name_map(&self) -> BTreeMap<String, f64> {
        self.iter()
            .map(|(i, v)| (i.name().to_string(), v.as_f64()))
            .collect()
    }
}
