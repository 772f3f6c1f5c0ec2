// src/scoring/guidance.rs
//! Static improvement guidance per indicator.

use super::bands::{ScoreBand, Thresholds};
use crate::metrics::{Indicator, IndicatorSet};
use std::collections::BTreeMap;

/// Headline and suggested actions for one indicator.
pub(crate) struct IndicatorGuidance {
    pub(crate) headline: &'static str,
    pub(crate) actions: &'static [&'static str],
}

pub(crate) fn get_guidance(indicator: Indicator) -> IndicatorGuidance {
    match indicator {
        Indicator::Cohesion => IndicatorGuidance {
            headline: "HIGH LACK OF COHESION DETECTED!",
            actions: &[
                "Review class hierarchy depth and flatten overly deep structures",
                "Check that leaf classes stay conceptually related to their ancestors",
                "Keep related classes close together in the hierarchy",
                "Split large branches into smaller, focused sub-hierarchies",
            ],
        },
        Indicator::WeightedComplexity => IndicatorGuidance {
            headline: "HIGH COMPLEXITY DETECTED!",
            actions: &[
                "Reduce the number of properties attached to each class",
                "Simplify the relationship structure between classes",
                "Extract overloaded classes into simpler, focused classes",
                "Check that every property is needed on each class",
            ],
        },
        Indicator::InheritanceDepth => IndicatorGuidance {
            headline: "INHERITANCE TREE TOO DEEP!",
            actions: &[
                "Remove intermediate levels that add no specialization",
                "Prefer composition over inheritance where it fits the domain",
                "Check that every inheritance level carries a meaningful distinction",
                "Merge classes that differ only marginally",
            ],
        },
        Indicator::AncestorsPerLeaf => IndicatorGuidance {
            headline: "TOO MANY ANCESTOR CLASSES!",
            actions: &[
                "Shorten the inheritance chain above leaf classes",
                "Drop parent classes that add no abstraction",
                "Make sure every abstraction level earns its place",
                "Use direct relationships instead of deep hierarchies",
            ],
        },
        Indicator::ChildrenPerClass => IndicatorGuidance {
            headline: "SUBCLASS DISTRIBUTION ISSUE!",
            actions: &[
                "Balance the number of direct subclasses per parent",
                "Avoid parents with very many or very few children",
                "Introduce intermediate grouping classes where siblings cluster",
                "Check that sibling classes share one level of abstraction",
            ],
        },
        Indicator::Coupling => IndicatorGuidance {
            headline: "HIGH COUPLING DETECTED!",
            actions: &[
                "Cut dependencies between unrelated classes",
                "Simplify the inheritance structure",
                "Factor shared meaning into abstract parent classes",
                "Check that every parent relationship is necessary",
            ],
        },
        Indicator::ResponseForClass => IndicatorGuidance {
            headline: "HIGH RESPONSE FOR CLASS!",
            actions: &[
                "Reduce the number of properties reachable from each class",
                "Simplify inheritance to limit inherited properties",
                "Split complex classes into simpler ones",
                "Review whether each property belongs where it is declared",
            ],
        },
        Indicator::PropertiesPerClass => IndicatorGuidance {
            headline: "TOO MANY PROPERTIES!",
            actions: &[
                "Reduce the number of properties defined per class",
                "Move properties down to the subclasses that use them",
                "Replace properties that could be derived from others",
                "Group related properties into separate classes",
            ],
        },
        Indicator::PropertyRichness => IndicatorGuidance {
            headline: "LOW PROPERTY RICHNESS!",
            actions: &[
                "Add object and data properties to the ontology",
                "Give classes meaningful properties beyond inheritance",
                "Define domain-specific properties for core concepts",
                "Reuse properties from established vocabularies",
            ],
        },
        Indicator::AttributeRichness => IndicatorGuidance {
            headline: "LOW ATTRIBUTE RICHNESS!",
            actions: &[
                "Add data properties (attributes) to classes",
                "Capture class characteristics as literal-valued properties",
                "Include descriptive attributes such as names and dates",
                "Decide which class features should be recorded as data",
            ],
        },
        Indicator::RelationshipsPerClass => IndicatorGuidance {
            headline: "LOW RELATIONSHIP DENSITY!",
            actions: &[
                "Add subclass relationships to organize the hierarchy",
                "Attach every class to the hierarchy",
                "Check whether classes need additional parents",
                "Use multiple inheritance where it is conceptually valid",
            ],
        },
        Indicator::ClassRichness => IndicatorGuidance {
            headline: "LOW CLASS RICHNESS - FEW INSTANCES!",
            actions: &[
                "Add individuals to populate the classes",
                "Create example individuals for key classes",
                "Import or link existing instance data",
                "Decide whether this ontology should carry instances at all",
            ],
        },
        Indicator::AnnotationRichness => IndicatorGuidance {
            headline: "LOW ANNOTATION RICHNESS!",
            actions: &[
                "Add rdfs:label annotations to all classes and properties",
                "Document entities with rdfs:comment descriptions",
                "Record metadata annotations such as creator, date and version",
                "Use standard annotation vocabularies (Dublin Core, SKOS)",
            ],
        },
        Indicator::Tangledness => IndicatorGuidance {
            headline: "TANGLEDNESS ISSUE!",
            actions: &[
                "Review classes with several direct parents",
                "Keep multiple inheritance only where it is justified",
                "Replace multiple inheritance with composition where possible",
                "Simplify the class hierarchy",
            ],
        },
    }
}

fn display_value(indicator: Indicator, value: f64) -> String {
    match indicator {
        Indicator::InheritanceDepth => format!("{value}"),
        i if i.is_percentage() => format!("{:.2}%", value * 100.0),
        _ => format!("{value:.2}"),
    }
}

/// Improvement advice for a banded value.
///
/// Empty unless `band` is `L1`, `L2` or `L3`. The text names the value
/// achieved, its band range, the range of the next band up and the `L5` target.
#[must_use]
pub fn recommendation(indicator: Indicator, band: ScoreBand, value: f64) -> String {
    if !band.needs_attention() {
        return String::new();
    }
    let thresholds = Thresholds::for_indicator(indicator);
    let guidance = get_guidance(indicator);

    let mut lines = vec![
        guidance.headline.to_string(),
        format!(
            "   Current {}: {} ({band}, {})",
            indicator.name(),
            display_value(indicator, value),
            thresholds.range_label(band)
        ),
    ];
    if let Some(next) = band.next_up() {
        lines.push(format!(
            "   Next band {next}: {}; target L5: {}",
            thresholds.range_label(next),
            thresholds.range_label(ScoreBand::L5)
        ));
    }
    lines.push("   Recommendations:".to_string());
    lines.extend(guidance.actions.iter().map(|a| format!("   • {a}")));
    lines.join("\n")
}

/// One entry per indicator; empty text where no advice applies.
#[must_use]
pub fn recommend_all(
    set: &IndicatorSet,
    bands: &BTreeMap<Indicator, ScoreBand>,
) -> BTreeMap<Indicator, String> {
    set.iter()
        .map(|(i, v)| {
            let band = bands.get(&i).copied().unwrap_or(ScoreBand::NotApplicable);
            (i, recommendation(i, band, v.as_f64()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_good_bands_are_silent() {
        for band in [ScoreBand::L5, ScoreBand::L4, ScoreBand::NotApplicable] {
            assert!(recommendation(Indicator::Cohesion, band, 1.0).is_empty());
        }
    }

    #[test]
    fn test_recommendation_names_value_and_next_band() {
        let text = recommendation(Indicator::WeightedComplexity, ScoreBand::L2, 12.5);
        assert!(text.starts_with("HIGH COMPLEXITY DETECTED!"));
        assert!(text.contains("12.50"));
        assert!(text.contains("> 11 and ≤ 15"));
        assert!(text.contains("Next band L3: > 8 and ≤ 11"));
        assert!(text.contains("target L5: ≤ 5"));
    }

    #[test]
    fn test_percentage_recommendation() {
        let text = recommendation(Indicator::AnnotationRichness, ScoreBand::L1, 0.15);
        assert!(text.contains("15.00%"));
        assert!(text.contains("Next band L2: > 20% and ≤ 40%"));
    }

    #[test]
    fn test_every_indicator_has_guidance() {
        for indicator in Indicator::ALL {
            let g = get_guidance(indicator);
            assert!(!g.headline.is_empty());
            assert_eq!(g.actions.len(), 4, "{indicator}");
        }
    }
}
