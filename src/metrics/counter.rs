// src/metrics/counter.rs
//! Foundational counts over an [`OntologyModel`].
//!
//! Every count is computed at most once per counter; repeated calls return the
//! cached value. Inputs are never mutated.

use super::{Hierarchy, MetricSnapshot, MetricsOptions, PathTotals};
use crate::error::Result;
use crate::model::{Entity, EntityKind, OntologyModel};
use std::cell::OnceCell;
use std::collections::{BTreeMap, BTreeSet};

/// Memoizing counter bound to one ontology.
pub struct StructuralCounter<'m, M: OntologyModel + ?Sized> {
    model: &'m M,
    options: MetricsOptions,
    hierarchy: OnceCell<Hierarchy>,
    annotations: OnceCell<BTreeMap<EntityKind, usize>>,
    attributes: OnceCell<usize>,
    max_depth: OnceCell<usize>,
    paths: OnceCell<PathTotals>,
}

impl<'m, M: OntologyModel + ?Sized> StructuralCounter<'m, M> {
    #[must_use]
    pub fn new(model: &'m M, options: MetricsOptions) -> Self {
        Self {
            model,
            options,
            hierarchy: OnceCell::new(),
            annotations: OnceCell::new(),
            attributes: OnceCell::new(),
            max_depth: OnceCell::new(),
            paths: OnceCell::new(),
        }
    }

    /// The normalized class graph, built on first use.
    pub fn hierarchy(&self) -> &Hierarchy {
        self.hierarchy.get_or_init(|| {
            let h = Hierarchy::build(self.model, self.options.root_policy);
            tracing::debug!(
                "Hierarchy for '{}': {} classes, {} under root ({} policy)",
                self.model.name(),
                h.len(),
                h.root_child_count(),
                self.options.root_policy
            );
            h
        })
    }

    #[must_use]
    pub fn class_count(&self) -> usize {
        self.hierarchy().len()
    }

    #[must_use]
    pub fn leaf_class_count(&self) -> usize {
        self.hierarchy().leaf_parent_counts().count()
    }

    #[must_use]
    pub fn object_property_count(&self) -> usize {
        distinct(self.model.object_properties())
    }

    #[must_use]
    pub fn data_property_count(&self) -> usize {
        distinct(self.model.data_properties())
    }

    #[must_use]
    pub fn individual_count(&self) -> usize {
        distinct(self.model.individuals())
    }

    /// Annotation assertions per entity category.
    ///
    /// The ontology resource contributes all of its annotations. Every other
    /// category counts values of the declared annotation properties only, and
    /// an annotation property is never counted as annotating itself.
    pub fn annotation_breakdown(&self) -> &BTreeMap<EntityKind, usize> {
        self.annotations.get_or_init(|| {
            let ann_props = sorted(self.model.annotation_properties());
            let mut breakdown = BTreeMap::new();

            breakdown.insert(EntityKind::Ontology, self.model.ontology_annotation_count());

            let categories = [
                (EntityKind::Class, self.model.classes()),
                (EntityKind::ObjectProperty, self.model.object_properties()),
                (EntityKind::DataProperty, self.model.data_properties()),
                (EntityKind::AnnotationProperty, self.model.annotation_properties()),
                (EntityKind::Individual, self.model.individuals()),
            ];

            for (kind, entities) in categories {
                let exclude_self = kind == EntityKind::AnnotationProperty;
                let count: usize = sorted(entities)
                    .into_iter()
                    .map(|iri| {
                        ann_props
                            .iter()
                            .filter(|prop| !(exclude_self && **prop == iri))
                            .map(|prop| {
                                self.model
                                    .annotation_values(Entity::new(kind, iri), prop)
                                    .len()
                            })
                            .sum::<usize>()
                    })
                    .sum();
                tracing::debug!("{kind} annotations: {count}");
                breakdown.insert(kind, count);
            }

            breakdown
        })
    }

    #[must_use]
    pub fn annotation_count(&self) -> usize {
        self.annotation_breakdown().values().sum()
    }

    /// Σ direct subclasses over all classes.
    #[must_use]
    pub fn relationship_sum(&self) -> usize {
        self.hierarchy().degrees().map(|(_, subs, _)| subs).sum()
    }

    #[must_use]
    pub fn root_child_count(&self) -> usize {
        self.hierarchy().root_child_count()
    }

    /// Σ direct superclasses over all classes.
    #[must_use]
    pub fn parent_sum(&self) -> usize {
        self.hierarchy().degrees().map(|(_, _, supers)| supers).sum()
    }

    #[must_use]
    pub fn leaf_parent_sum(&self) -> usize {
        self.hierarchy().leaf_parent_counts().sum()
    }

    #[must_use]
    pub fn multi_parent_class_count(&self) -> usize {
        self.hierarchy()
            .degrees()
            .filter(|(_, _, supers)| *supers > 1)
            .count()
    }

    #[must_use]
    pub fn multi_parent_parent_sum(&self) -> usize {
        self.hierarchy()
            .degrees()
            .map(|(_, _, supers)| supers)
            .filter(|supers| *supers > 1)
            .sum()
    }

    /// Σ over data properties of their domain classes known to the hierarchy.
    pub fn attribute_sum(&self) -> usize {
        *self.attributes.get_or_init(|| {
            let hierarchy = self.hierarchy();
            sorted(self.model.data_properties())
                .into_iter()
                .map(|prop| {
                    sorted(self.model.property_domain(prop))
                        .into_iter()
                        .filter(|class| hierarchy.contains(class))
                        .count()
                })
                .sum()
        })
    }

    /// Deepest leaf class.
    pub fn max_depth(&self) -> usize {
        *self.max_depth.get_or_init(|| self.hierarchy().max_depth())
    }

    /// Root-to-leaf path count and summed lengths.
    ///
    /// # Errors
    /// Returns error if the configured path limit is exceeded.
    pub fn path_totals(&self) -> Result<PathTotals> {
        if let Some(totals) = self.paths.get() {
            return Ok(*totals);
        }
        let totals = self.hierarchy().leaf_path_totals(self.options.path_limit)?;
        tracing::debug!(
            "Paths for '{}': {} paths, length sum {}",
            self.model.name(),
            totals.count,
            totals.length_sum
        );
        Ok(*self.paths.get_or_init(|| totals))
    }

    /// Gathers every count into one immutable snapshot.
    ///
    /// # Errors
    /// Returns error if the configured path limit is exceeded.
    pub fn snapshot(&self) -> Result<MetricSnapshot> {
        let paths = self.path_totals()?;
        let hierarchy = self.hierarchy();

        let snapshot = MetricSnapshot {
            ontology: self.model.name().to_string(),
            root_policy: self.options.root_policy,
            class_count: self.class_count(),
            leaf_class_count: self.leaf_class_count(),
            object_property_count: self.object_property_count(),
            data_property_count: self.data_property_count(),
            individual_count: self.individual_count(),
            annotation_count: self.annotation_count(),
            annotations_by_kind: self.annotation_breakdown().clone(),
            relationship_sum: self.relationship_sum(),
            root_child_count: self.root_child_count(),
            parent_sum: self.parent_sum(),
            leaf_parent_sum: self.leaf_parent_sum(),
            multi_parent_class_count: self.multi_parent_class_count(),
            multi_parent_parent_sum: self.multi_parent_parent_sum(),
            attribute_sum: self.attribute_sum(),
            max_depth: self.max_depth(),
            path_count: paths.count,
            path_length_sum: paths.length_sum,
            subclass_counts: hierarchy
                .degrees()
                .map(|(name, subs, _)| (name.to_string(), subs))
                .collect(),
            superclass_counts: hierarchy
                .degrees()
                .map(|(name, _, supers)| (name.to_string(), supers))
                .collect(),
        };

        tracing::info!(
            "Counted '{}': {} classes, {} properties, {} paths",
            snapshot.ontology,
            snapshot.class_count,
            snapshot.property_count(),
            snapshot.path_count
        );
        Ok(snapshot)
    }
}

fn sorted(items: Vec<&str>) -> BTreeSet<&str> {
    items.into_iter().collect()
}

fn distinct(items: Vec<&str>) -> usize {
    sorted(items).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::RootPolicy;
    use crate::model::{GraphDocument, GraphOntology, OWL_THING};

    fn worked_example() -> GraphOntology {
        GraphOntology::from(
            GraphDocument::new("worked")
                .class("A", &[OWL_THING])
                .class("B", &["A"])
                .class("C", &["A"])
                .class("D", &["B"]),
        )
    }

    #[test]
    fn test_worked_example_counts() {
        let onto = worked_example();
        let counter = StructuralCounter::new(&onto, MetricsOptions::default());
        assert_eq!(counter.class_count(), 4);
        assert_eq!(counter.leaf_class_count(), 2);
        assert_eq!(counter.root_child_count(), 1);
        assert_eq!(counter.relationship_sum(), 3);
        assert_eq!(counter.parent_sum(), 3);
        assert_eq!(counter.leaf_parent_sum(), 2);
        assert_eq!(counter.multi_parent_class_count(), 0);
        assert_eq!(counter.max_depth(), 2);
        assert_eq!(
            counter.path_totals().unwrap(),
            PathTotals { count: 2, length_sum: 5 }
        );
    }

    #[test]
    fn test_include_policy_counts_root() {
        let onto = worked_example();
        let counter = StructuralCounter::new(&onto, MetricsOptions::new(RootPolicy::Include));
        assert_eq!(counter.class_count(), 5);
        assert_eq!(counter.relationship_sum(), 4);
        assert_eq!(counter.parent_sum(), 4);
        assert_eq!(counter.max_depth(), 3);
        assert_eq!(counter.path_totals().unwrap().length_sum, 7);
    }

    #[test]
    fn test_attribute_sum_ignores_unknown_domains() {
        let onto = GraphOntology::from(
            GraphDocument::new("attrs")
                .class("Person", &[])
                .data_property("age", &["Person", "Ghost"])
                .data_property("name", &["Person"])
                .object_property("knows", &["Person"]),
        );
        let counter = StructuralCounter::new(&onto, MetricsOptions::default());
        assert_eq!(counter.attribute_sum(), 2);
        assert_eq!(counter.data_property_count(), 2);
        assert_eq!(counter.object_property_count(), 1);
    }

    #[test]
    fn test_multiple_parents() {
        let onto = GraphOntology::from(
            GraphDocument::new("multi")
                .class("A", &[])
                .class("B", &[])
                .class("C", &["A", "B"])
                .class("D", &["A", "B", "C"]),
        );
        let counter = StructuralCounter::new(&onto, MetricsOptions::default());
        assert_eq!(counter.multi_parent_class_count(), 2);
        assert_eq!(counter.multi_parent_parent_sum(), 5);
    }

    #[test]
    fn test_counts_are_memoized() {
        let onto = worked_example();
        let counter = StructuralCounter::new(&onto, MetricsOptions::default());
        let first: *const Hierarchy = counter.hierarchy();
        let second: *const Hierarchy = counter.hierarchy();
        assert_eq!(first, second);
        assert_eq!(counter.annotation_count(), counter.annotation_count());
    }
}
