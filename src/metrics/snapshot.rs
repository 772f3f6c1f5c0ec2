// src/metrics/snapshot.rs
//! Immutable record of the foundational counts of one ontology.

use super::{MetricsOptions, RootPolicy, StructuralCounter};
use crate::error::Result;
use crate::model::{EntityKind, OntologyModel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every count the indicator formulas read, plus per-class degrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub ontology: String,
    pub root_policy: RootPolicy,
    pub class_count: usize,
    pub leaf_class_count: usize,
    pub object_property_count: usize,
    pub data_property_count: usize,
    pub individual_count: usize,
    pub annotation_count: usize,
    pub annotations_by_kind: BTreeMap<EntityKind, usize>,
    /// Σ direct subclasses over all classes.
    pub relationship_sum: usize,
    pub root_child_count: usize,
    /// Σ direct superclasses over all classes.
    pub parent_sum: usize,
    pub leaf_parent_sum: usize,
    pub multi_parent_class_count: usize,
    pub multi_parent_parent_sum: usize,
    pub attribute_sum: usize,
    pub max_depth: usize,
    pub path_count: usize,
    pub path_length_sum: usize,
    pub subclass_counts: BTreeMap<String, usize>,
    pub superclass_counts: BTreeMap<String, usize>,
}

impl MetricSnapshot {
    /// Counts everything in one go.
    ///
    /// # Errors
    /// Returns error if `options.path_limit` is exceeded.
    pub fn from_model<M: OntologyModel + ?Sized>(model: &M, options: &MetricsOptions) -> Result<Self> {
        StructuralCounter::new(model, *options).snapshot()
    }

    /// Object plus data properties.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.object_property_count + self.data_property_count
    }

    /// The integer table under its stable legacy names, in report order.
    #[must_use]
    pub fn basic_metrics(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("numberOfClasses", self.class_count),
            ("numberOfLeafClasses", self.leaf_class_count),
            ("numberOfObjectProperties", self.object_property_count),
            ("numberOfDataProperties", self.data_property_count),
            ("numberOfProperties", self.property_count()),
            ("numberOfIndividuals", self.individual_count),
            ("sumOfAnnotations", self.annotation_count),
            ("sumOfRelationships", self.relationship_sum),
            ("thingRelationships", self.root_child_count),
            ("sumOfDirectParents", self.parent_sum),
            ("sumOfDirectParentsLeaf", self.leaf_parent_sum),
            ("classesWithMultipleParents", self.multi_parent_class_count),
            ("sumOfParentsMultipleParents", self.multi_parent_parent_sum),
            ("sumOfAttributes", self.attribute_sum),
            ("maximumDepth", self.max_depth),
            ("numberOfPaths", self.path_count),
            ("sumOfPathLengths", self.path_length_sum),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GraphDocument, GraphOntology};

    #[test]
    fn test_basic_metrics_order_and_names() {
        let onto = GraphOntology::from(
            GraphDocument::new("t")
                .class("A", &[])
                .object_property("p", &["A"])
                .data_property("d", &["A"]),
        );
        let snap = MetricSnapshot::from_model(&onto, &MetricsOptions::default()).unwrap();
        let table = snap.basic_metrics();
        assert_eq!(table.len(), 17);
        assert_eq!(table.first(), Some(&("numberOfClasses", 1)));
        assert!(table.contains(&("numberOfProperties", 2)));
        assert_eq!(table.last(), Some(&("sumOfPathLengths", 1)));
    }
}
