// src/model/mod.rs
//! Read-only view of an ontology as consumed by the metrics engine.
//!
//! Loading OWL files and running a reasoner happen elsewhere; anything that
//! can answer these queries (a reasoner binding, a triple store, the
//! in-memory [`GraphOntology`]) can be measured.

pub mod graph;

pub use self::graph::{Annotation, ClassDecl, GraphDocument, GraphOntology, IndividualDecl, PropertyDecl};

use serde::{Deserialize, Serialize};
use std::fmt;

/// IRI of the universal class used as the default hierarchy root.
pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";

/// The kinds of entity an annotation can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Ontology,
    Class,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    Individual,
}

impl EntityKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ontology => "ontology",
            Self::Class => "class",
            Self::ObjectProperty => "object property",
            Self::DataProperty => "data property",
            Self::AnnotationProperty => "annotation property",
            Self::Individual => "individual",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A tagged reference to one entity of the ontology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity<'a> {
    pub kind: EntityKind,
    pub iri: &'a str,
}

impl<'a> Entity<'a> {
    #[must_use]
    pub fn new(kind: EntityKind, iri: &'a str) -> Self {
        Self { kind, iri }
    }
}

/// Queries the metrics engine needs from an ontology.
///
/// Implementations must be read-only and reentrant: the engine may call any
/// method many times and in any order. Returned collections carry no ordering
/// guarantee.
pub trait OntologyModel {
    /// Human-readable name used in reports.
    fn name(&self) -> &str;

    /// IRI of the hierarchy root. Never reported as one of [`Self::classes`].
    fn root_class(&self) -> &str {
        OWL_THING
    }

    fn classes(&self) -> Vec<&str>;
    fn object_properties(&self) -> Vec<&str>;
    fn data_properties(&self) -> Vec<&str>;
    fn annotation_properties(&self) -> Vec<&str>;
    fn individuals(&self) -> Vec<&str>;

    /// Direct (asserted or inferred) superclasses. May contain the root.
    fn direct_superclasses(&self, class: &str) -> Vec<&str>;

    /// Direct subclasses. May contain the class itself when equivalences were
    /// inferred; the engine filters that out.
    fn direct_subclasses(&self, class: &str) -> Vec<&str>;

    /// Values of `annotation_property` asserted on `entity`.
    fn annotation_values(&self, entity: Entity<'_>, annotation_property: &str) -> Vec<&str>;

    /// Number of annotations on the ontology resource itself.
    fn ontology_annotation_count(&self) -> usize;

    /// Declared domain classes of an object or data property.
    fn property_domain(&self, property: &str) -> Vec<&str>;
}
