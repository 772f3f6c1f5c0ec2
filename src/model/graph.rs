// src/model/graph.rs
//! In-memory ontology graph loaded from a JSON description.
//!
//! The document lists declarations only; subclass edges are derived from each
//! class's `subclass_of` list when the graph is built.

use super::{Entity, EntityKind, OntologyModel, OWL_THING};
use crate::error::{OquareError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One annotation assertion (`property` → `value`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub property: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassDecl {
    pub iri: String,
    #[serde(default)]
    pub subclass_of: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// Object, data or annotation property declaration. `domain` is ignored for
/// annotation properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub iri: String,
    #[serde(default)]
    pub domain: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndividualDecl {
    pub iri: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// Serialized form of a [`GraphOntology`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphDocument {
    pub name: String,
    /// Overrides the root IRI (defaults to `owl:Thing`).
    pub root: Option<String>,
    /// Annotations on the ontology resource itself.
    pub annotations: Vec<Annotation>,
    pub classes: Vec<ClassDecl>,
    pub object_properties: Vec<PropertyDecl>,
    pub data_properties: Vec<PropertyDecl>,
    pub annotation_properties: Vec<PropertyDecl>,
    pub individuals: Vec<IndividualDecl>,
}

impl GraphDocument {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Declares a class under the given direct superclasses.
    #[must_use]
    pub fn class(mut self, iri: &str, subclass_of: &[&str]) -> Self {
        self.classes.push(ClassDecl {
            iri: iri.to_string(),
            subclass_of: to_owned(subclass_of),
            annotations: Vec::new(),
        });
        self
    }

    #[must_use]
    pub fn object_property(mut self, iri: &str, domain: &[&str]) -> Self {
        self.object_properties.push(property(iri, domain));
        self
    }

    #[must_use]
    pub fn data_property(mut self, iri: &str, domain: &[&str]) -> Self {
        self.data_properties.push(property(iri, domain));
        self
    }

    #[must_use]
    pub fn annotation_property(mut self, iri: &str) -> Self {
        self.annotation_properties.push(property(iri, &[]));
        self
    }

    #[must_use]
    pub fn individual(mut self, iri: &str) -> Self {
        self.individuals.push(IndividualDecl {
            iri: iri.to_string(),
            annotations: Vec::new(),
        });
        self
    }

    /// Attaches an annotation to an already declared entity. Unknown targets
    /// are ignored.
    #[must_use]
    pub fn annotate(mut self, kind: EntityKind, iri: &str, property: &str, value: &str) -> Self {
        let annotation = Annotation {
            property: property.to_string(),
            value: value.to_string(),
        };
        if let Some(list) = self.annotation_slot(kind, iri) {
            list.push(annotation);
        }
        self
    }

    fn annotation_slot(&mut self, kind: EntityKind, iri: &str) -> Option<&mut Vec<Annotation>> {
        match kind {
            EntityKind::Ontology => Some(&mut self.annotations),
            EntityKind::Class => self
                .classes
                .iter_mut()
                .find(|c| c.iri == iri)
                .map(|c| &mut c.annotations),
            EntityKind::ObjectProperty => find_property(&mut self.object_properties, iri),
            EntityKind::DataProperty => find_property(&mut self.data_properties, iri),
            EntityKind::AnnotationProperty => find_property(&mut self.annotation_properties, iri),
            EntityKind::Individual => self
                .individuals
                .iter_mut()
                .find(|i| i.iri == iri)
                .map(|i| &mut i.annotations),
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn property(iri: &str, domain: &[&str]) -> PropertyDecl {
    PropertyDecl {
        iri: iri.to_string(),
        domain: to_owned(domain),
        annotations: Vec::new(),
    }
}

fn find_property<'a>(props: &'a mut [PropertyDecl], iri: &str) -> Option<&'a mut Vec<Annotation>> {
    props
        .iter_mut()
        .find(|p| p.iri == iri)
        .map(|p| &mut p.annotations)
}

/// An [`OntologyModel`] backed by owned declarations.
///
/// Only declared annotation properties are visible through
/// [`OntologyModel::annotation_properties`]; annotations using undeclared
/// properties are kept but never counted.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "GraphDocument")]
pub struct GraphOntology {
    doc: GraphDocument,
    root: String,
    superclasses: HashMap<String, Vec<String>>,
    subclasses: HashMap<String, Vec<String>>,
    domains: HashMap<String, Vec<String>>,
    annotations: HashMap<EntityKind, HashMap<String, Vec<Annotation>>>,
}

impl From<GraphDocument> for GraphOntology {
    fn from(doc: GraphDocument) -> Self {
        let root = doc.root.clone().unwrap_or_else(|| OWL_THING.to_string());

        let mut superclasses: HashMap<String, Vec<String>> = HashMap::new();
        let mut subclasses: HashMap<String, Vec<String>> = HashMap::new();
        for class in &doc.classes {
            let supers = superclasses.entry(class.iri.clone()).or_default();
            for parent in &class.subclass_of {
                if !supers.contains(parent) {
                    supers.push(parent.clone());
                    subclasses
                        .entry(parent.clone())
                        .or_default()
                        .push(class.iri.clone());
                }
            }
        }

        let domains = doc
            .object_properties
            .iter()
            .chain(&doc.data_properties)
            .map(|p| (p.iri.clone(), p.domain.clone()))
            .collect();

        let mut annotations: HashMap<EntityKind, HashMap<String, Vec<Annotation>>> = HashMap::new();
        let mut index = |kind: EntityKind, iri: &str, list: &[Annotation]| {
            annotations
                .entry(kind)
                .or_default()
                .entry(iri.to_string())
                .or_default()
                .extend(list.iter().cloned());
        };
        for c in &doc.classes {
            index(EntityKind::Class, &c.iri, &c.annotations);
        }
        for p in &doc.object_properties {
            index(EntityKind::ObjectProperty, &p.iri, &p.annotations);
        }
        for p in &doc.data_properties {
            index(EntityKind::DataProperty, &p.iri, &p.annotations);
        }
        for p in &doc.annotation_properties {
            index(EntityKind::AnnotationProperty, &p.iri, &p.annotations);
        }
        for i in &doc.individuals {
            index(EntityKind::Individual, &i.iri, &i.annotations);
        }

        Self {
            doc,
            root,
            superclasses,
            subclasses,
            domains,
            annotations,
        }
    }
}

impl GraphOntology {
    /// Parses a JSON [`GraphDocument`].
    ///
    /// # Errors
    /// Returns error if the JSON is malformed.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let doc: GraphDocument = serde_json::from_str(content)?;
        Ok(Self::from(doc))
    }

    /// Reads a JSON [`GraphDocument`] from disk. An empty `name` is replaced
    /// with the file stem.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| OquareError::io(e, path))?;
        let mut doc: GraphDocument = serde_json::from_str(&content)?;
        if doc.name.is_empty() {
            doc.name = path
                .file_stem()
                .map_or_else(String::new, |s| s.to_string_lossy().into_owned());
        }
        tracing::debug!("Loaded ontology graph '{}' from {}", doc.name, path.display());
        Ok(Self::from(doc))
    }
}

fn iris<'a, I>(items: I) -> Vec<&'a str>
where
    I: Iterator<Item = &'a String>,
{
    items.map(String::as_str).collect()
}

impl OntologyModel for GraphOntology {
    fn name(&self) -> &str {
        &self.doc.name
    }

    fn root_class(&self) -> &str {
        &self.root
    }

    fn classes(&self) -> Vec<&str> {
        self.doc
            .classes
            .iter()
            .map(|c| c.iri.as_str())
            .filter(|iri| *iri != self.root)
            .collect()
    }

    fn object_properties(&self) -> Vec<&str> {
        iris(self.doc.object_properties.iter().map(|p| &p.iri))
    }

    fn data_properties(&self) -> Vec<&str> {
        iris(self.doc.data_properties.iter().map(|p| &p.iri))
    }

    fn annotation_properties(&self) -> Vec<&str> {
        iris(self.doc.annotation_properties.iter().map(|p| &p.iri))
    }

    fn individuals(&self) -> Vec<&str> {
        iris(self.doc.individuals.iter().map(|i| &i.iri))
    }

    fn direct_superclasses(&self, class: &str) -> Vec<&str> {
        self.superclasses
            .get(class)
            .map(|v| iris(v.iter()))
            .unwrap_or_default()
    }

    fn direct_subclasses(&self, class: &str) -> Vec<&str> {
        self.subclasses
            .get(class)
            .map(|v| iris(v.iter()))
            .unwrap_or_default()
    }

    fn annotation_values(&self, entity: Entity<'_>, annotation_property: &str) -> Vec<&str> {
        let list = if entity.kind == EntityKind::Ontology {
            Some(&self.doc.annotations)
        } else {
            self.annotations
                .get(&entity.kind)
                .and_then(|by_iri| by_iri.get(entity.iri))
        };
        list.map(|anns| {
            anns.iter()
                .filter(|a| a.property == annotation_property)
                .map(|a| a.value.as_str())
                .collect()
        })
        .unwrap_or_default()
    }

    fn ontology_annotation_count(&self) -> usize {
        self.doc.annotations.len()
    }

    fn property_domain(&self, property: &str) -> Vec<&str> {
        self.domains
            .get(property)
            .map(|v| iris(v.iter()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABEL: &str = "rdfs:label";

    fn lecture() -> GraphOntology {
        GraphOntology::from(
            GraphDocument::new("lecture")
                .class("Course", &[OWL_THING])
                .class("Lecture", &["Course"])
                .class("Seminar", &["Course", "Course"])
                .annotation_property(LABEL)
                .annotate(EntityKind::Class, "Course", LABEL, "Course")
                .annotate(EntityKind::Class, "Course", LABEL, "Kurs"),
        )
    }

    #[test]
    fn test_subclasses_are_derived() {
        let onto = lecture();
        let mut subs = onto.direct_subclasses("Course");
        subs.sort_unstable();
        assert_eq!(subs, vec!["Lecture", "Seminar"]);
        assert_eq!(onto.direct_subclasses(OWL_THING), vec!["Course"]);
    }

    #[test]
    fn test_duplicate_parents_collapse() {
        let onto = lecture();
        assert_eq!(onto.direct_superclasses("Seminar"), vec!["Course"]);
    }

    #[test]
    fn test_annotation_lookup() {
        let onto = lecture();
        let course = Entity::new(EntityKind::Class, "Course");
        assert_eq!(onto.annotation_values(course, LABEL).len(), 2);
        assert!(onto.annotation_values(course, "rdfs:comment").is_empty());
    }

    #[test]
    fn test_declared_root_is_not_a_class() {
        let onto = GraphOntology::from(
            GraphDocument::new("t")
                .with_root("Top")
                .class("Top", &[])
                .class("A", &["Top"]),
        );
        assert_eq!(onto.classes(), vec!["A"]);
        assert_eq!(onto.root_class(), "Top");
    }

    #[test]
    fn test_json_roundtrip_shape() {
        let json = r#"{
            "name": "mini",
            "classes": [{ "iri": "A" }, { "iri": "B", "subclass_of": ["A"] }],
            "data_properties": [{ "iri": "age", "domain": ["A"] }]
        }"#;
        let onto = GraphOntology::from_json_str(json).unwrap();
        assert_eq!(onto.name(), "mini");
        assert_eq!(onto.direct_subclasses("A"), vec!["B"]);
        assert_eq!(onto.property_domain("age"), vec!["A"]);
    }

    #[test]
    fn test_individual_types_are_ignored() {
        let json = r#"{
            "name": "people",
            "classes": [{ "iri": "Person" }],
            "individuals": [{ "iri": "alice", "types": ["Person"] }, { "iri": "bob" }]
        }"#;
        let onto = GraphOntology::from_json_str(json).unwrap();
        assert_eq!(onto.individuals(), vec!["alice", "bob"]);
        assert_eq!(onto.classes(), vec!["Person"]);
    }
}
