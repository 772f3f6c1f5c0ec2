// src/metrics/hierarchy.rs
//! Normalized subsumption graph with cycle-safe depth and path walks.
//!
//! Inferred equivalences can make the class graph cyclic, so every walk
//! carries the set of classes on the current chain and stops when it would
//! revisit one. Path enumeration is exponential in the amount of multiple
//! inheritance; acyclic graphs take a counting shortcut that yields the same
//! totals without materializing paths.

use super::RootPolicy;
use crate::error::{OquareError, Result};
use crate::model::OntologyModel;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Aggregate over every root-to-leaf path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PathTotals {
    /// Number of paths (`m`).
    pub count: usize,
    /// Sum of path lengths, measured in classes on the path.
    pub length_sum: usize,
}

/// Class graph indexed by position, with edges restricted to known classes.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    names: Vec<String>,
    index: HashMap<String, usize>,
    parents: Vec<Vec<usize>>,
    children: Vec<Vec<usize>>,
    root: Option<usize>,
    top_level: Vec<usize>,
    acyclic: bool,
}

#[allow(clippy::indexing_slicing)] // Guarded: every index is produced by `build` and < names.len()
impl Hierarchy {
    /// Normalizes the model's class relations.
    ///
    /// Self references, duplicates and IRIs that are not classes of the
    /// ontology are dropped. A class is top-level when it names the root as a
    /// direct superclass or has no known superclass at all. Under
    /// [`RootPolicy::Include`] a synthetic root node becomes the parent of every
    /// top-level class.
    pub fn build<M: OntologyModel + ?Sized>(model: &M, policy: RootPolicy) -> Self {
        let root_iri = model.root_class();
        let mut names: Vec<String> = model
            .classes()
            .into_iter()
            .filter(|c| *c != root_iri)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();
        let class_total = names.len();

        let root = match policy {
            RootPolicy::Exclude => None,
            RootPolicy::Include => {
                names.push(root_iri.to_string());
                Some(class_total)
            }
        };

        let index: HashMap<String, usize> = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();

        let known = |iri: &str, own: usize| {
            index
                .get(iri)
                .copied()
                .filter(|&i| i != own && Some(i) != root)
        };

        let mut parents = Vec::with_capacity(names.len());
        let mut children = Vec::with_capacity(names.len());
        let mut top_level = Vec::new();

        for (own, name) in names.iter().enumerate().take(class_total) {
            let raw_supers = model.direct_superclasses(name);
            let declares_root = raw_supers.iter().any(|p| *p == root_iri);
            let supers = dedup_sorted(raw_supers.iter().filter_map(|p| known(*p, own)));
            let subs = dedup_sorted(
                model
                    .direct_subclasses(name)
                    .iter()
                    .filter_map(|c| known(*c, own)),
            );

            if declares_root || supers.is_empty() {
                top_level.push(own);
            }
            parents.push(supers);
            children.push(subs);
        }

        if let Some(root_idx) = root {
            for &top in &top_level {
                parents[top].push(root_idx);
            }
            parents.push(Vec::new());
            children.push(top_level.clone());
        }

        let acyclic = is_acyclic(&parents);
        if !acyclic {
            tracing::debug!("Class hierarchy contains cycles; walks fall back to guarded enumeration");
        }

        Self {
            names,
            index,
            parents,
            children,
            root,
            top_level,
            acyclic,
        }
    }

    /// Number of classes, including the synthetic root when it is part of the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn contains(&self, iri: &str) -> bool {
        self.index.contains_key(iri)
    }

    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        self.acyclic
    }

    /// Classes sitting directly under the root.
    #[must_use]
    pub fn root_child_count(&self) -> usize {
        self.top_level.len()
    }

    /// Direct subclass and superclass counts per class, in index order.
    pub fn degrees(&self) -> impl Iterator<Item = (&str, usize, usize)> {
        self.names
            .iter()
            .zip(self.children.iter().zip(&self.parents))
            .map(|(name, (subs, supers))| (name.as_str(), subs.len(), supers.len()))
    }

    /// Indices of classes without direct subclasses. The root is never a leaf.
    fn leaves(&self) -> impl Iterator<Item = usize> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter(|(i, subs)| subs.is_empty() && Some(*i) != self.root)
            .map(|(i, _)| i)
    }

    /// Direct superclass count of every leaf class.
    pub fn leaf_parent_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.leaves().map(|leaf| self.parents[leaf].len())
    }

    /// Depth of one class: 0 at the top, otherwise one more than its deepest parent.
    #[must_use]
    pub fn depth(&self, iri: &str) -> Option<usize> {
        let idx = *self.index.get(iri)?;
        let mut on_chain = vec![false; self.len()];
        Some(self.guarded_depth(idx, &mut on_chain))
    }

    fn guarded_depth(&self, idx: usize, on_chain: &mut [bool]) -> usize {
        if on_chain[idx] {
            return 0;
        }
        let parents = &self.parents[idx];
        if parents.is_empty() || Some(idx) == self.root {
            return 0;
        }

        on_chain[idx] = true;
        let deepest = parents
            .iter()
            .map(|&p| self.guarded_depth(p, on_chain))
            .max()
            .unwrap_or(0);
        on_chain[idx] = false;

        1 + deepest
    }

    /// Largest depth over all leaf classes.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        if self.acyclic {
            let mut memo = vec![None; self.len()];
            return self
                .leaves()
                .map(|leaf| self.memo_depth(leaf, &mut memo))
                .max()
                .unwrap_or(0);
        }

        let mut on_chain = vec![false; self.len()];
        self.leaves()
            .map(|leaf| self.guarded_depth(leaf, &mut on_chain))
            .max()
            .unwrap_or(0)
    }

    fn memo_depth(&self, idx: usize, memo: &mut [Option<usize>]) -> usize {
        if let Some(depth) = memo[idx] {
            return depth;
        }
        let depth = self.parents[idx]
            .iter()
            .map(|&p| 1 + self.memo_depth(p, memo))
            .max()
            .unwrap_or(0);
        memo[idx] = Some(depth);
        depth
    }

    /// Every simple path from `iri` up to the top of the hierarchy, leaf first.
    ///
    /// Unbounded: the result grows exponentially with multiple inheritance.
    #[must_use]
    pub fn paths_to_root(&self, iri: &str) -> Option<Vec<Vec<&str>>> {
        let idx = *self.index.get(iri)?;
        let mut paths = Vec::new();
        let mut on_path = vec![false; self.len()];
        let mut path = Vec::new();
        let collected: Result<()> = self.walk(idx, &mut path, &mut on_path, &mut |p| {
            paths.push(p.iter().map(|&i| self.names[i].as_str()).collect());
            Ok(())
        });
        collected.ok()?;
        Some(paths)
    }

    /// Path count and summed lengths over every leaf class.
    ///
    /// # Errors
    /// Returns [`OquareError::PathLimitExceeded`] when `limit` is set and the
    /// number of paths goes past it.
    pub fn leaf_path_totals(&self, limit: Option<usize>) -> Result<PathTotals> {
        let totals = if self.acyclic {
            self.counted_path_totals()
        } else {
            self.enumerated_path_totals(limit)?
        };

        match limit {
            Some(limit) if totals.count > limit => Err(OquareError::PathLimitExceeded { limit }),
            _ => Ok(totals),
        }
    }

    fn counted_path_totals(&self) -> PathTotals {
        let mut memo = vec![None; self.len()];
        self.leaves().fold(PathTotals::default(), |acc, leaf| {
            let t = self.memo_paths(leaf, &mut memo);
            PathTotals {
                count: acc.count.saturating_add(t.count),
                length_sum: acc.length_sum.saturating_add(t.length_sum),
            }
        })
    }

    fn memo_paths(&self, idx: usize, memo: &mut [Option<PathTotals>]) -> PathTotals {
        if let Some(t) = memo[idx] {
            return t;
        }
        let parents = &self.parents[idx];
        let totals = if parents.is_empty() {
            PathTotals { count: 1, length_sum: 1 }
        } else {
            let above = parents.iter().fold(PathTotals::default(), |acc, &p| {
                let t = self.memo_paths(p, memo);
                PathTotals {
                    count: acc.count.saturating_add(t.count),
                    length_sum: acc.length_sum.saturating_add(t.length_sum),
                }
            });
            // Each path through this class gains one node.
            PathTotals {
                count: above.count,
                length_sum: above.length_sum.saturating_add(above.count),
            }
        };
        memo[idx] = Some(totals);
        totals
    }

    fn enumerated_path_totals(&self, limit: Option<usize>) -> Result<PathTotals> {
        let mut totals = PathTotals::default();
        let mut on_path = vec![false; self.len()];
        let mut path = Vec::new();
        let leaves: Vec<usize> = self.leaves().collect();

        for leaf in leaves {
            self.walk(leaf, &mut path, &mut on_path, &mut |p| {
                totals.count += 1;
                totals.length_sum += p.len();
                match limit {
                    Some(limit) if totals.count > limit => {
                        Err(OquareError::PathLimitExceeded { limit })
                    }
                    _ => Ok(()),
                }
            })?;
        }
        Ok(totals)
    }

    fn walk(
        &self,
        idx: usize,
        path: &mut Vec<usize>,
        on_path: &mut [bool],
        sink: &mut dyn FnMut(&[usize]) -> Result<()>,
    ) -> Result<()> {
        path.push(idx);
        on_path[idx] = true;

        let open: Vec<usize> = self.parents[idx]
            .iter()
            .copied()
            .filter(|&p| !on_path[p])
            .collect();

        let result = if open.is_empty() || Some(idx) == self.root {
            sink(path.as_slice())
        } else {
            open.iter()
                .try_for_each(|&p| self.walk(p, path, on_path, sink))
        };

        path.pop();
        on_path[idx] = false;
        result
    }
}

fn dedup_sorted<I: Iterator<Item = usize>>(items: I) -> Vec<usize> {
    items.collect::<BTreeSet<_>>().into_iter().collect()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    New,
    Active,
    Done,
}

#[allow(clippy::indexing_slicing)]
fn is_acyclic(parents: &[Vec<usize>]) -> bool {
    fn visit(idx: usize, parents: &[Vec<usize>], marks: &mut [Mark]) -> bool {
        match marks[idx] {
            Mark::Active => false,
            Mark::Done => true,
            Mark::New => {
                marks[idx] = Mark::Active;
                let ok = parents[idx].iter().all(|&p| visit(p, parents, marks));
                marks[idx] = Mark::Done;
                ok
            }
        }
    }

    let mut marks = vec![Mark::New; parents.len()];
    (0..parents.len()).all(|i| visit(i, parents, &mut marks))
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn diamond() -> GraphOntology {
        GraphOntology::from(
            GraphDocument::new("diamond")
                .class("A", &[])
                .class("B", &["A"])
                .class("C", &["A"])
                .class("D", &["B", "C"]),
        )
    }

    #[test]
    fn test_depth_excludes_root() {
        let h = Hierarchy::build(&worked_example(), RootPolicy::Exclude);
        assert_eq!(h.depth("A"), Some(0));
        assert_eq!(h.depth("D"), Some(2));
        assert_eq!(h.max_depth(), 2);
        assert_eq!(h.root_child_count(), 1);
        assert_eq!(h.depth("Nope"), None);
    }

    #[test]
    fn test_depth_includes_root() {
        let h = Hierarchy::build(&worked_example(), RootPolicy::Include);
        assert_eq!(h.len(), 5);
        assert_eq!(h.depth(OWL_THING), Some(0));
        assert_eq!(h.depth("D"), Some(3));
        assert_eq!(h.max_depth(), 3);
    }

    #[test]
    fn test_leaf_paths_worked_example() {
        let h = Hierarchy::build(&worked_example(), RootPolicy::Exclude);
        let totals = h.leaf_path_totals(None).unwrap();
        assert_eq!(totals, PathTotals { count: 2, length_sum: 5 });
        assert_eq!(h.paths_to_root("D"), Some(vec![vec!["D", "B", "A"]]));
    }

    #[test]
    fn test_lone_root_is_not_a_leaf() {
        let onto = GraphOntology::from(GraphDocument::new("empty"));
        let h = Hierarchy::build(&onto, RootPolicy::Include);
        assert_eq!(h.leaves().count(), 0);
        assert_eq!(h.leaf_path_totals(None).unwrap(), PathTotals::default());
        assert_eq!(h.enumerated_path_totals(None).unwrap(), PathTotals::default());
    }

    #[test]
    fn test_diamond_paths_branch() {
        let h = Hierarchy::build(&diamond(), RootPolicy::Exclude);
        let mut paths = h.paths_to_root("D").unwrap();
        paths.sort();
        assert_eq!(paths, vec![vec!["D", "B", "A"], vec!["D", "C", "A"]]);
        assert_eq!(
            h.leaf_path_totals(None).unwrap(),
            PathTotals { count: 2, length_sum: 6 }
        );
    }

    #[test]
    fn test_counting_matches_enumeration() {
        for onto in [worked_example(), diamond()] {
            for policy in [RootPolicy::Exclude, RootPolicy::Include] {
                let h = Hierarchy::build(&onto, policy);
                assert!(h.is_acyclic());
                assert_eq!(
                    h.counted_path_totals(),
                    h.enumerated_path_totals(None).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_cycle_guard() {
        let onto = GraphOntology::from(
            GraphDocument::new("cyclic")
                .class("A", &["B"])
                .class("B", &["A"])
                .class("C", &["A"]),
        );
        let h = Hierarchy::build(&onto, RootPolicy::Exclude);
        assert!(!h.is_acyclic());
        assert_eq!(h.depth("C"), Some(3));
        assert_eq!(h.max_depth(), 3);
        assert_eq!(h.paths_to_root("C"), Some(vec![vec!["C", "A", "B"]]));
        assert_eq!(
            h.leaf_path_totals(None).unwrap(),
            PathTotals { count: 1, length_sum: 3 }
        );
    }

    #[test]
    fn test_path_limit() {
        let h = Hierarchy::build(&diamond(), RootPolicy::Exclude);
        assert!(h.leaf_path_totals(Some(2)).is_ok());
        assert!(matches!(
            h.leaf_path_totals(Some(1)),
            Err(OquareError::PathLimitExceeded { limit: 1 })
        ));
    }

    #[test]
    fn test_self_reference_dropped() {
        let onto = GraphOntology::from(GraphDocument::new("self").class("A", &["A"]));
        let h = Hierarchy::build(&onto, RootPolicy::Exclude);
        assert_eq!(h.depth("A"), Some(0));
        assert_eq!(h.root_child_count(), 1);
        assert!(h.is_acyclic());
    }
}
