//! Dependency edges and the per-sentence edge catalog

use super::tree::SentenceTree;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A parent→child dependency relation between sentence-local positions
///
/// Ordering is the cut priority: longer edges first, then by parent
/// position, then by child position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// Token distance between parent and child
    pub length: usize,
    pub parent_index: usize,
    pub child_index: usize,
}

impl DependencyEdge {
    pub fn new(parent_index: usize, child_index: usize) -> Self {
        Self {
            length: parent_index.abs_diff(child_index),
            parent_index,
            child_index,
        }
    }
}

impl Ord for DependencyEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .length
            .cmp(&self.length)
            .then_with(|| self.parent_index.cmp(&other.parent_index))
            .then_with(|| self.child_index.cmp(&other.child_index))
    }
}

impl PartialOrd for DependencyEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Collect every edge whose child is not attachable, sorted by priority
pub fn build_edge_catalog(tree: &SentenceTree) -> Vec<DependencyEdge> {
    let mut edges: Vec<DependencyEdge> = (0..tree.len())
        .flat_map(|parent| {
            tree.children(parent)
                .iter()
                .filter(|&&child| !tree.is_attachable(child))
                .map(move |&child| DependencyEdge::new(parent, child))
        })
        .collect();
    edges.sort();
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{AnnotatedDocument, Word};

    #[test]
    fn test_edge_ordering() {
        let mut edges = vec![
            DependencyEdge::new(3, 4),
            DependencyEdge::new(0, 3),
            DependencyEdge::new(5, 2),
            DependencyEdge::new(2, 1),
            DependencyEdge::new(1, 0),
        ];
        edges.sort();

        let order: Vec<(usize, usize)> = edges
            .iter()
            .map(|e| (e.parent_index, e.child_index))
            .collect();
        assert_eq!(order, vec![(0, 3), (5, 2), (1, 0), (2, 1), (3, 4)]);
    }

    #[test]
    fn test_length_is_position_distance() {
        assert_eq!(DependencyEdge::new(7, 2).length, 5);
        assert_eq!(DependencyEdge::new(2, 7).length, 5);
    }

    #[test]
    fn test_catalog_skips_attachable_children() {
        // "Bob then gave her pearls ."
        let doc = AnnotatedDocument::builder()
            .sentence([
                Word::new("Bob", Some(2)),
                Word::new("then", Some(2)),
                Word::new("gave", None),
                Word::new("her", Some(2)),
                Word::new("pearls", Some(2)).no_space_after(),
                Word::new(".", Some(2)),
            ])
            .build();
        let tree = SentenceTree::from_annotated(&doc.sentences[0]);
        let edges = build_edge_catalog(&tree);

        assert_eq!(
            edges,
            vec![
                DependencyEdge::new(2, 0),
                DependencyEdge::new(2, 4),
                DependencyEdge::new(2, 1),
                DependencyEdge::new(2, 3),
            ]
        );
        assert!(edges.windows(2).all(|w| w[0].length >= w[1].length));
    }
}
