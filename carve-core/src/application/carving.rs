//! Hierarchical subtree carving
//!
//! A [`CarvingPlan`] lists candidate subtree masks in the exact order they are
//! carved. Each mask takes whatever positions are still uncarved; the result
//! is a partition of the sentence's content positions into contiguous-ish
//! syntactic groups.

use crate::domain::{DependencyEdge, SentenceArtifact, TokenMask};
use regex::Regex;
use smallvec::SmallVec;
use std::sync::OnceLock;

/// Ascending token positions forming one chunk
pub type IndexGroup = SmallVec<[usize; 8]>;

static SPACE_RUNS: OnceLock<Regex> = OnceLock::new();

fn space_runs() -> &'static Regex {
    SPACE_RUNS.get_or_init(|| Regex::new(" {2,}").expect("space run pattern is valid"))
}

/// Masks in carving order
///
/// For a selected edge list `e[0..k]` (highest priority first) the order is
/// `subtree(e[k-1].child), ..., subtree(e[0].child), valid_mask`: the
/// lowest-priority cut is carved first and the trunk, holding whatever is
/// left, is carved last. This order decides which tokens end up in which
/// chunk when subtrees nest, so it is part of the output contract.
#[derive(Debug, Clone)]
pub struct CarvingPlan<'a> {
    masks: Vec<&'a TokenMask>,
}

impl<'a> CarvingPlan<'a> {
    /// Plan cutting `artifact` at each of the `selected` edges
    pub fn for_edges(artifact: &'a SentenceArtifact, selected: &[DependencyEdge]) -> Self {
        let mut masks: Vec<&TokenMask> = selected
            .iter()
            .rev()
            .map(|edge| artifact.subtree_mask(edge.child_index))
            .collect();
        masks.push(artifact.valid_mask());
        Self { masks }
    }

    /// Masks in the order they will be carved
    pub fn masks(&self) -> &[&'a TokenMask] {
        &self.masks
    }

    /// Carve the plan out of `valid` and return groups in reading order
    ///
    /// Masks that are fully covered by earlier carvings yield nothing and are
    /// skipped.
    pub fn carve(&self, valid: &TokenMask) -> Vec<IndexGroup> {
        let mut remaining = valid.clone();
        let mut groups: Vec<IndexGroup> = Vec::with_capacity(self.masks.len());

        for mask in &self.masks {
            let taken = mask.and(&remaining);
            if !taken.any() {
                continue;
            }
            groups.push(taken.positions().collect());
            remaining.and_not_assign(&taken);
        }

        groups.sort_by_key(|group| group[0]);
        groups
    }
}

/// Join the values at `group` with single spaces
///
/// Runs of spaces are collapsed, so empty values never leave gaps.
pub fn render_group(values: &[String], group: &[usize]) -> String {
    let joined = group
        .iter()
        .map(|&i| values[i].as_str())
        .collect::<Vec<_>>()
        .join(" ");
    space_runs().replace_all(&joined, " ").into_owned()
}

/// Render a whole plan into chunk strings
pub fn carve_and_render(artifact: &SentenceArtifact, selected: &[DependencyEdge]) -> Vec<String> {
    CarvingPlan::for_edges(artifact, selected)
        .carve(artifact.valid_mask())
        .iter()
        .map(|group| render_group(artifact.token_values(), group))
        .collect()
}
