//! Boolean membership vectors over sentence-local token positions

use super::tree::SentenceTree;

/// Fixed-length set of token positions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenMask {
    bits: Vec<bool>,
}

impl TokenMask {
    /// Mask over `len` positions with nothing set
    pub fn empty(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Mask over `len` positions with everything set
    pub fn full(len: usize) -> Self {
        Self {
            bits: vec![true; len],
        }
    }

    pub fn from_bools(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    pub fn set(&mut self, index: usize, value: bool) {
        self.bits[index] = value;
    }

    /// Whether any position is set
    pub fn any(&self) -> bool {
        self.bits.iter().any(|&b| b)
    }

    /// Number of set positions
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Set positions in ascending order
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }

    /// Intersection of two masks of equal length
    pub fn and(&self, other: &TokenMask) -> TokenMask {
        debug_assert_eq!(self.len(), other.len());
        TokenMask {
            bits: self
                .bits
                .iter()
                .zip(&other.bits)
                .map(|(&a, &b)| a && b)
                .collect(),
        }
    }

    /// Remove every position set in `other`
    pub fn and_not_assign(&mut self, other: &TokenMask) {
        debug_assert_eq!(self.len(), other.len());
        for (a, &b) in self.bits.iter_mut().zip(&other.bits) {
            *a = *a && !b;
        }
    }

    /// Whether every position set here is also set in `other`
    pub fn is_subset(&self, other: &TokenMask) -> bool {
        self.bits
            .iter()
            .zip(&other.bits)
            .all(|(&a, &b)| !a || b)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }
}

/// Subtree membership for every token of the sentence
///
/// Tokens are visited in post-order with an explicit stack so that each mask
/// is the union of its children's masks plus the token itself.
pub fn build_subtree_masks(tree: &SentenceTree) -> Vec<TokenMask> {
    let len = tree.len();
    let mut masks: Vec<TokenMask> = (0..len)
        .map(|i| {
            let mut mask = TokenMask::empty(len);
            mask.set(i, true);
            mask
        })
        .collect();

    let Some(root) = tree.root() else {
        return masks;
    };

    let mut order = Vec::with_capacity(len);
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        order.push(node);
        stack.extend_from_slice(tree.children(node));
    }

    // Reverse pre-order visits children before their parent
    for &node in order.iter().rev() {
        if let Some(parent) = tree.parent(node) {
            let (child_mask, parent_mask) = if node < parent {
                let (lo, hi) = masks.split_at_mut(parent);
                (&lo[node], &mut hi[0])
            } else {
                let (lo, hi) = masks.split_at_mut(node);
                (&hi[0], &mut lo[parent])
            };
            for (p, &c) in parent_mask.bits.iter_mut().zip(&child_mask.bits) {
                *p = *p || c;
            }
        }
    }

    masks
}
