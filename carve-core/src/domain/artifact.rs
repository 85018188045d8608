//! Per-sentence artifacts built once at load time

use super::edge::{build_edge_catalog, DependencyEdge};
use super::mask::{build_subtree_masks, TokenMask};
use super::reconstitute::reconstitute;
use super::tree::SentenceTree;
use crate::annotation::AnnotatedSentence;

/// Everything the partitioner needs about one sentence
///
/// Immutable after construction; a new document load replaces artifacts
/// wholesale.
#[derive(Debug, Clone)]
pub struct SentenceArtifact {
    text: String,
    token_values: Vec<String>,
    valid_mask: TokenMask,
    edges: Vec<DependencyEdge>,
    subtree_masks: Vec<TokenMask>,
}

impl SentenceArtifact {
    /// Build the artifact of a validated sentence
    pub fn build(document: &str, sentence: &AnnotatedSentence) -> Self {
        let tree = SentenceTree::from_annotated(sentence);
        let reconstituted = reconstitute(document, &tree);

        Self {
            text: document[sentence.start..sentence.end].to_string(),
            token_values: reconstituted.values,
            valid_mask: reconstituted.valid,
            edges: build_edge_catalog(&tree),
            subtree_masks: build_subtree_masks(&tree),
        }
    }

    /// Verbatim sentence text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn token_count(&self) -> usize {
        self.token_values.len()
    }

    /// Printable value per position, empty at absorbed positions
    pub fn token_values(&self) -> &[String] {
        &self.token_values
    }

    /// Positions holding content tokens
    pub fn valid_mask(&self) -> &TokenMask {
        &self.valid_mask
    }

    /// Edges in cut-priority order
    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    /// Subtree membership of the token at `index`
    pub fn subtree_mask(&self, index: usize) -> &TokenMask {
        &self.subtree_masks[index]
    }

    /// Non-empty token values in position order
    pub fn content_values(&self) -> impl Iterator<Item = &str> + '_ {
        self.token_values
            .iter()
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}
