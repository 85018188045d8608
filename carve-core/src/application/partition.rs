//! Count-bounded and length-bounded chunk searches

use super::carving::{carve_and_render, render_group};
use crate::domain::SentenceArtifact;
use serde::{Deserialize, Serialize};

/// How a sentence's chunks were obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartitionOutcome {
    /// The whole sentence already fit the length bound
    Whole,
    /// Tree carving with the first `cuts` edges of the catalog
    Carved { cuts: usize },
    /// The sentence had no more tokens than requested chunks
    PerToken,
    /// Every edge was cut and some chunk was still too long
    ExhaustedFallback,
}

/// Chunks of one sentence in reading order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub chunks: Vec<String>,
    pub outcome: PartitionOutcome,
}

impl Partition {
    fn new(chunks: Vec<String>, outcome: PartitionOutcome) -> Self {
        Self {
            chunks: chunks.into_iter().filter(|c| !c.is_empty()).collect(),
            outcome,
        }
    }

    fn per_token(artifact: &SentenceArtifact, outcome: PartitionOutcome) -> Self {
        Self::new(
            artifact.content_values().map(str::to_string).collect(),
            outcome,
        )
    }
}

/// Chunk length metric: Unicode scalar values
pub fn chunk_length(chunk: &str) -> usize {
    chunk.chars().count()
}

/// Split a sentence into at most `target_count` chunks
///
/// Cuts the `target_count - 1` highest-priority edges. Sentences with no more
/// tokens than `target_count` come back one chunk per content token.
pub fn partition_by_count(artifact: &SentenceArtifact, target_count: usize) -> Partition {
    debug_assert!(target_count > 0, "target_count must be positive");

    if artifact.token_count() <= target_count {
        return Partition::per_token(artifact, PartitionOutcome::PerToken);
    }

    let cuts = (target_count - 1).min(artifact.edges().len());
    let chunks = carve_and_render(artifact, &artifact.edges()[..cuts]);
    Partition::new(chunks, PartitionOutcome::Carved { cuts })
}

/// Split a sentence into chunks of at most `max_length` characters
///
/// Tries one cut, then two, and so on, each time carving from scratch with a
/// longer prefix of the edge catalog. When even cutting every edge leaves an
/// oversized chunk, falls back to one chunk per content token.
pub fn partition_by_length(artifact: &SentenceArtifact, max_length: usize) -> Partition {
    debug_assert!(max_length > 0, "max_length must be positive");

    let all: Vec<usize> = artifact.valid_mask().positions().collect();
    let whole = render_group(artifact.token_values(), &all);
    if chunk_length(&whole) <= max_length {
        return Partition::new(vec![whole], PartitionOutcome::Whole);
    }

    let edges = artifact.edges();
    for cuts in 1..=edges.len() {
        let chunks = carve_and_render(artifact, &edges[..cuts]);
        match chunks.iter().find(|c| chunk_length(c) > max_length) {
            None => return Partition::new(chunks, PartitionOutcome::Carved { cuts }),
            Some(long) => log::trace!(
                "{cuts} cuts leave a {}-char chunk over the {max_length} limit",
                chunk_length(long)
            ),
        }
    }

    log::debug!(
        "No cut set satisfies max length {max_length} for a {}-token sentence, splitting per token",
        artifact.token_count()
    );
    Partition::per_token(artifact, PartitionOutcome::ExhaustedFallback)
}
