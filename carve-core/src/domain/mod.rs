//! Domain layer: per-sentence data and the pure algorithms building it
//!
//! Nothing here performs I/O. Artifacts are built from annotator output and
//! then only read.

pub mod artifact;
pub mod classifier;
pub mod edge;
pub mod error;
pub mod mask;
pub mod reconstitute;
pub mod tree;

pub use artifact::SentenceArtifact;
pub use classifier::{CharacterTables, TokenClass};
pub use edge::{build_edge_catalog, DependencyEdge};
pub use error::DomainError;
pub use mask::{build_subtree_masks, TokenMask};
pub use reconstitute::{reconstitute, Reconstituted};
pub use tree::{SentenceTree, TokenRecord};
