//! Dependency-tree chunking of annotated sentences
//!
//! This crate splits syntactically annotated sentences into shorter,
//! readable fragments ("chunks") that never break a phrase apart. Each chunk
//! is a dependency subtree or what remains of the sentence trunk once the
//! chosen subtrees are carved out. Chunking is bounded either by a target
//! number of chunks per sentence or by a maximum chunk length in characters.
//!
//! # Architecture
//!
//! - **Annotation layer**: the boundary to the external parser
//!   ([`annotation::Annotator`], with a CoNLL-U reader built in)
//! - **Domain layer**: per-sentence artifacts: token values with punctuation
//!   merged in, the sorted edge catalog and subtree masks
//! - **Application layer**: subtree carving and the count/length searches
//! - **API layer**: [`DocumentSession`] and its configuration
//!
//! # Example
//!
//! ```rust
//! use carve_core::{ConlluAnnotator, DocumentSession};
//!
//! let conllu = "\
//! 1\tBob\t_\tPROPN\t_\t_\t2\tnsubj\t_\t_
//! 2\tgave\t_\tVERB\t_\t_\t0\troot\t_\t_
//! 3\ther\t_\tPRON\t_\t_\t2\tiobj\t_\t_
//! 4\ta\t_\tDET\t_\t_\t6\tdet\t_\t_
//! 5\tpearl\t_\tNOUN\t_\t_\t6\tcompound\t_\t_
//! 6\tnecklace\t_\tNOUN\t_\t_\t2\tobj\t_\tSpaceAfter=No
//! 7\t.\t_\tPUNCT\t_\t_\t2\tpunct\t_\t_
//! ";
//!
//! let mut session = DocumentSession::new(ConlluAnnotator::new());
//! session.load_document(conllu).unwrap();
//!
//! let chunks = session.to_chunks_by_count(2).unwrap();
//! assert_eq!(chunks, vec!["Bob gave her", "a pearl necklace."]);
//! ```

pub mod annotation;
pub mod api;
pub mod application;
pub mod domain;

pub use annotation::{
    AnnotatedDocument, AnnotatedSentence, AnnotatedToken, AnnotationError, Annotator,
    ConlluAnnotator, ConlluOptions,
};
pub use api::{ChunkRequest, Config, ConfigBuilder, DocumentSession, Error, Result, SentenceChunks};
pub use application::{Partition, PartitionOutcome};
pub use domain::{DependencyEdge, SentenceArtifact};
