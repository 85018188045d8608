//! Boundary to the linguistic annotator
//!
//! This crate never parses text itself. An [`Annotator`] turns input into an
//! [`AnnotatedDocument`]: segmented sentences whose tokens carry byte offsets,
//! an attachable flag and the index of their syntactic head.

mod conllu;
mod document;
mod error;

pub use conllu::{ConlluAnnotator, ConlluOptions};
pub use document::{AnnotatedDocument, AnnotatedSentence, AnnotatedToken, DocumentBuilder, Word};
pub use error::AnnotationError;

/// Produces tokenized, segmented, dependency-parsed documents
pub trait Annotator: Send + Sync {
    /// Annotate one document
    fn annotate(&self, input: &str) -> Result<AnnotatedDocument, AnnotationError>;
}

impl<A: Annotator + ?Sized> Annotator for &A {
    fn annotate(&self, input: &str) -> Result<AnnotatedDocument, AnnotationError> {
        (**self).annotate(input)
    }
}

impl<A: Annotator + ?Sized> Annotator for Box<A> {
    fn annotate(&self, input: &str) -> Result<AnnotatedDocument, AnnotationError> {
        (**self).annotate(input)
    }
}
