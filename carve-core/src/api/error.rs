//! Error types for the API

use crate::annotation::AnnotationError;
use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// A sentence or chunk operation ran before any document was loaded
    #[error("Document is not loaded; call load_document first")]
    NotLoaded,

    /// A caller-supplied argument violates its precondition
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Annotator output could not be read or is not a valid tree
    #[error("Annotation error: {0}")]
    Annotation(#[from] AnnotationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
