//! Errors raised while reading or validating annotator output

use thiserror::Error;

/// Annotator output that cannot be turned into sentence trees
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    /// Input line could not be parsed
    #[error("Malformed input at line {line}: {message}")]
    Malformed { line: usize, message: String },

    /// Byte offsets fall outside the text or inside a UTF-8 sequence
    #[error("Sentence {sentence}: invalid span {start}..{end}")]
    InvalidSpan {
        sentence: usize,
        start: usize,
        end: usize,
    },

    /// Sentence has zero or several tokens without a head
    #[error("Sentence {sentence}: expected exactly one root, found {roots}")]
    RootCount { sentence: usize, roots: usize },

    /// Head index points outside the sentence
    #[error("Sentence {sentence}: token {token} has head {head} outside the sentence")]
    HeadOutOfRange {
        sentence: usize,
        token: usize,
        head: usize,
    },

    /// Following heads from a token never reaches the root
    #[error("Sentence {sentence}: token {token} is part of a dependency cycle")]
    Cycle { sentence: usize, token: usize },
}
