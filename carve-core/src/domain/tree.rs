//! Sentence dependency tree stored as an arena of token records

use crate::annotation::AnnotatedSentence;

/// A token reduced to what chunking needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRecord {
    /// Byte offset into the document text
    pub start: usize,
    /// Byte offset one past the token
    pub end: usize,
    /// Punctuation-like token merged into a neighbour
    pub attachable: bool,
}

/// Immutable dependency tree over sentence-local positions
#[derive(Debug, Clone)]
pub struct SentenceTree {
    tokens: Vec<TokenRecord>,
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    root: Option<usize>,
}

impl SentenceTree {
    /// Build the arena from a validated sentence
    ///
    /// The root is never treated as attachable: it has no parent to attach to.
    pub fn from_annotated(sentence: &AnnotatedSentence) -> Self {
        let len = sentence.tokens.len();
        let mut tokens = Vec::with_capacity(len);
        let mut parents = Vec::with_capacity(len);
        let mut children = vec![Vec::new(); len];
        let mut root = None;

        for (i, token) in sentence.tokens.iter().enumerate() {
            tokens.push(TokenRecord {
                start: token.start,
                end: token.end,
                attachable: token.attachable && token.head.is_some(),
            });
            parents.push(token.head);
            match token.head {
                Some(head) => children[head].push(i),
                None => root = Some(i),
            }
        }

        Self {
            tokens,
            parents,
            children,
            root,
        }
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, index: usize) -> &TokenRecord {
        &self.tokens[index]
    }

    pub fn tokens(&self) -> &[TokenRecord] {
        &self.tokens
    }

    /// Direct head of a token, `None` for the root
    pub fn parent(&self, index: usize) -> Option<usize> {
        self.parents[index]
    }

    /// Direct dependents in ascending position order
    pub fn children(&self, index: usize) -> &[usize] {
        &self.children[index]
    }

    pub fn root(&self) -> Option<usize> {
        self.root
    }

    pub fn is_attachable(&self, index: usize) -> bool {
        self.tokens[index].attachable
    }
}
