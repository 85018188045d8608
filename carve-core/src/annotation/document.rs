//! Annotated document records handed over by an annotator

use super::error::AnnotationError;
use crate::domain::classifier;
use serde::{Deserialize, Serialize};

/// One token as produced by the annotator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Byte offset of the first character in the document text
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Punctuation-like token that must not stand alone
    pub attachable: bool,
    /// Sentence-local index of the syntactic head, `None` for the root
    pub head: Option<usize>,
}

/// A segmented sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSentence {
    /// Byte offset of the sentence start in the document text
    pub start: usize,
    /// Byte offset one past the sentence end
    pub end: usize,
    /// Tokens in reading order
    pub tokens: Vec<AnnotatedToken>,
}

/// Full annotator output for one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    /// The document text all offsets refer to
    pub text: String,
    /// Sentences in reading order
    pub sentences: Vec<AnnotatedSentence>,
}

impl AnnotatedDocument {
    /// Start building a document word by word
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// Verbatim text of a sentence
    pub fn sentence_text(&self, sentence: &AnnotatedSentence) -> &str {
        &self.text[sentence.start..sentence.end]
    }

    /// Check offsets and tree shape of every sentence
    pub fn validate(&self) -> Result<(), AnnotationError> {
        for (index, sentence) in self.sentences.iter().enumerate() {
            self.validate_span(index, sentence.start, sentence.end)?;
            for token in &sentence.tokens {
                if token.start < sentence.start || token.end > sentence.end {
                    return Err(AnnotationError::InvalidSpan {
                        sentence: index,
                        start: token.start,
                        end: token.end,
                    });
                }
                self.validate_span(index, token.start, token.end)?;
            }
            validate_tree(index, &sentence.tokens)?;
        }
        Ok(())
    }

    fn validate_span(&self, sentence: usize, start: usize, end: usize) -> Result<(), AnnotationError> {
        let valid = start <= end
            && end <= self.text.len()
            && self.text.is_char_boundary(start)
            && self.text.is_char_boundary(end);

        if valid {
            Ok(())
        } else {
            Err(AnnotationError::InvalidSpan {
                sentence,
                start,
                end,
            })
        }
    }
}

fn validate_tree(sentence: usize, tokens: &[AnnotatedToken]) -> Result<(), AnnotationError> {
    if tokens.is_empty() {
        return Ok(());
    }

    let roots = tokens.iter().filter(|t| t.head.is_none()).count();
    if roots != 1 {
        return Err(AnnotationError::RootCount { sentence, roots });
    }

    for (token, t) in tokens.iter().enumerate() {
        if let Some(head) = t.head {
            if head >= tokens.len() || head == token {
                return Err(AnnotationError::HeadOutOfRange {
                    sentence,
                    token,
                    head,
                });
            }
        }
    }

    // Every chain of heads has to end at the root within `len` steps
    for token in 0..tokens.len() {
        let mut current = token;
        let mut steps = 0;
        while let Some(head) = tokens[current].head {
            current = head;
            steps += 1;
            if steps > tokens.len() {
                return Err(AnnotationError::Cycle { sentence, token });
            }
        }
    }

    Ok(())
}

/// A word pushed into a [`DocumentBuilder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub form: String,
    pub head: Option<usize>,
    pub attachable: bool,
    pub space_after: bool,
}

impl Word {
    /// Word followed by a space, attachable if its form classifies as such
    pub fn new(form: impl Into<String>, head: Option<usize>) -> Self {
        let form = form.into();
        let attachable = classifier::classify(&form).is_attachable();
        Self {
            form,
            head,
            attachable,
            space_after: true,
        }
    }

    /// Override the attachable classification
    pub fn attachable(mut self, attachable: bool) -> Self {
        self.attachable = attachable;
        self
    }

    /// Glue the next word directly onto this one
    pub fn no_space_after(mut self) -> Self {
        self.space_after = false;
        self
    }
}

/// Assembles document text and token offsets from words
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    text: String,
    sentences: Vec<AnnotatedSentence>,
    separator: String,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self {
            text: String::new(),
            sentences: Vec::new(),
            separator: " ".to_string(),
        }
    }
}

impl DocumentBuilder {
    /// Create a new builder joining sentences with a single space
    pub fn new() -> Self {
        Self::default()
    }

    /// Text inserted between consecutive sentences
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Append a sentence
    pub fn push_sentence(&mut self, words: impl IntoIterator<Item = Word>) -> &mut Self {
        let words: Vec<Word> = words.into_iter().collect();
        if words.is_empty() {
            return self;
        }

        if !self.sentences.is_empty() {
            self.text.push_str(&self.separator);
        }

        let start = self.text.len();
        let mut tokens = Vec::with_capacity(words.len());
        let last = words.len() - 1;

        for (i, word) in words.into_iter().enumerate() {
            let token_start = self.text.len();
            self.text.push_str(&word.form);
            tokens.push(AnnotatedToken {
                start: token_start,
                end: self.text.len(),
                attachable: word.attachable,
                head: word.head,
            });
            if word.space_after && i != last {
                self.text.push(' ');
            }
        }

        let end = tokens.last().map_or(start, |t| t.end);
        self.sentences.push(AnnotatedSentence { start, end, tokens });
        self
    }

    /// Chainable variant of [`push_sentence`](Self::push_sentence)
    pub fn sentence(mut self, words: impl IntoIterator<Item = Word>) -> Self {
        self.push_sentence(words);
        self
    }

    /// Finish the document
    pub fn build(self) -> AnnotatedDocument {
        AnnotatedDocument {
            text: self.text,
            sentences: self.sentences,
        }
    }
}
