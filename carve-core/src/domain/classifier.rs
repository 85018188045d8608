//! Attachable token classification
//!
//! A token is *attachable* when it is punctuation-like: brackets, quotes,
//! currency symbols, punctuation marks or whitespace. Attachable tokens never
//! form a chunk of their own; their text is merged into a content neighbour.

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

static DEFAULT_TABLES: OnceLock<CharacterTables> = OnceLock::new();

const EMBEDDED_TABLES: &str = include_str!("../../configs/attachable.toml");

/// Classification of a whole token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenClass {
    /// Symmetric or typographic quotation mark
    Quote,
    /// Opening bracket
    LeftPunct,
    /// Closing bracket
    RightPunct,
    /// Bracket made of mixed opening and closing characters
    Bracket,
    /// Currency symbol
    Currency,
    /// Any other punctuation, including mixed runs such as `?!` or `."`
    Punct,
    /// Empty or whitespace-only token
    Space,
    /// Regular content token
    Content,
}

impl TokenClass {
    /// Whether tokens of this class are merged into a neighbour
    pub fn is_attachable(self) -> bool {
        !matches!(self, TokenClass::Content)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TablesFile {
    metadata: MetadataSection,
    #[serde(default)]
    quotes: CharsSection,
    #[serde(default)]
    brackets: BracketSection,
    #[serde(default)]
    currency: CharsSection,
    #[serde(default)]
    punctuation: CharsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MetadataSection {
    name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CharsSection {
    #[serde(default)]
    chars: Vec<char>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BracketSection {
    #[serde(default)]
    open: Vec<char>,
    #[serde(default)]
    close: Vec<char>,
}

/// Character tables driving [`TokenClass`] classification
#[derive(Debug, Clone)]
pub struct CharacterTables {
    name: String,
    quotes: HashSet<char>,
    open_brackets: HashSet<char>,
    close_brackets: HashSet<char>,
    currency: HashSet<char>,
    punctuation: HashSet<char>,
}

impl CharacterTables {
    /// Tables embedded in the crate, parsed once
    pub fn builtin() -> &'static CharacterTables {
        DEFAULT_TABLES.get_or_init(|| {
            Self::from_toml_str(EMBEDDED_TABLES).expect("embedded attachable tables must parse")
        })
    }

    /// Parse tables from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self, DomainError> {
        let file: TablesFile = toml::from_str(source).map_err(|e| {
            DomainError::ConfigurationError(format!("Failed to parse character tables: {e}"))
        })?;

        if file.metadata.name.trim().is_empty() {
            return Err(DomainError::ConfigurationError(
                "character tables need a non-empty metadata.name".into(),
            ));
        }

        Ok(Self {
            name: file.metadata.name,
            quotes: file.quotes.chars.into_iter().collect(),
            open_brackets: file.brackets.open.into_iter().collect(),
            close_brackets: file.brackets.close.into_iter().collect(),
            currency: file.currency.chars.into_iter().collect(),
            punctuation: file.punctuation.chars.into_iter().collect(),
        })
    }

    /// Load tables from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            DomainError::ConfigurationError(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    /// Table set name from the metadata section
    pub fn name(&self) -> &str {
        &self.name
    }

    fn is_bracket(&self, ch: char) -> bool {
        self.open_brackets.contains(&ch) || self.close_brackets.contains(&ch)
    }

    fn is_punctuation(&self, ch: char) -> bool {
        self.punctuation.contains(&ch) || ch.is_ascii_punctuation()
    }

    fn is_attachable_char(&self, ch: char) -> bool {
        self.quotes.contains(&ch)
            || self.is_bracket(ch)
            || self.currency.contains(&ch)
            || self.is_punctuation(ch)
            || ch.is_whitespace()
    }

    /// Classify a token by its surface text
    pub fn classify(&self, text: &str) -> TokenClass {
        if text.chars().all(char::is_whitespace) {
            return TokenClass::Space;
        }

        let all = |pred: &dyn Fn(char) -> bool| text.chars().all(pred);

        if all(&|c| self.quotes.contains(&c)) {
            TokenClass::Quote
        } else if all(&|c| self.open_brackets.contains(&c)) {
            TokenClass::LeftPunct
        } else if all(&|c| self.close_brackets.contains(&c)) {
            TokenClass::RightPunct
        } else if all(&|c| self.is_bracket(c)) {
            TokenClass::Bracket
        } else if all(&|c| self.currency.contains(&c)) {
            TokenClass::Currency
        } else if all(&|c| self.is_attachable_char(c)) {
            TokenClass::Punct
        } else {
            TokenClass::Content
        }
    }

    /// Shorthand for `classify(text).is_attachable()`
    pub fn is_attachable(&self, text: &str) -> bool {
        self.classify(text).is_attachable()
    }
}

impl Default for CharacterTables {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Classify a token with the built-in tables
pub fn classify(text: &str) -> TokenClass {
    CharacterTables::builtin().classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_load() {
        let tables = CharacterTables::builtin();
        assert_eq!(tables.name(), "default");
    }

    #[test]
    fn test_content_tokens() {
        assert_eq!(classify("Alice"), TokenClass::Content);
        assert_eq!(classify("1,000"), TokenClass::Content);
        assert_eq!(classify("U.S."), TokenClass::Content);
        assert_eq!(classify("don't"), TokenClass::Content);
        assert_eq!(classify("목걸이를"), TokenClass::Content);
    }

    #[test]
    fn test_punctuation_classes() {
        assert_eq!(classify("\""), TokenClass::Quote);
        assert_eq!(classify("“"), TokenClass::Quote);
        assert_eq!(classify("("), TokenClass::LeftPunct);
        assert_eq!(classify("】"), TokenClass::RightPunct);
        assert_eq!(classify("()"), TokenClass::Bracket);
        assert_eq!(classify("$"), TokenClass::Currency);
        assert_eq!(classify("₩"), TokenClass::Currency);
        assert_eq!(classify("."), TokenClass::Punct);
        assert_eq!(classify("..."), TokenClass::Punct);
        assert_eq!(classify("?!"), TokenClass::Punct);
        assert_eq!(classify("!\""), TokenClass::Punct);
        assert_eq!(classify("。"), TokenClass::Punct);
    }

    #[test]
    fn test_whitespace_is_space() {
        assert_eq!(classify(" "), TokenClass::Space);
        assert_eq!(classify("\n\t"), TokenClass::Space);
        assert_eq!(classify(""), TokenClass::Space);
    }

    #[test]
    fn test_attachable_flag() {
        assert!(TokenClass::Quote.is_attachable());
        assert!(TokenClass::Space.is_attachable());
        assert!(!TokenClass::Content.is_attachable());
    }

    #[test]
    fn test_custom_tables() {
        let tables = CharacterTables::from_toml_str(
            r#"
            [metadata]
            name = "minimal"

            [currency]
            chars = ["¤"]
            "#,
        )
        .unwrap();

        assert_eq!(tables.name(), "minimal");
        assert_eq!(tables.classify("¤"), TokenClass::Currency);
        // ASCII punctuation is always recognised
        assert_eq!(tables.classify(","), TokenClass::Punct);
        // Not listed anywhere
        assert_eq!(tables.classify("…"), TokenClass::Content);
    }

    #[test]
    fn test_invalid_tables() {
        match CharacterTables::from_toml_str("[metadata]\nname = \"\"") {
            Err(DomainError::ConfigurationError(msg)) => assert!(msg.contains("metadata.name")),
            other => panic!("Expected ConfigurationError, got {other:?}"),
        }
        assert!(CharacterTables::from_toml_str("not toml at all [").is_err());
    }
}
