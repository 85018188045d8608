//! Output formatting module

use anyhow::Result;
use carve_core::PartitionOutcome;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// One sentence ready for output
///
/// `chunks` is `None` when only sentences were requested.
#[derive(Debug, Clone, Copy)]
pub struct SentenceRecord<'a> {
    /// Input file the sentence came from
    pub file: &'a str,
    /// Position of the sentence in its file
    pub index: usize,
    /// Verbatim sentence text
    pub sentence: &'a str,
    pub chunks: Option<&'a [String]>,
    pub outcome: Option<PartitionOutcome>,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single sentence with its chunks
    fn format_sentence(&mut self, record: &SentenceRecord<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text with one chunk per line
    Text,
    /// JSON array of sentences and their chunks
    Json,
    /// Markdown list of sentences with chunk bullets
    Markdown,
}

impl OutputFormat {
    /// All formats with a short description, for `carve list formats`
    pub fn describe_all() -> [(&'static str, &'static str); 3] {
        [
            ("text", "One chunk per line, blank line between sentences"),
            ("json", "JSON array of sentences with chunk text and length"),
            ("markdown", "Numbered sentences with chunk bullets"),
        ]
    }
}

/// Create a formatter writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
