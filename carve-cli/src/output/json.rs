//! JSON output formatter

use super::{OutputFormatter, SentenceRecord};
use anyhow::Result;
use carve_core::PartitionOutcome;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sentences as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    sentences: Vec<SentenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceData {
    /// Input file
    pub file: String,
    /// Position of the sentence in its file
    pub sentence: usize,
    /// The sentence text
    pub text: String,
    /// Length of the sentence in characters
    pub length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<ChunkData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<PartitionOutcome>,
}

/// One chunk of a sentence
#[derive(Debug, Serialize, Deserialize)]
pub struct ChunkData {
    /// Position of the chunk in its sentence
    pub index: usize,
    pub text: String,
    /// Length in characters
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            sentences: Vec::new(),
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, record: &SentenceRecord<'_>) -> Result<()> {
        let chunks = record.chunks.map(|chunks| {
            chunks
                .iter()
                .enumerate()
                .map(|(index, text)| ChunkData {
                    index,
                    text: text.clone(),
                    length: text.chars().count(),
                })
                .collect()
        });

        self.sentences.push(SentenceData {
            file: record.file.to_string(),
            sentence: record.index,
            text: record.sentence.to_string(),
            length: record.sentence.chars().count(),
            chunks,
            outcome: record.outcome,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sentences)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
