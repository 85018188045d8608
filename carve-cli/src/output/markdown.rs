//! Markdown output formatter

use super::{OutputFormatter, SentenceRecord};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - numbered sentences, chunks as nested bullets
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
    chunk_count: usize,
    current_file: Option<String>,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
            chunk_count: 0,
            current_file: None,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_sentence(&mut self, record: &SentenceRecord<'_>) -> Result<()> {
        if self.current_file.as_deref() != Some(record.file) {
            if self.current_file.is_some() {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "## {}", record.file)?;
            writeln!(self.writer)?;
            self.current_file = Some(record.file.to_string());
        }

        self.sentence_count += 1;
        writeln!(self.writer, "{}. {}", record.index + 1, record.sentence.trim())?;

        for chunk in record.chunks.unwrap_or_default() {
            self.chunk_count += 1;
            writeln!(self.writer, "   - {chunk}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        if self.chunk_count > 0 {
            writeln!(
                self.writer,
                "*Total sentences: {}, chunks: {}*",
                self.sentence_count, self.chunk_count
            )?;
        } else {
            writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_sentences_with_chunk_bullets() {
        let chunks = vec!["Bob gave her".to_string(), "a pearl necklace.".to_string()];
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter
                .format_sentence(&SentenceRecord {
                    file: "pearl.conllu",
                    index: 0,
                    sentence: "Bob gave her a pearl necklace.",
                    chunks: Some(chunks.as_slice()),
                    outcome: None,
                })
                .unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "## pearl.conllu\n\n\
             1. Bob gave her a pearl necklace.\n   \
             - Bob gave her\n   \
             - a pearl necklace.\n\
             \n---\n*Total sentences: 1, chunks: 2*\n"
        );
    }

    #[test]
    fn test_heading_per_file() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            for (file, sentence) in [("a.conllu", "One."), ("a.conllu", "Two."), ("b.conllu", "Three.")] {
                formatter
                    .format_sentence(&SentenceRecord {
                        file,
                        index: 0,
                        sentence,
                        chunks: None,
                        outcome: None,
                    })
                    .unwrap();
            }
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.matches("## ").count(), 2);
        assert!(output.ends_with("*Total sentences: 3*\n"));
    }
}
