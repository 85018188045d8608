//! Plain text output formatter

use super::{OutputFormatter, SentenceRecord};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter
///
/// Chunks go one per line with a blank line between sentences. Without
/// chunks, sentences go one per line.
pub struct TextFormatter<W: Write> {
    writer: W,
    sentences_written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentences_written: 0,
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, record: &SentenceRecord<'_>) -> Result<()> {
        match record.chunks {
            Some(chunks) => {
                if self.sentences_written > 0 {
                    writeln!(self.writer)?;
                }
                for chunk in chunks {
                    writeln!(self.writer, "{chunk}")?;
                }
            }
            None => writeln!(self.writer, "{}", record.sentence.trim())?,
        }
        self.sentences_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<'a>(index: usize, sentence: &'a str, chunks: Option<&'a [String]>) -> SentenceRecord<'a> {
        SentenceRecord {
            file: "a.conllu",
            index,
            sentence,
            chunks,
            outcome: None,
        }
    }

    #[test]
    fn test_chunks_with_blank_line_between_sentences() {
        let first = vec!["Bob gave her".to_string(), "a pearl necklace.".to_string()];
        let second = vec!["She smiled.".to_string()];

        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter
                .format_sentence(&record(0, "Bob gave her a pearl necklace.", Some(first.as_slice())))
                .unwrap();
            formatter
                .format_sentence(&record(1, "She smiled.", Some(second.as_slice())))
                .unwrap();
            formatter.finish().unwrap();
        }

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Bob gave her\na pearl necklace.\n\nShe smiled.\n"
        );
    }

    #[test]
    fn test_sentences_one_per_line() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.format_sentence(&record(0, "First.", None)).unwrap();
            formatter.format_sentence(&record(1, "Second.", None)).unwrap();
            formatter.finish().unwrap();
        }

        assert_eq!(String::from_utf8(buffer).unwrap(), "First.\nSecond.\n");
    }
}
