//! CoNLL-U reader
//!
//! CoNLL-U is the interchange format written by Universal Dependencies
//! parsers. Each word line carries ten tab-separated columns:
//! `ID FORM LEMMA UPOS XPOS FEATS HEAD DEPREL DEPS MISC`. Blank lines end a
//! sentence, `#` lines are comments.

use super::document::{AnnotatedDocument, DocumentBuilder, Word};
use super::error::AnnotationError;
use super::Annotator;
use crate::domain::classifier::CharacterTables;

const COLUMN_COUNT: usize = 10;
const FORM: usize = 1;
const UPOS: usize = 3;
const HEAD: usize = 6;
const MISC: usize = 9;

/// Options for [`ConlluAnnotator`]
#[derive(Debug, Clone)]
pub struct ConlluOptions {
    /// UPOS tags that always mark a token as attachable
    pub attachable_upos: Vec<String>,
    /// Text inserted between sentences when rebuilding the document
    pub sentence_separator: String,
}

impl Default for ConlluOptions {
    fn default() -> Self {
        Self {
            attachable_upos: vec!["PUNCT".to_string(), "SPACE".to_string()],
            sentence_separator: " ".to_string(),
        }
    }
}

/// Annotator reading pre-parsed CoNLL-U input
#[derive(Debug, Clone)]
pub struct ConlluAnnotator {
    options: ConlluOptions,
    tables: CharacterTables,
}

impl Default for ConlluAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConlluAnnotator {
    /// Create an annotator with default options and built-in tables
    pub fn new() -> Self {
        Self::with_options(ConlluOptions::default())
    }

    /// Create an annotator with custom options
    pub fn with_options(options: ConlluOptions) -> Self {
        Self {
            options,
            tables: CharacterTables::default(),
        }
    }

    /// Replace the character tables used to classify forms
    pub fn with_tables(mut self, tables: CharacterTables) -> Self {
        self.tables = tables;
        self
    }

    fn parse_word(&self, line_no: usize, columns: &[&str]) -> Result<Word, AnnotationError> {
        let malformed = |message: String| AnnotationError::Malformed {
            line: line_no,
            message,
        };

        let form = columns[FORM];
        if form.is_empty() {
            return Err(malformed("empty FORM column".into()));
        }

        let head = match columns[HEAD] {
            "0" => None,
            "_" => return Err(malformed("missing HEAD".into())),
            raw => {
                let head = raw
                    .parse::<usize>()
                    .ok()
                    .and_then(|head| head.checked_sub(1))
                    .ok_or_else(|| malformed(format!("invalid HEAD '{raw}'")))?;
                Some(head)
            }
        };

        let attachable = self
            .options
            .attachable_upos
            .iter()
            .any(|tag| tag == columns[UPOS])
            || self.tables.is_attachable(form);

        let space_after = !columns[MISC]
            .split('|')
            .any(|entry| entry == "SpaceAfter=No");

        let mut word = Word::new(form, head).attachable(attachable);
        word.space_after = space_after;
        Ok(word)
    }
}

impl Annotator for ConlluAnnotator {
    fn annotate(&self, input: &str) -> Result<AnnotatedDocument, AnnotationError> {
        let mut builder = DocumentBuilder::new().separator(self.options.sentence_separator.clone());
        let mut words: Vec<Word> = Vec::new();
        let mut expected_id = 1usize;

        for (index, raw_line) in input.lines().enumerate() {
            let line_no = index + 1;
            let line = raw_line.trim_end_matches('\r');

            if line.trim().is_empty() {
                builder.push_sentence(words.drain(..));
                expected_id = 1;
                continue;
            }
            if line.starts_with('#') {
                continue;
            }

            let columns: Vec<&str> = line.split('\t').collect();
            if columns.len() != COLUMN_COUNT {
                return Err(AnnotationError::Malformed {
                    line: line_no,
                    message: format!("expected {COLUMN_COUNT} columns, found {}", columns.len()),
                });
            }

            let id = columns[0];
            // Multiword token ranges and empty nodes are not part of the tree
            if id.contains('-') || id.contains('.') {
                continue;
            }
            let id: usize = id.parse().map_err(|_| AnnotationError::Malformed {
                line: line_no,
                message: format!("invalid ID '{id}'"),
            })?;
            if id != expected_id {
                return Err(AnnotationError::Malformed {
                    line: line_no,
                    message: format!("expected ID {expected_id}, found {id}"),
                });
            }
            expected_id += 1;

            words.push(self.parse_word(line_no, &columns)?);
        }
        builder.push_sentence(words);

        let document = builder.build();
        log::debug!(
            "Read {} sentences ({} bytes of text) from CoNLL-U input",
            document.sentences.len(),
            document.text.len()
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# sent_id = 1
# text = Alice said \"Hi!\" to Bob.
1\tAlice\tAlice\tPROPN\tNNP\t_\t2\tnsubj\t_\t_
2\tsaid\tsay\tVERB\tVBD\t_\t0\tROOT\t_\t_
3\t\"\t\"\tPUNCT\t``\t_\t4\tpunct\t_\tSpaceAfter=No
4\tHi\thi\tINTJ\tUH\t_\t2\tccomp\t_\tSpaceAfter=No
5\t!\t!\tPUNCT\t.\t_\t4\tpunct\t_\tSpaceAfter=No
6\t\"\t\"\tPUNCT\t''\t_\t4\tpunct\t_\t_
7\tto\tto\tADP\tIN\t_\t2\tprep\t_\t_
8\tBob\tBob\tPROPN\tNNP\t_\t7\tpobj\t_\tSpaceAfter=No
9\t.\t.\tPUNCT\t.\t_\t2\tpunct\t_\t_

1\tThanks\tthanks\tNOUN\tNNS\t_\t0\tROOT\t_\t_
";

    #[test]
    fn test_rebuilds_document_text() {
        let doc = ConlluAnnotator::new().annotate(SAMPLE).unwrap();
        assert_eq!(doc.text, "Alice said \"Hi!\" to Bob. Thanks");
        assert_eq!(doc.sentences.len(), 2);
        assert_eq!(
            doc.sentence_text(&doc.sentences[0]),
            "Alice said \"Hi!\" to Bob."
        );
        assert_eq!(doc.sentence_text(&doc.sentences[1]), "Thanks");
        assert_eq!(doc.validate(), Ok(()));
    }

    #[test]
    fn test_heads_and_attachable() {
        let doc = ConlluAnnotator::new().annotate(SAMPLE).unwrap();
        let tokens = &doc.sentences[0].tokens;
        assert_eq!(tokens[0].head, Some(1));
        assert_eq!(tokens[1].head, None);
        assert!(tokens[2].attachable);
        assert!(!tokens[3].attachable);
        assert!(tokens[8].attachable);
    }

    #[test]
    fn test_skips_multiword_ranges_and_empty_nodes() {
        let input = "\
1-2\tdel\t_\t_\t_\t_\t_\t_\t_\t_
1\tde\tde\tADP\t_\t_\t2\tcase\t_\t_
2\tel\tel\tDET\t_\t_\t0\troot\t_\t_
2.1\tx\tx\tX\t_\t_\t_\t_\t_\t_
";
        let doc = ConlluAnnotator::new().annotate(input).unwrap();
        assert_eq!(doc.text, "de el");
        assert_eq!(doc.sentences[0].tokens.len(), 2);
    }

    #[test]
    fn test_custom_separator() {
        let options = ConlluOptions {
            sentence_separator: "\n".to_string(),
            ..ConlluOptions::default()
        };
        let doc = ConlluAnnotator::with_options(options).annotate(SAMPLE).unwrap();
        assert!(doc.text.contains("Bob.\nThanks"));
    }

    #[test]
    fn test_malformed_column_count() {
        let err = ConlluAnnotator::new()
            .annotate("1\tonly\tthree\n")
            .unwrap_err();
        assert_eq!(
            err,
            AnnotationError::Malformed {
                line: 1,
                message: "expected 10 columns, found 3".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_head() {
        let err = ConlluAnnotator::new()
            .annotate("1\tword\tword\tNOUN\t_\t_\tx\troot\t_\t_\n")
            .unwrap_err();
        assert!(matches!(err, AnnotationError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_out_of_order_ids() {
        let input = "\
1\ta\ta\tX\t_\t_\t0\troot\t_\t_
3\tb\tb\tX\t_\t_\t1\tdep\t_\t_
";
        let err = ConlluAnnotator::new().annotate(input).unwrap_err();
        assert!(matches!(err, AnnotationError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_empty_input() {
        let doc = ConlluAnnotator::new().annotate("").unwrap();
        assert!(doc.text.is_empty());
        assert!(doc.sentences.is_empty());
    }
}
