//! Sentences command implementation

use anyhow::{Context, Result};
use carve_core::DocumentSession;
use clap::Args;
use std::path::PathBuf;

use super::{init_logging, open_output};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat, SentenceRecord};
use crate::progress::ProgressReporter;

/// Arguments for the sentences command
#[derive(Debug, Args)]
pub struct SentencesArgs {
    /// Input CoNLL-U files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SentencesArgs {
    /// Execute the sentences command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let config = CliConfig::load(self.config.as_deref())?;
        let files = resolve_patterns(&self.input)?;
        let mut session = DocumentSession::new(config.annotator()?);

        let mut formatter = create_formatter(
            self.format.unwrap_or(config.output.default_format),
            open_output(self.output.as_deref())?,
            config.output.pretty_json,
        );

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for path in &files {
            let file = path.display().to_string();
            let text = FileReader::read_text(path)?;

            session
                .load_document(&text)
                .map_err(CliError::from)
                .with_context(|| format!("Failed to load {file}"))?;

            let mut count = 0;
            if session.is_loaded() {
                let sentences = session.to_sentences().map_err(CliError::from)?;
                count = sentences.len();
                for (index, sentence) in sentences.iter().enumerate() {
                    formatter.format_sentence(&SentenceRecord {
                        file: &file,
                        index,
                        sentence,
                        chunks: None,
                        outcome: None,
                    })?;
                }
            } else {
                log::warn!("{file} holds no sentences");
            }
            progress.file_completed(&file, count);
        }

        formatter.finish()?;
        progress.finish();
        Ok(())
    }
}
