//! Chunk command implementation

use anyhow::{Context, Result};
use carve_core::{ChunkRequest, DocumentSession};
use clap::Args;
use std::path::PathBuf;

use super::{init_logging, open_output};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat, SentenceRecord};
use crate::progress::ProgressReporter;

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    /// Input CoNLL-U files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// At most this many chunks per sentence
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Chunks of at most this many characters
    #[arg(short = 'm', long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

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

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting chunking");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let request = self.request(&config)?;
        log::info!("Chunk request: {:?}", request);

        let files = resolve_patterns(&self.input)?;
        let mut session =
            DocumentSession::with_config(config.annotator()?, config.session_config(self.threads)?)
                .map_err(CliError::from)?;

        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter = create_formatter(
            format,
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

            if !session.is_loaded() {
                log::warn!("{file} holds no sentences");
                progress.file_completed(&file, 0);
                continue;
            }

            let sentences = session.chunk_sentences(request).map_err(CliError::from)?;
            log::info!("{file}: {} sentences", sentences.len());

            for sentence in &sentences {
                formatter.format_sentence(&SentenceRecord {
                    file: &file,
                    index: sentence.index,
                    sentence: &sentence.sentence,
                    chunks: Some(sentence.chunks.as_slice()),
                    outcome: Some(sentence.outcome),
                })?;
            }
            progress.file_completed(&file, sentences.len());
        }

        formatter.finish()?;
        progress.finish();
        Ok(())
    }

    /// Flags win over the config file's `[chunking]` defaults
    fn request(&self, config: &CliConfig) -> Result<ChunkRequest> {
        let (count, max_length) = if self.count.is_some() || self.max_length.is_some() {
            (self.count, self.max_length)
        } else {
            (config.chunking.count, config.chunking.max_length)
        };

        ChunkRequest::from_options(count, max_length).map_err(|e| CliError::from(e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> ChunkArgs {
        let argv = ["carve", "chunk", "-i", "a.conllu"].iter().chain(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Chunk(args) => args,
            other => panic!("expected chunk, got {other:?}"),
        }
    }

    #[test]
    fn test_flag_overrides_config() {
        let config = CliConfig::default();
        assert_eq!(
            parse(&["--count", "2"]).request(&config).unwrap(),
            ChunkRequest::ByCount(2)
        );
        assert_eq!(
            parse(&["-m", "12"]).request(&config).unwrap(),
            ChunkRequest::ByLength(12)
        );
    }

    #[test]
    fn test_config_default_used_without_flags() {
        let config = CliConfig::default();
        assert_eq!(
            parse(&[]).request(&config).unwrap(),
            ChunkRequest::ByLength(40)
        );

        let config = CliConfig::from_toml_str("[chunking]\ncount = 4\nmax_length = 30\n").unwrap();
        let err = parse(&[]).request(&config).unwrap_err();
        assert!(err.to_string().contains("not both"));
    }

    #[test]
    fn test_both_flags_rejected() {
        let err = parse(&["-n", "2", "-m", "10"])
            .request(&CliConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("not both"));
    }

    #[test]
    fn test_zero_bound_rejected() {
        let err = parse(&["--count", "0"])
            .request(&CliConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("target_count must be greater than 0"));
    }
}
