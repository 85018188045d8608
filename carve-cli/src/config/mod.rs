//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use carve_core::domain::CharacterTables;
use carve_core::{Config, ConlluAnnotator, ConlluOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Default chunking bounds
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// CoNLL-U reading configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Bounds used when neither `--count` nor `--max-length` is given
///
/// A `[chunking]` section replaces the default as a whole, so setting only
/// `count` does not leave the default `max_length` behind.
#[derive(Debug, Deserialize, Serialize)]
pub struct ChunkingConfig {
    pub count: Option<usize>,
    pub max_length: Option<usize>,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            count: None,
            max_length: Some(40),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Input-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// UPOS tags that mark a token as attachable
    pub attachable_upos: Vec<String>,

    /// Text placed between sentences when rebuilding documents
    pub sentence_separator: String,

    /// Custom attachable character tables (TOML)
    pub character_tables: Option<PathBuf>,
}

impl Default for InputConfig {
    fn default() -> Self {
        let options = ConlluOptions::default();
        Self {
            attachable_upos: options.attachable_upos,
            sentence_separator: options.sentence_separator,
            character_tables: None,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,

    /// Sentence count above which chunking goes parallel
    pub parallel_threshold: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            worker_threads: 0,
            parallel_threshold: carve_core::api::defaults::PARALLEL_THRESHOLD,
        }
    }
}

impl CliConfig {
    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Build the CoNLL-U annotator described by `[input]`
    pub fn annotator(&self) -> Result<ConlluAnnotator> {
        let annotator = ConlluAnnotator::with_options(ConlluOptions {
            attachable_upos: self.input.attachable_upos.clone(),
            sentence_separator: self.input.sentence_separator.clone(),
        });

        match &self.input.character_tables {
            Some(path) => {
                let tables = CharacterTables::from_file(path)
                    .map_err(|e| CliError::ConfigError(e.to_string()))?;
                log::info!("Using character tables '{}'", tables.name());
                Ok(annotator.with_tables(tables))
            }
            None => Ok(annotator),
        }
    }

    /// Session configuration; `threads` overrides `[performance]`
    pub fn session_config(&self, threads: Option<usize>) -> Result<Config> {
        let threads = threads.or(match self.performance.worker_threads {
            0 => None,
            n => Some(n),
        });

        Config::builder()
            .threads(threads)
            .parallel_threshold(self.performance.parallel_threshold)
            .build()
            .map_err(|e| CliError::from(e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config.chunking.max_length, Some(40));
        assert_eq!(config.chunking.count, None);
        assert_eq!(config.output.default_format, OutputFormat::Text);
        assert_eq!(config.input.attachable_upos, vec!["PUNCT", "SPACE"]);
        assert_eq!(config.performance.worker_threads, 0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CliConfig::from_toml_str(
            r#"
[chunking]
count = 3
max_length = 0

[output]
default_format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.chunking.count, Some(3));
        assert_eq!(config.chunking.max_length, Some(0));
        assert_eq!(config.output.default_format, OutputFormat::Json);
        assert!(config.output.pretty_json);
        assert_eq!(config.input.sentence_separator, " ");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = CliConfig::from_toml_str("[output]\ndefault_format = \"yaml\"").unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("carve.toml");
        fs::write(&path, "[performance]\nworker_threads = 2\n").unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        let session = config.session_config(None).unwrap();
        assert_eq!(session.threads(), Some(2));

        let session = config.session_config(Some(4)).unwrap();
        assert_eq!(session.threads(), Some(4));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/carve.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_zero_threads_flag_rejected() {
        let config = CliConfig::default();
        let err = config.session_config(Some(0)).unwrap_err();
        assert!(err.to_string().contains("threads must be greater than 0"));
    }

    #[test]
    fn test_custom_character_tables() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tables.toml");
        fs::write(
            &path,
            r#"
[metadata]
name = "minimal"

[quotes]
chars = ['"']

[brackets]
open = ['(']
close = [')']

[currency]
chars = ['$']

[punctuation]
chars = ['.']
"#,
        )
        .unwrap();

        let mut config = CliConfig::default();
        config.input.character_tables = Some(path);
        assert!(config.annotator().is_ok());

        config.input.character_tables = Some(temp_dir.path().join("missing.toml"));
        assert!(config.annotator().is_err());
    }
}
