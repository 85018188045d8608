//! CLI command implementations

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::output::OutputFormat;

pub mod chunk;
pub mod generate_config;
pub mod sentences;

/// Split dependency-parsed sentences into readable chunks
#[derive(Debug, Parser)]
#[command(name = "carve", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Chunk(args) => args.execute(),
            Commands::Sentences(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                match subcommand {
                    ListCommands::Formats => {
                        println!("Available output formats:");
                        for (name, description) in OutputFormat::describe_all() {
                            println!("  {name:<10} - {description}");
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split sentences of CoNLL-U files into chunks
    Chunk(chunk::ChunkArgs),

    /// Print the sentences of CoNLL-U files verbatim
    Sentences(sentences::SentencesArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

/// Buffered writer to `path`, or stdout
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}
