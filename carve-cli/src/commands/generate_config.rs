//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to set default chunk bounds and output format");
        println!("2. Use it for chunking:");
        println!(
            "   carve chunk -i input.conllu --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> &'static str {
        r#"# carve configuration

[chunking]
# Used when neither --count nor --max-length is given. Set exactly one.
# count = 3
max_length = 40

[output]
# text, json or markdown
default_format = "text"
pretty_json = true

[input]
# UPOS tags whose tokens are merged into neighbouring words
attachable_upos = ["PUNCT", "SPACE"]
# Text placed between sentences when rebuilding a document
sentence_separator = " "
# Custom attachable character tables
# character_tables = "tables.toml"

[performance]
# 0 = one thread per core
worker_threads = 0
# Sentence count above which chunking runs in parallel
parallel_threshold = 64
"#
    }
}
