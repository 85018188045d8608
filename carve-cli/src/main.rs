//! carve command-line entry point

use carve_cli::commands::Cli;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    Cli::parse().execute()
}
