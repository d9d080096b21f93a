//! trigrams - count and rank three-word sequences in text
//!
//! trigrams provides:
//! - Unicode-aware word tokenization
//! - Trigram counting across several inputs
//! - A ranked report (text/json/jsonl)

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
