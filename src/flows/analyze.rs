//! Analyze flow - tokenize every source, count trigrams, rank the result
//!
//! Sources are processed one at a time in the order given. An unreadable
//! file is reported and skipped; it never aborts the run.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

use crate::core::counter::{count_trigrams, FrequencyTable};
use crate::core::rank::{rank, RankedEntry, DEFAULT_REPORT_LIMIT};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::source::{read_source, InputSource, SourceError};
use crate::core::tokenizer::Tokenizer;

/// Options for one analysis run
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeOptions {
    /// Maximum number of report entries
    pub limit: usize,
    /// Suppress "could not find file" diagnostics
    pub quiet: bool,
    /// Per-source statistics on stderr
    pub verbose: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_REPORT_LIMIT,
            quiet: false,
            verbose: false,
        }
    }
}

/// Outcome of an analysis run
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub table: FrequencyTable,
    pub report: Vec<RankedEntry>,
    pub sources_read: usize,
    pub sources_skipped: usize,
    pub tokens: usize,
    pub windows: usize,
}

/// Count one text block on its own, then fold it into the shared table
fn absorb(analysis: &mut Analysis, tokenizer: &Tokenizer, text: &str) -> (usize, usize) {
    let tokens = tokenizer.tokenize(text);
    let mut counts = FrequencyTable::new();
    let windows = count_trigrams(&tokens, &mut counts);
    analysis.table.merge(counts);
    analysis.sources_read += 1;
    analysis.tokens += tokens.len();
    analysis.windows += windows;
    (tokens.len(), windows)
}

/// Analyze `sources`, writing skip diagnostics to `diagnostics`.
///
/// Only a failure to read standard input is returned as an error.
pub fn analyze<W: Write>(
    sources: &[InputSource],
    tokenizer: &Tokenizer,
    options: AnalyzeOptions,
    mut diagnostics: W,
) -> Result<Analysis> {
    let mut analysis = Analysis::default();

    for source in sources {
        let read = match read_source(source) {
            Ok(read) => read,
            Err(e @ SourceError::Unreadable { .. }) => {
                analysis.sources_skipped += 1;
                if !options.quiet {
                    writeln!(diagnostics, "{}", e.to_string().yellow())?;
                }
                if options.verbose {
                    if let Some(cause) = std::error::Error::source(&e) {
                        eprintln!("   {} {}", "cause:".dimmed(), cause);
                    }
                }
                continue;
            }
            Err(e @ SourceError::Stdin(_)) => return Err(e.into()),
        };

        let (tokens, windows) = absorb(&mut analysis, tokenizer, &read.text);

        if options.verbose {
            eprintln!(
                "{} {}: {} tokens, {} trigrams{}",
                "read".green(),
                source.label(),
                tokens,
                windows,
                if read.lossy {
                    " (invalid UTF-8 replaced)"
                } else {
                    ""
                }
            );
        }
    }

    analysis.report = rank(&analysis.table, options.limit);

    if options.verbose {
        eprintln!(
            "{} {} sources, {} skipped, {} tokens, {} trigrams ({} distinct), {} reported",
            "done".green(),
            analysis.sources_read,
            analysis.sources_skipped,
            analysis.tokens,
            analysis.windows,
            analysis.table.len(),
            analysis.report.len()
        );
    }

    Ok(analysis)
}

/// Run analysis and print the report to stdout
pub fn run_analyze(
    sources: &[InputSource],
    options: AnalyzeOptions,
    render_config: RenderConfig,
) -> Result<()> {
    let tokenizer = Tokenizer::default();
    let stdout = io::stdout();

    let analysis = analyze(sources, &tokenizer, options, stdout.lock())?;

    Renderer::with_config(render_config)
        .render_to(&analysis.report, stdout.lock())
        .context("Failed to write report")?;

    Ok(())
}
