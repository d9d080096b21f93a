//! CLI module - Command-line interface definitions and handlers

use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::rank::DEFAULT_REPORT_LIMIT;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::core::source::InputSource;
use crate::flows::analyze::AnalyzeOptions;

/// Literal single argument that runs the self-test instead of an analysis
pub const LEGACY_SELF_TEST_ARG: &str = "RunAllTests";

/// trigrams - report the most frequent three-word sequences in text.
#[derive(Parser, Debug)]
#[command(name = "trigrams")]
#[command(
    author,
    version,
    about,
    long_about = r#"trigrams splits text into lowercase words and counts every run of three
consecutive words. The most frequent runs are printed, highest count first.

Words never join across two inputs: each file (or standard input) is
tokenized on its own, and the counts are summed.

Output formats:
- text: one "<trigram>: <count>" line per entry (default)
- json: a single JSON array
- jsonl: one JSON object per line

Examples:
    trigrams book.txt
    trigrams part1.txt part2.txt --limit 20
    cat book.txt | trigrams --format jsonl
    trigrams --self-test
"#
)]
pub struct Cli {
    /// Files to analyze (reads standard input when none are given).
    #[arg(
        value_name = "FILES",
        long_help = "Files to analyze, processed in the given order.\n\n\
A file that cannot be opened is reported with a \"Could not find file\" line and\n\
skipped; the run continues with the remaining files.\n\n\
When no files are given, all of standard input is read as one text."
    )]
    pub files: Vec<PathBuf>,

    /// Output format (text/json/jsonl).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format for the report.\n\n\
Supported values:\n\
- text (default)\n\
- json\n\
- jsonl"
    )]
    pub format: String,

    /// Maximum number of trigrams to report.
    #[arg(
        long,
        default_value_t = DEFAULT_REPORT_LIMIT,
        value_name = "N",
        long_help = "Maximum number of trigrams to report, at most 100. Larger values are\n\
capped at 100. Entries with equal counts are ordered alphabetically, so\n\
truncation is deterministic."
    )]
    pub limit: usize,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (no "could not find file" lines).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (per-source statistics on stderr).
    #[arg(short, long)]
    pub verbose: bool,

    /// Check the tokenizer and ranking against built-in cases and exit.
    #[arg(long, conflicts_with = "files")]
    pub self_test: bool,
}

impl Cli {
    fn wants_self_test(&self) -> bool {
        self.self_test
            || (self.files.len() == 1 && self.files[0].as_os_str() == LEGACY_SELF_TEST_ARG)
    }

    fn sources(&self) -> Vec<InputSource> {
        if self.files.is_empty() {
            vec![InputSource::Stdin]
        } else {
            self.files
                .iter()
                .map(|path| InputSource::File(path.clone()))
                .collect()
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.wants_self_test() {
        return crate::flows::selftest::run_self_test();
    }

    let format: OutputFormat = cli.format.parse().map_err(|e: String| anyhow!(e))?;
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let options = AnalyzeOptions {
        limit: cli.limit,
        quiet: cli.quiet,
        verbose: cli.verbose,
    };

    crate::flows::analyze::run_analyze(&cli.sources(), options, render_config)
}
