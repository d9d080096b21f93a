//! Self-test flow - check the tokenizer and ranking against known inputs
//!
//! The same scenario table backs the unit tests, so `trigrams --self-test`
//! and `cargo test` check identical cases.

use anyhow::{bail, Result};

use crate::core::counter::{count_trigrams, FrequencyTable};
use crate::core::rank::{rank, RankedEntry, DEFAULT_REPORT_LIMIT};
use crate::core::tokenizer::Tokenizer;

/// A tokenizer input with its expected tokens
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub input: &'static str,
    pub expected: &'static [&'static str],
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "basic",
        input: "I love sandwiches.",
        expected: &["i", "love", "sandwiches"],
    },
    Scenario {
        name: "multiple spaces",
        input: "I   love         sandwiches",
        expected: &["i", "love", "sandwiches"],
    },
    Scenario {
        name: "quotes and newline",
        input: "\"I love\nsandwiches?\"",
        expected: &["i", "love", "sandwiches"],
    },
    Scenario {
        name: "all caps",
        input: "I LOVE SANDWICHES!!",
        expected: &["i", "love", "sandwiches"],
    },
    Scenario {
        name: "accented letters",
        input: "Prince Vasíli Kurágin",
        expected: &["prince", "vasíli", "kurágin"],
    },
    Scenario {
        name: "curly quotes and comma",
        input: "\u{201C}Sandwiches,\u{201D} he said",
        expected: &["sandwiches", "he", "said"],
    },
];

/// An end-to-end input with its expected report
#[derive(Debug, Clone, Copy)]
pub struct RankingCase {
    pub name: &'static str,
    pub input: &'static str,
    pub expected: &'static [(&'static str, u64)],
}

pub const RANKING_CASES: &[RankingCase] = &[
    RankingCase {
        name: "repeating cycle",
        input: "a b c a b c a b",
        expected: &[("a b c", 2), ("b c a", 2), ("c a b", 2)],
    },
    RankingCase {
        name: "ties after the leader",
        input: "a b c d a b c e",
        expected: &[
            ("a b c", 2),
            ("b c d", 1),
            ("b c e", 1),
            ("c d a", 1),
            ("d a b", 1),
        ],
    },
];

/// Check every scenario, returning the names of those that failed
pub fn check_all(tokenizer: &Tokenizer) -> Vec<String> {
    let mut failures = Vec::new();

    for scenario in SCENARIOS {
        let tokens = tokenizer.tokenize(scenario.input);
        if tokens != scenario.expected {
            failures.push(format!(
                "{}: expected {:?}, got {:?}",
                scenario.name, scenario.expected, tokens
            ));
        }
    }

    for case in RANKING_CASES {
        let mut table = FrequencyTable::new();
        count_trigrams(&tokenizer.tokenize(case.input), &mut table);
        let report = rank(&table, DEFAULT_REPORT_LIMIT);
        let expected: Vec<RankedEntry> = case
            .expected
            .iter()
            .map(|&(key, count)| RankedEntry::new(key, count))
            .collect();
        if report != expected {
            failures.push(format!(
                "{}: expected {:?}, got {:?}",
                case.name, expected, report
            ));
        }
    }

    failures
}

/// Run the self-test and print a confirmation line
pub fn run_self_test() -> Result<()> {
    let failures = check_all(&Tokenizer::default());
    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("FAILED {}", failure);
        }
        bail!("{} self-test case(s) failed", failures.len());
    }

    println!("All tests passed!");
    Ok(())
}
