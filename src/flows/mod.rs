//! Flows module - End-to-end commands built on the core
//!
//! - Analyze: read sources, count trigrams, print the ranked report
//! - Self-test: check tokenizer and ranking against known inputs

pub mod analyze;
pub mod selftest;
