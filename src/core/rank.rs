//! Ranking of counted trigrams

use serde::{Deserialize, Serialize};

use crate::core::counter::FrequencyTable;

/// Maximum number of report entries; also the hard cap
pub const DEFAULT_REPORT_LIMIT: usize = 100;

/// One line of the ranked report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub trigram: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(trigram: impl Into<String>, count: u64) -> Self {
        Self {
            trigram: trigram.into(),
            count,
        }
    }
}

/// Sort the table by count descending and keep the first `limit` entries,
/// never more than `DEFAULT_REPORT_LIMIT`.
///
/// The table iterates in lexicographic key order and `sort_by` is stable,
/// so equal counts stay in key order.
pub fn rank(table: &FrequencyTable, limit: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = table
        .iter()
        .map(|(key, count)| RankedEntry::new(key, count))
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit.min(DEFAULT_REPORT_LIMIT));
    entries
}
