//! Trigram counting
//!
//! A trigram is three consecutive tokens of one source, keyed by their
//! space-joined form. Counts from several sources accumulate into one
//! `FrequencyTable`; windows never span two sources.

use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};

use crate::core::tokenizer::Token;

/// Number of tokens in one window
pub const TRIGRAM_LEN: usize = 3;

/// Trigram key -> occurrence count, iterated in lexicographic key order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-insert-zero, then add one. Returns the new count.
    pub fn increment(&mut self, key: impl Into<String>) -> u64 {
        self.add(key, 1)
    }

    /// Add `n` occurrences of `key`
    pub fn add(&mut self, key: impl Into<String>, n: u64) -> u64 {
        let count = self.counts.entry(key.into()).or_insert(0);
        *count += n;
        *count
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<u64> {
        self.counts.get(key).copied()
    }

    /// Number of distinct trigrams
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    #[cfg(test)]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in lexicographic key order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }

    /// Fold another table into this one
    pub fn merge(&mut self, other: FrequencyTable) {
        for (key, n) in other.counts {
            self.add(key, n);
        }
    }
}

/// Iterator over `(key, count)` pairs of a `FrequencyTable`
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, u64>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), *v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a str, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Join three tokens into a lookup key
pub fn trigram_key(a: &str, b: &str, c: &str) -> String {
    let mut key = String::with_capacity(a.len() + b.len() + c.len() + 2);
    key.push_str(a);
    key.push(' ');
    key.push_str(b);
    key.push(' ');
    key.push_str(c);
    key
}

/// Count every trigram window of `tokens` into `table`.
///
/// Returns the number of windows counted; sequences shorter than three
/// tokens contribute nothing.
pub fn count_trigrams(tokens: &[Token], table: &mut FrequencyTable) -> usize {
    if tokens.len() < TRIGRAM_LEN {
        return 0;
    }

    let mut windows = 0;
    for w in tokens.windows(TRIGRAM_LEN) {
        table.increment(trigram_key(&w[0], &w[1], &w[2]));
        windows += 1;
    }
    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenizer::tokenize;

    fn table_of(text: &str) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        count_trigrams(&tokenize(text), &mut table);
        table
    }

    #[test]
    fn test_short_sequences_produce_nothing() {
        let mut table = FrequencyTable::new();
        assert_eq!(count_trigrams(&[], &mut table), 0);
        assert_eq!(count_trigrams(&["a".to_string()], &mut table), 0);
        assert_eq!(
            count_trigrams(&["a".to_string(), "b".to_string()], &mut table),
            0
        );
        assert!(table.is_empty());
    }

    #[test]
    fn test_exactly_three_tokens() {
        let table = table_of("I love sandwiches.");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("i love sandwiches"), Some(1));
    }

    #[test]
    fn test_repeated_windows() {
        let table = table_of("a b c a b c a b");
        assert_eq!(table.get("a b c"), Some(2));
        assert_eq!(table.get("b c a"), Some(2));
        assert_eq!(table.get("c a b"), Some(2));
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn test_window_count_returned() {
        let mut table = FrequencyTable::new();
        let tokens = tokenize("one two three four five");
        assert_eq!(count_trigrams(&tokens, &mut table), 3);
    }

    #[test]
    fn test_increment_inserts_then_adds() {
        let mut table = FrequencyTable::new();
        assert_eq!(table.get("x y z"), None);
        assert_eq!(table.increment("x y z"), 1);
        assert_eq!(table.increment("x y z"), 2);
        assert_eq!(table.get("x y z"), Some(2));
    }

    #[test]
    fn test_iteration_is_lexicographic() {
        let mut table = FrequencyTable::new();
        table.increment("c a b");
        table.increment("a b c");
        table.increment("b c a");
        let keys: Vec<_> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a b c", "b c a", "c a b"]);
    }

    #[test]
    fn test_sources_do_not_join() {
        // "x y" then "z w" must not produce "y z w" or "x y z"
        let mut table = FrequencyTable::new();
        count_trigrams(&tokenize("x y"), &mut table);
        count_trigrams(&tokenize("z w"), &mut table);
        assert!(table.is_empty());
    }

    #[test]
    fn test_merge_is_order_independent() {
        let a = table_of("the cat sat on the mat");
        let b = table_of("the cat sat down");
        let c = table_of("on the mat the cat sat");

        let mut left = a.clone();
        left.merge(b.clone());
        left.merge(c.clone());

        let mut right = c;
        right.merge(a);
        right.merge(b);

        assert_eq!(left, right);
        assert_eq!(left.get("the cat sat"), Some(3));
    }

    #[test]
    fn test_trigram_key_joins_with_single_spaces() {
        assert_eq!(trigram_key("vasíli", "kurágin", "said"), "vasíli kurágin said");
    }
}
