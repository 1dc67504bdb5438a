use std::collections::HashMap;

use log::debug;

use crate::tokenizer;

/// Occurrences of each lower-cased word in a body of text.
///
/// Keys are made only of word characters; punctuation and hyphenated
/// segments never appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCount {
    counts: HashMap<String, u64>,
}

impl WordCount {
    /// Number of distinct words.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all occurrences.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// Consume the mapping, yielding `(word, count)` pairs in arbitrary order.
    pub fn into_entries(self) -> impl Iterator<Item = (String, u64)> {
        self.counts.into_iter()
    }
}

impl FromIterator<(String, u64)> for WordCount {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for (word, count) in iter {
            *counts.entry(word).or_insert(0) += count;
        }
        WordCount { counts }
    }
}

/// Build the word → occurrences mapping for `text`.
///
/// Every segment containing a non-word character (hyphens, commas, full
/// stops, ...) is dropped whole; the rest are lower-cased so that `The` and
/// `the` share one entry.
pub fn count(text: &str) -> WordCount {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for word in tokenizer::words(text) {
        *counts.entry(word).or_insert(0) += 1;
    }

    debug!("counted {} distinct words", counts.len());
    WordCount { counts }
}
