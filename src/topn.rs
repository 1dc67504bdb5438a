use log::{debug, info};
use serde::Serialize;

use crate::counter::WordCount;
use crate::heap::FrequencyHeap;

/// Number of words reported when the caller does not ask for a specific amount.
pub const DEFAULT_TOP_N: usize = 10;

/// One ranked word in the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u64,
}

/// The `n` most frequent words, most frequent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopN {
    pub entries: Vec<WordFrequency>,
    pub requested: usize,
}

impl TopN {
    /// Number of entries actually returned.
    pub fn returned(&self) -> usize {
        self.entries.len()
    }

    /// True when fewer words were available than requested.
    pub fn is_truncated(&self) -> bool {
        self.entries.len() < self.requested
    }
}

/// Select the `n` highest-count words from `counts`.
///
/// Builds a max-heap over the whole vocabulary in one pass, then extracts the
/// maximum `min(n, V)` times: O(V + n log V) instead of sorting all V words.
pub fn top_n(counts: WordCount, n: usize) -> TopN {
    let mut heap = FrequencyHeap::from_counts(counts);
    debug!("built frequency heap over {} words", heap.len());

    let take = n.min(heap.len());
    if take < n {
        info!("only {} distinct words available, {} requested", take, n);
    }

    let mut entries = Vec::with_capacity(take);
    for _ in 0..take {
        match heap.pop_max() {
            Some(entry) => entries.push(WordFrequency {
                word: entry.word,
                count: entry.count,
            }),
            None => break,
        }
    }

    TopN {
        entries,
        requested: n,
    }
}
