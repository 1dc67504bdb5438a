//! Array-backed binary max-heap of word frequencies.
//!
//! Ranking: a higher count ranks first. Equal counts rank by ascending word so
//! that extraction order is reproducible from run to run; the hash map the
//! entries come from has no stable iteration order of its own.

use std::cmp::Ordering;

use crate::counter::WordCount;

/// A `(word, count)` pair as stored in the heap.
///
/// `position` is the entry's current index in the heap array. It is kept in
/// sync on every swap and is only meaningful while the entry is in the heap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
    position: usize,
}

impl RankedEntry {
    pub fn position(&self) -> usize {
        self.position
    }

    /// Ordering used by the heap: `Greater` means `self` is extracted first.
    fn rank(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.word.cmp(&self.word))
    }
}

/// Max-heap keyed on word frequency.
#[derive(Debug, Default)]
pub struct FrequencyHeap {
    entries: Vec<RankedEntry>,
}

impl FrequencyHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move every entry of `counts` into a heap.
    ///
    /// Entries are laid out in whatever order the mapping yields them and the
    /// heap property is then established once, bottom-up, in O(V).
    pub fn from_counts(counts: WordCount) -> Self {
        let entries = counts
            .into_entries()
            .enumerate()
            .map(|(position, (word, count))| RankedEntry {
                word,
                count,
                position,
            })
            .collect();

        let mut heap = FrequencyHeap { entries };
        heap.heapify();
        heap
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The current highest-ranked entry, without removing it.
    pub fn peek(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    /// Insert a single entry, O(log V).
    pub fn push(&mut self, word: impl Into<String>, count: u64) {
        let position = self.entries.len();
        self.entries.push(RankedEntry {
            word: word.into(),
            count,
            position,
        });
        self.sift_up(position);
    }

    /// Remove and return the highest-ranked entry, O(log V).
    pub fn pop_max(&mut self) -> Option<RankedEntry> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let mut top = self.entries.pop()?;

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        top.position = usize::MAX;
        Some(top)
    }

    fn heapify(&mut self) {
        let len = self.entries.len();
        for i in (0..len / 2).rev() {
            self.sift_down(i);
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[i].rank(&self.entries[parent]) != Ordering::Greater {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut largest = i;

            if left < len && self.entries[left].rank(&self.entries[largest]) == Ordering::Greater {
                largest = left;
            }
            if right < len && self.entries[right].rank(&self.entries[largest]) == Ordering::Greater
            {
                largest = right;
            }
            if largest == i {
                break;
            }

            self.swap(i, largest);
            i = largest;
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
        self.entries[i].position = i;
        self.entries[j].position = j;
    }

    /// True if every entry ranks at least as high as its children and every
    /// position marker matches its index.
    #[cfg(test)]
    fn is_valid(&self) -> bool {
        self.entries.iter().enumerate().all(|(i, entry)| {
            let children_ok = [2 * i + 1, 2 * i + 2]
                .iter()
                .filter_map(|&c| self.entries.get(c))
                .all(|child| entry.rank(child) != Ordering::Less);
            children_ok && entry.position == i
        })
    }
}
