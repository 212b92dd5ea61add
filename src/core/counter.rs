//! Frequency counting with first-seen tie-breaking.
//!
//! Every ranked table in chatstat (busy users, words, emoji, activity maps)
//! orders by descending count and breaks ties by the order in which keys were
//! first seen. [`FrequencyCounter`] keeps that order stable regardless of
//! hashing.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences of keys, remembering first-seen order.
#[derive(Debug, Clone)]
pub struct FrequencyCounter<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K> Default for FrequencyCounter<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyCounter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 += 1;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, 1));
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// All `(key, count)` pairs, most frequent first, ties in first-seen order.
    pub fn into_ranked(self) -> Vec<(K, usize)> {
        let mut ranked = self.entries;
        // sort_by is stable, so equal counts keep insertion order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` most frequent pairs.
    pub fn most_common(self, n: usize) -> Vec<(K, usize)> {
        let mut ranked = self.into_ranked();
        ranked.truncate(n);
        ranked
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyCounter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}
