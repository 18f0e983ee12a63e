// Copyright (c) 2024-present, slidewin
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::HashMap;
use std::hash::Hash;

/// Occurrence counts of the keys inside one window
///
/// Keys whose count drops to zero are removed, so [`FrequencyMap::distinct`]
/// always equals the number of keys currently present.
#[derive(Clone, Debug)]
pub struct FrequencyMap<K: Hash + Eq> {
    counts: HashMap<K, usize>,
}

impl<K: Hash + Eq> Default for FrequencyMap<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::default(),
        }
    }
}

impl<K: Hash + Eq> FromIterator<K> for FrequencyMap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut map = Self::default();
        for key in iter {
            map.increment(key);
        }
        map
    }
}

impl<K: Hash + Eq> FrequencyMap<K> {
    /// Returns the occurrence count of `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or_default()
    }

    /// Returns `true` if `key` occurs at least once.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.counts.contains_key(key)
    }

    /// Counts one more occurrence of `key`, returning the new count.
    pub fn increment(&mut self, key: K) -> usize {
        let count = self.counts.entry(key).or_default();
        *count += 1;
        *count
    }

    /// Removes one occurrence of `key`, returning the new count.
    ///
    /// Decrementing an absent key is a no-op that returns 0.
    pub fn decrement(&mut self, key: &K) -> usize {
        let Some(count) = self.counts.get_mut(key) else {
            return 0;
        };

        *count -= 1;

        let remaining = *count;
        if remaining == 0 {
            self.counts.remove(key);
        }
        remaining
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no key is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Forgets all keys.
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}
