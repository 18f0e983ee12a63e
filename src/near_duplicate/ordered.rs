// Copyright (c) 2024-present, slidewin
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use super::{Bounds, DetectionStrategy};
use crossbeam_skiplist::SkipSet;

#[doc(hidden)]
pub const NAME: &str = "OrderedWindowNearDuplicate";

/// Ordered-window near-duplicate detection
///
/// Keeps the last `index_bound` values in an ordered multiset and, for every
/// new value `v`, looks up the smallest retained value `>= v - value_bound`.
///
/// _O(n log k)_ time, _O(k)_ space, with `k = min(n, index_bound)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Strategy;

/// Ordered multiset of the values inside the index window
///
/// Entries are keyed by (value, position), so repeated values are distinct
/// entries ordered by insertion.
struct OrderedWindow {
    items: SkipSet<(i64, usize)>,
}

impl OrderedWindow {
    fn new() -> Self {
        Self {
            items: SkipSet::new(),
        }
    }

    fn insert(&self, value: i64, pos: usize) {
        self.items.insert((value, pos));
    }

    fn remove(&self, value: i64, pos: usize) {
        self.items.remove(&(value, pos));
    }

    /// Returns the smallest retained value that is `>= min`.
    fn ceiling(&self, min: i128) -> Option<i64> {
        // NOTE: Values below i64::MIN do not exist, so the search starts at the
        // lowest possible entry
        let min = i64::try_from(min).unwrap_or(i64::MIN);

        self.items
            .range((min, 0)..)
            .next()
            .map(|entry| entry.value().0)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl DetectionStrategy for Strategy {
    fn get_name(&self) -> &'static str {
        NAME
    }

    fn detect(&self, elements: &[i64], bounds: Bounds) -> bool {
        if bounds.value < 0 {
            log::trace!("{NAME}: negative value bound {}", bounds.value);
            return false;
        }

        let window = OrderedWindow::new();
        let value_bound = i128::from(bounds.value);

        for (idx, &value) in elements.iter().enumerate() {
            // Drop the element that slid out of the index window
            if let Some(pos) = bounds
                .index
                .checked_add(1)
                .and_then(|span| idx.checked_sub(span))
            {
                if let Some(&evicted) = elements.get(pos) {
                    window.remove(evicted, pos);
                }
            }

            let value_wide = i128::from(value);

            if let Some(candidate) = window.ceiling(value_wide - value_bound) {
                if i128::from(candidate) <= value_wide + value_bound {
                    log::trace!("{NAME}: {candidate} is a near-duplicate of {value} at #{idx}");
                    return true;
                }
            }

            window.insert(value, idx);

            debug_assert!(window.len() <= bounds.index.saturating_add(1));
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn ordered_window_ceiling() {
        let window = OrderedWindow::new();
        window.insert(5, 0);
        window.insert(1, 1);
        window.insert(9, 2);

        assert_eq!(Some(1), window.ceiling(-100));
        assert_eq!(Some(5), window.ceiling(2));
        assert_eq!(Some(5), window.ceiling(5));
        assert_eq!(Some(9), window.ceiling(6));
        assert_eq!(None, window.ceiling(10));
    }

    #[test]
    fn ordered_window_keeps_duplicates() {
        let window = OrderedWindow::new();
        window.insert(3, 0);
        window.insert(3, 1);
        assert_eq!(2, window.len());

        window.remove(3, 0);
        assert_eq!(Some(3), window.ceiling(3));

        window.remove(3, 1);
        assert_eq!(None, window.ceiling(3));
    }

    #[test]
    fn ordered_window_ceiling_below_min() {
        let window = OrderedWindow::new();
        window.insert(i64::MIN, 0);

        assert_eq!(Some(i64::MIN), window.ceiling(i128::from(i64::MIN) - 10));
    }

    #[test]
    fn ordered_window_slides() {
        assert!(!Strategy.detect(&[1, 5, 9, 1], Bounds::new(2, 0)));
        assert!(Strategy.detect(&[1, 5, 9, 1], Bounds::new(3, 0)));
    }

    #[test]
    fn ordered_window_negative_value_bound() {
        assert!(!Strategy.detect(&[1, 1], Bounds::new(1, -1)));
        assert!(!Strategy.detect(&[i64::MIN, i64::MIN], Bounds::new(1, i64::MIN)));
    }
}
