// Copyright (c) 2024-present, slidewin
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use super::{Bounds, DetectionStrategy};
use crate::HashMap;

#[doc(hidden)]
pub const NAME: &str = "BucketedNearDuplicate";

/// Bucket-based near-duplicate detection
///
/// Values are partitioned into buckets of width `value_bound + 1`, so:
///
/// - two values in the same bucket are always close enough
/// - two values in adjacent buckets may be close enough
/// - two values further apart never are
///
/// Because a hit in the same bucket ends the scan, every bucket holds at most one value,
/// and only the buckets of the last `index_bound` elements are retained.
///
/// _O(n)_ time, _O(min(n, index_bound))_ space.
#[derive(Copy, Clone, Debug, Default)]
pub struct Strategy;

/// Maps bucket ID to the value that occupies the bucket
struct BucketMap {
    width: i128,
    buckets: HashMap<i128, i64>,
}

impl BucketMap {
    fn new(width: i128) -> Self {
        Self {
            width,
            buckets: HashMap::default(),
        }
    }

    fn bucket_id(&self, value: i64) -> i128 {
        i128::from(value).div_euclid(self.width)
    }

    /// Returns `true` if a retained value is within `width - 1` of `value`.
    fn has_neighbour(&self, value: i64) -> bool {
        let id = self.bucket_id(value);

        if self.buckets.contains_key(&id) {
            return true;
        }

        [id - 1, id + 1].iter().any(|adjacent| {
            self.buckets
                .get(adjacent)
                .is_some_and(|&other| (i128::from(value) - i128::from(other)).abs() < self.width)
        })
    }

    fn insert(&mut self, value: i64) {
        self.buckets.insert(self.bucket_id(value), value);
    }

    fn evict(&mut self, value: i64) {
        self.buckets.remove(&self.bucket_id(value));
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

        let mut buckets = BucketMap::new(i128::from(bounds.value) + 1);

        for (idx, &value) in elements.iter().enumerate() {
            if buckets.has_neighbour(value) {
                log::trace!("{NAME}: found near-duplicate of {value} at #{idx}");
                return true;
            }

            buckets.insert(value);

            // Keep only the last `index_bound` elements for the next position
            if let Some(&evicted) = idx
                .checked_sub(bounds.index)
                .and_then(|pos| elements.get(pos))
            {
                buckets.evict(evicted);
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn bucket_ids_floor_negative_values() {
        let buckets = BucketMap::new(3);

        assert_eq!(0, buckets.bucket_id(0));
        assert_eq!(0, buckets.bucket_id(2));
        assert_eq!(1, buckets.bucket_id(3));
        assert_eq!(-1, buckets.bucket_id(-1));
        assert_eq!(-1, buckets.bucket_id(-3));
        assert_eq!(-2, buckets.bucket_id(-4));
    }

    #[test]
    fn bucket_adjacent_needs_value_check() {
        let mut buckets = BucketMap::new(3);
        buckets.insert(0);

        // bucket 1, but 4 - 0 > 2
        assert!(!buckets.has_neighbour(4));

        // bucket 1, 3 - 0 <= 2 does not hold either
        assert!(!buckets.has_neighbour(3));

        buckets.insert(2);
        assert!(buckets.has_neighbour(4));
    }

    #[test]
    fn bucket_eviction() {
        let mut buckets = BucketMap::new(1);
        buckets.insert(5);
        assert!(buckets.has_neighbour(5));

        buckets.evict(5);
        assert!(!buckets.has_neighbour(5));
    }

    #[test]
    fn bucket_window_slides() {
        // 1 and 1 are 3 apart, the window only spans 2
        assert!(!Strategy.detect(&[1, 5, 9, 1], Bounds::new(2, 0)));
        assert!(Strategy.detect(&[1, 5, 9, 1], Bounds::new(3, 0)));
    }

    #[test]
    fn bucket_negative_value_bound() {
        assert!(!Strategy.detect(&[1, 1], Bounds::new(1, -1)));
        assert!(!Strategy.detect(&[i64::MIN, i64::MIN], Bounds::new(1, i64::MIN)));
    }
}
