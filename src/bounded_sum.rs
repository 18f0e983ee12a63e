// Copyright (c) 2024-present, slidewin
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::Window;

/// Returns the leftmost shortest contiguous run of `elements` whose sum
/// is at least `threshold`.
///
/// Elements must be non-negative, so shrinking the window from the left can only
/// lower its sum. That makes a single forward pass sufficient: _O(n)_ time, _O(1)_ space.
///
/// The empty run is never reported, so a threshold of 0 is met by the first element.
#[must_use]
pub fn min_subarray_window(threshold: u64, elements: &[u64]) -> Option<Window> {
    let threshold = u128::from(threshold);

    let mut best: Option<Window> = None;
    let mut sum = 0u128;

    let mut left = 0;
    let mut tail = elements.iter();

    for (right, &value) in elements.iter().enumerate() {
        sum += u128::from(value);

        while left <= right && sum >= threshold {
            let candidate = Window::from_bounds(left, right);

            if candidate.is_shorter_than(best.as_ref()) {
                best = Some(candidate);
            }

            // NOTE: `tail` always points at `left`
            if let Some(&evicted) = tail.next() {
                sum -= u128::from(evicted);
            }
            left += 1;
        }
    }

    if best.is_none() {
        log::trace!("no run of {} elements reaches {threshold}", elements.len());
    }

    best
}

/// Returns the length of the shortest contiguous run of `elements` whose sum
/// is at least `threshold`, or 0 if there is none.
///
/// See [`min_subarray_window`].
#[must_use]
pub fn min_subarray_len(threshold: u64, elements: &[u64]) -> usize {
    min_subarray_window(threshold, elements).map_or(0, |window| window.len)
}
