// Copyright (c) 2024-present, slidewin
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! Finds two elements that are close both in position and in value.
//!
//! Given `elements`, an index bound `k` and a value bound `t`, a near-duplicate is
//! a pair `i != j` with `|i - j| <= k` and `|elements[i] - elements[j]| <= t`.
//!
//! Two strategies are provided, and they always agree:
//!
//! - [`Bucketed`] partitions the value domain into buckets of width `t + 1` (_O(n)_)
//! - [`OrderedWindow`] keeps the last `k` values in an ordered multiset (_O(n log k)_)

pub(crate) mod bucket;
pub(crate) mod ordered;

pub use bucket::Strategy as Bucketed;
pub use ordered::Strategy as OrderedWindow;

use crate::{Error, Result};

/// Index and value distance limits of a near-duplicate query
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    /// Maximum index distance
    pub index: usize,

    /// Maximum value distance
    ///
    /// A negative value bound can never be met.
    pub value: i64,
}

impl Bounds {
    /// Creates a new bound pair.
    #[must_use]
    pub fn new(index: usize, value: i64) -> Self {
        Self { index, value }
    }

    /// Creates a new bound pair, rejecting a negative value bound.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeValueBound`] if `value` is negative.
    pub fn try_new(index: usize, value: i64) -> Result<Self> {
        if value < 0 {
            return Err(Error::NegativeValueBound(value));
        }
        Ok(Self::new(index, value))
    }
}

/// Trait for a near-duplicate detection strategy
pub trait DetectionStrategy {
    /// Gets the strategy name.
    fn get_name(&self) -> &'static str;

    /// Returns `true` if `elements` contains a near-duplicate pair within `bounds`.
    ///
    /// Returns `false` if the value bound is negative.
    fn detect(&self, elements: &[i64], bounds: Bounds) -> bool;
}

/// Returns `true` if two elements are at most `index_bound` positions and at most
/// `value_bound` apart in value.
///
/// Uses the [`Bucketed`] strategy.
#[must_use]
pub fn has_near_duplicate(elements: &[i64], index_bound: usize, value_bound: i64) -> bool {
    has_near_duplicate_with(&Bucketed, elements, index_bound, value_bound)
}

/// Like [`has_near_duplicate`], using the given strategy.
#[must_use]
pub fn has_near_duplicate_with(
    strategy: &dyn DetectionStrategy,
    elements: &[i64],
    index_bound: usize,
    value_bound: i64,
) -> bool {
    strategy.detect(elements, Bounds::new(index_bound, value_bound))
}
