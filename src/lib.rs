// Copyright (c) 2024-present, slidewin
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! A small collection of sliding-window algorithms over slices and strings.
//!
//! ##### About
//!
//! Every algorithm in this crate is a pure function: it takes an in-memory slice
//! or string, keeps a window `[left, right]` plus some aggregate over it (a running sum,
//! a frequency map, a set of buckets, an ordered multiset), and returns a primitive result.
//!
//! Inputs that cannot produce a match (empty sequences, too-short sources, malformed
//! word lists, negative bounds) never panic; they return a "no result" sentinel
//! (`0`, `false`, an empty list or an empty string). Callers that want to tell a
//! malformed input apart from a miss can use the validating constructors
//! ([`WordList::try_new`], [`Bounds::try_new`]), which return [`Error`].
//!
//! ```
//! use slidewin::{find_substring, has_near_duplicate, min_subarray_len, min_window};
//!
//! assert_eq!(2, min_subarray_len(7, &[2, 3, 1, 2, 4, 3]));
//! assert!(has_near_duplicate(&[1, 2, 3, 1], 3, 0));
//! assert_eq!(vec![0, 9], find_substring("barfoothefoobarman", &["foo", "bar"]));
//! assert_eq!("BANC", min_window("ADOBECODEBANC", "ABC"));
//! ```

#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![allow(clippy::option_if_let_else)]
#![warn(clippy::redundant_feature_names)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[doc(hidden)]
pub type HashMap<K, V> = std::collections::HashMap<K, V, rustc_hash::FxBuildHasher>;

mod bounded_sum;
mod concatenation;
mod covering;
mod error;
mod frequency;

pub mod near_duplicate;

mod window;

pub use {
    bounded_sum::{min_subarray_len, min_subarray_window},
    concatenation::{find_substring, WordList},
    covering::{min_window, min_window_span},
    error::{Error, Result},
    frequency::FrequencyMap,
    near_duplicate::{
        has_near_duplicate, has_near_duplicate_with, Bounds, Bucketed, DetectionStrategy,
        OrderedWindow,
    },
    window::Window,
};
