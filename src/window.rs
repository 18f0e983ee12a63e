// Copyright (c) 2024-present, slidewin
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

/// A contiguous range `[start, start + len)` into a sequence
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Window {
    /// Index of the first element
    pub start: usize,

    /// Number of elements
    pub len: usize,
}

impl Window {
    /// Creates a window from its inclusive bounds `[left, right]`.
    #[must_use]
    pub fn from_bounds(left: usize, right: usize) -> Self {
        debug_assert!(right >= left, "window bounds are inverted");

        Self {
            start: left,
            len: right - left + 1,
        }
    }

    /// Index one past the last element.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Returns `true` if the window covers no element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `self` is strictly shorter than `other`.
    ///
    /// A missing `other` is treated as infinitely long.
    #[must_use]
    pub fn is_shorter_than(&self, other: Option<&Self>) -> bool {
        other.is_none_or(|other| self.len < other.len)
    }

    /// Borrows the covered part of `items`, if the window lies inside it.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> Option<&'a [T]> {
        items.get(self.start..self.end())
    }

    /// Borrows the covered part of `s`, if the window lies on char boundaries.
    #[must_use]
    pub fn substr<'a>(&self, s: &'a str) -> Option<&'a str> {
        s.get(self.start..self.end())
    }
}
