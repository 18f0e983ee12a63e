// Copyright (c) 2024-present, slidewin
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

/// Represents errors that can occur when validating algorithm inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The word list of a concatenation search is empty
    EmptyWordList,

    /// The word list contains an empty word
    EmptyWord,

    /// A word does not have the same length as the first word
    UnequalWordLength {
        /// Position of the offending word in the list
        index: usize,

        /// Length of the first word
        expected: usize,

        /// Length of the offending word
        got: usize,
    },

    /// The value bound of a near-duplicate query is negative
    NegativeValueBound(i64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "word list is empty"),
            Self::EmptyWord => write!(f, "word list contains an empty word"),
            Self::UnequalWordLength {
                index,
                expected,
                got,
            } => write!(
                f,
                "word #{index} has length {got}, expected {expected} (all words must be equally long)"
            ),
            Self::NegativeValueBound(bound) => {
                write!(f, "value bound must not be negative, got {bound}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Validation result
pub type Result<T> = std::result::Result<T, Error>;
