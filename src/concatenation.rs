// Copyright (c) 2024-present, slidewin
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{Error, FrequencyMap, Result};

/// A validated list of equally long, non-empty words
///
/// Used to find every position in a source string where all words occur
/// back to back, in any order.
///
/// Lengths and positions are counted in characters.
#[derive(Clone, Debug)]
pub struct WordList<'a> {
    required: FrequencyMap<&'a str>,
    word_len: usize,
    word_count: usize,
}

/// Byte offset of every char in `source`, followed by `source.len()`
fn char_boundaries(source: &str) -> Vec<usize> {
    source
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(source.len()))
        .collect()
}

/// Returns the `word_len` chars starting at char position `pos`.
fn chunk<'s>(
    source: &'s str,
    boundaries: &[usize],
    pos: usize,
    word_len: usize,
) -> Option<&'s str> {
    let start = *boundaries.get(pos)?;
    let end = *boundaries.get(pos + word_len)?;
    source.get(start..end)
}

impl<'a> WordList<'a> {
    /// Validates a word list.
    ///
    /// Duplicate words are allowed; each copy must be matched separately.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, contains an empty word,
    /// or its words differ in length.
    pub fn try_new<S: AsRef<str>>(words: &'a [S]) -> Result<Self> {
        let Some(first) = words.first() else {
            return Err(Error::EmptyWordList);
        };

        let word_len = first.as_ref().chars().count();

        for (index, word) in words.iter().enumerate() {
            let got = word.as_ref().chars().count();

            if got == 0 {
                return Err(Error::EmptyWord);
            }

            if got != word_len {
                return Err(Error::UnequalWordLength {
                    index,
                    expected: word_len,
                    got,
                });
            }
        }

        Ok(Self {
            required: words.iter().map(|word| word.as_ref()).collect(),
            word_len,
            word_count: words.len(),
        })
    }

    /// Length of every word in chars.
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of words, including duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Returns `true` if the list holds no word (never, once validated).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Char length of the concatenation of all words.
    ///
    /// Returns `None` if it does not fit into `usize`.
    #[must_use]
    pub fn total_len(&self) -> Option<usize> {
        self.word_len.checked_mul(self.word_count)
    }

    /// Returns the char positions in `source` at which a concatenation of all words starts,
    /// in ascending order.
    #[must_use]
    pub fn find_in(&self, source: &str) -> Vec<usize> {
        let Some(total_len) = self.total_len() else {
            return vec![];
        };

        let boundaries = char_boundaries(source);
        let char_count = boundaries.len() - 1;

        if char_count < total_len {
            log::trace!(
                "source of {char_count} chars is shorter than {total_len} char concatenation"
            );
            return vec![];
        }

        let mut matches = Vec::new();

        // A match starts at one of `word_len` offsets modulo `word_len`,
        // each scanned separately in whole-word steps
        for offset in 0..self.word_len {
            self.scan_from(source, &boundaries, offset, &mut matches);
        }

        matches.sort_unstable();
        matches
    }

    fn scan_from(
        &self,
        source: &str,
        boundaries: &[usize],
        offset: usize,
        matches: &mut Vec<usize>,
    ) {
        let word_len = self.word_len;

        let mut seen = FrequencyMap::default();
        let mut matched = 0;

        let mut left = offset;
        let mut right = offset;

        while let Some(word) = chunk(source, boundaries, right, word_len) {
            let next = right + word_len;

            if self.required.contains(&word) {
                let required = self.required.get(&word);

                if seen.increment(word) <= required {
                    matched += 1;
                } else {
                    // Too many copies of `word`, shrink until one is dropped
                    while seen.get(&word) > required {
                        let Some(head) = chunk(source, boundaries, left, word_len) else {
                            break;
                        };

                        if seen.decrement(&head) < self.required.get(&head) {
                            matched -= 1;
                        }
                        left += word_len;
                    }
                }

                if matched == self.word_count {
                    matches.push(left);

                    // Slide by one word so overlapping matches are found
                    if let Some(head) = chunk(source, boundaries, left, word_len) {
                        seen.decrement(&head);
                        matched -= 1;
                        left += word_len;
                    }
                }
            } else {
                // Cannot be part of any match, restart behind it
                seen.clear();
                matched = 0;
                left = next;
            }

            right = next;
        }
    }
}

/// Returns every char position in `source` at which all `words` occur back to back,
/// in any order, each exactly as often as it appears in `words`.
///
/// Returns an empty list if `words` is empty, contains an empty word, or
/// its words differ in length (see [`WordList::try_new`] for a validating variant).
///
/// Runs in _O(n · w)_ for a source of `n` chars and word length `w`.
#[must_use]
pub fn find_substring<S: AsRef<str>>(source: &str, words: &[S]) -> Vec<usize> {
    if source.is_empty() {
        return vec![];
    }

    match WordList::try_new(words) {
        Ok(words) => words.find_in(source),
        Err(e) => {
            log::trace!("Invalid word list: {e}");
            vec![]
        }
    }
}
