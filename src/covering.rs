// Copyright (c) 2024-present, slidewin
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{FrequencyMap, Window};

/// Returns the byte span of the shortest substring of `source` that contains every
/// character of `target`, at least as often as it occurs in `target`.
///
/// Length is measured in characters; of several equally short windows the leftmost wins.
/// Returns `None` if no such substring exists.
#[must_use]
pub fn min_window_span(source: &str, target: &str) -> Option<Window> {
    // NOTE: Any covering window holds all of `target`'s chars, so it is at least
    // as many bytes long as `target`
    if source.is_empty() || target.is_empty() || source.len() < target.len() {
        return None;
    }

    let required = target.chars().collect::<FrequencyMap<_>>();
    let required_distinct = required.distinct();

    let mut window = FrequencyMap::default();
    let mut satisfied = 0;

    // (char count, byte span)
    let mut best: Option<(usize, Window)> = None;

    let mut tail = source.char_indices();
    let mut left_byte = 0;
    let mut left_char = 0;

    for (right_char, (right_byte, c)) in source.char_indices().enumerate() {
        // NOTE: Chars that are not required have a requirement of 0, which a count never equals
        if window.increment(c) == required.get(&c) {
            satisfied += 1;
        }

        while satisfied == required_distinct {
            let char_len = right_char - left_char + 1;

            if best.is_none_or(|(best_len, _)| char_len < best_len) {
                best = Some((
                    char_len,
                    Window {
                        start: left_byte,
                        len: right_byte + c.len_utf8() - left_byte,
                    },
                ));
            }

            let Some((_, head)) = tail.next() else {
                break;
            };

            if window.decrement(&head) < required.get(&head) {
                satisfied -= 1;
            }

            left_char += 1;
            left_byte += head.len_utf8();
        }
    }

    if best.is_none() {
        log::trace!("no window of {source:?} covers {target:?}");
    }

    best.map(|(_, span)| span)
}

/// Returns the shortest substring of `source` that contains every character of
/// `target`, at least as often as it occurs in `target`, or `""` if there is none.
///
/// See [`min_window_span`].
#[must_use]
pub fn min_window<'a>(source: &'a str, target: &str) -> &'a str {
    min_window_span(source, target)
        .and_then(|span| span.substr(source))
        .unwrap_or_default()
}
