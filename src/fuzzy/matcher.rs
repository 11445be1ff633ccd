// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text-to-term similarity.
//!
//! Containment short-circuits to 1.0 before any distance is computed. Otherwise
//! each word of the text is compared to the term and the **first** word reaching
//! the threshold wins, not the best one. Ranking depends on this, so don't
//! "improve" it to a max.

use crate::fuzzy::levenshtein_distance;
use crate::utils::{char_len, normalize};

/// Minimum similarity for a word to count as a fuzzy hit.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.7;

/// Words and terms shorter than this never take part in distance comparison.
/// Two-letter tokens like "ук" are one edit away from half the dictionary.
pub const MIN_FUZZY_LEN: usize = 3;

/// Similarity in `[0, 1]` between `text` and `query`; both are normalized first.
///
/// - `1.0` if the normalized text contains the normalized query (any length)
/// - else `1 - distance / max_len` of the first word at or above `threshold`
/// - else `0.0`
pub fn fuzzy_match(text: &str, query: &str, threshold: f64) -> f64 {
    fuzzy_match_normalized(&normalize(text), &normalize(query), threshold)
}

/// [`fuzzy_match`] for inputs that are already normalized.
pub fn fuzzy_match_normalized(text: &str, query: &str, threshold: f64) -> f64 {
    if text.contains(query) {
        return 1.0;
    }

    let query_len = char_len(query);
    if query_len < MIN_FUZZY_LEN {
        return 0.0;
    }

    for word in text.split(' ') {
        let word_len = char_len(word);
        if word_len < MIN_FUZZY_LEN {
            continue;
        }

        let max_len = word_len.max(query_len) as f64;

        // Early-exit: length difference is a lower bound on edit distance
        let best_possible = 1.0 - word_len.abs_diff(query_len) as f64 / max_len;
        if best_possible < threshold {
            continue;
        }

        let distance = levenshtein_distance(word, query);
        let similarity = 1.0 - distance as f64 / max_len;
        if similarity >= threshold {
            return similarity;
        }
    }

    0.0
}
