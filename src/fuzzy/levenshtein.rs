// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Classic edit distance: insertion, deletion and substitution each cost 1.
//!
//! The DP grid is `(len(b) + 1) × (len(a) + 1)` with the index values along both
//! edges. Only one row is ever live, so memory is `O(len(a))`.
//!
//! Lengths are in characters. "лифт" is 4 characters and 8 bytes; byte-based
//! distance would double-count every Cyrillic substitution.

/// Edit distance between `a` and `b`.
///
/// Symmetric in value. Callers that care about cost consistency pass
/// `(word, query_term)` in that order.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Row for the empty prefix of `b`: distance to each prefix of `a` is its length
    let mut row: Vec<usize> = (0..=a.len()).collect();

    for (i, bc) in b.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, ac) in a.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    row[a.len()]
}
