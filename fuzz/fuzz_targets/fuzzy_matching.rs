// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and fuzzy matching.
//!
//! Verifies metric properties of the distance and the value contract of
//! `fuzzy_match`: 0, exactly 1 on containment, otherwise at least the threshold.

#![no_main]

use arbitrary::Arbitrary;
use giskb::{fuzzy_match, levenshtein_distance, normalize};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    text: String,
    query: String,
    /// Scaled into [0, 1]
    threshold: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let text: String = input.text.chars().take(120).collect();
    let query: String = input.query.chars().take(40).collect();
    let threshold = f64::from(input.threshold) / 255.0;

    // INVARIANT 1: distance is symmetric and bounded by the longer input
    let d = levenshtein_distance(&text, &query);
    assert_eq!(d, levenshtein_distance(&query, &text));
    assert!(d <= text.chars().count().max(query.chars().count()));
    assert!(d >= text.chars().count().abs_diff(query.chars().count()));

    // INVARIANT 2: score in [0, 1], and either 0 or at least the threshold
    let score = fuzzy_match(&text, &query, threshold);
    assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    assert!(score == 0.0 || score >= threshold);

    // INVARIANT 3: containment is exactly 1
    if normalize(&text).contains(&normalize(&query)) {
        assert_eq!(score, 1.0);
    }
});
