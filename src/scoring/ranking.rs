// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored results get sorted.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Position** - the item's index in the input sequence, ascending
//!
//! The position tiebreaker makes equal scores keep the order the store listed
//! them in, independent of which sort algorithm runs underneath.

use std::cmp::Ordering;

/// An item with its score and its position in the sequence it was scored from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<T> {
    pub position: usize,
    pub score: f64,
    pub item: T,
}

/// Compare two ranked items: higher score first, then earlier position.
pub fn compare_ranked<T>(a: &Ranked<T>, b: &Ranked<T>) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        // Final tie-breaker: input position for absolute determinism
        _ => a.position.cmp(&b.position),
    }
}

/// Drop non-positive scores and sort the rest.
pub fn rank<T>(items: Vec<Ranked<T>>) -> Vec<Ranked<T>> {
    let mut kept: Vec<Ranked<T>> = items.into_iter().filter(|r| r.score > 0.0).collect();
    kept.sort_by(compare_ranked);
    kept
}
