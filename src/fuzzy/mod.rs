// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two layers here: plain Levenshtein distance over characters, and
//! [`fuzzy_match`], which turns distance into a `[0, 1]` similarity between a
//! text and a single query term.

mod levenshtein;
mod matcher;

pub use levenshtein::*;
pub use matcher::*;
