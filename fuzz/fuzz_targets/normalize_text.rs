// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for text normalization.
//!
//! Every comparison in the crate goes through `normalize`, so its output shape
//! is load-bearing: letters, digits and single spaces, no `ё`, and a second pass
//! changes nothing.

#![no_main]

use giskb::normalize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let once = normalize(&text);

    // INVARIANT 1: idempotent
    assert_eq!(normalize(&once), once, "normalize is not idempotent");

    // INVARIANT 2: trimmed, single-spaced
    assert_eq!(once.trim(), once);
    assert!(!once.contains("  "));

    // INVARIANT 3: only word characters and spaces survive, ё is folded
    assert!(once.chars().all(|c| c == ' ' || c.is_alphanumeric()));
    assert!(!once.contains('ё'));
});
